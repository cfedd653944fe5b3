use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Response payload of `POST {API_BASE}/analyse/`. Both image fields carry
/// base64-encoded PNG bytes; the frontend materializes them into `data:` URIs
/// before storing a result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyseResponse {
    pub predicted_class: String,
    pub original_image: String,
    pub segmented_image: String,
}

/// Request payload of `POST {API_BASE}/chatbot/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub predicted_class: String,
}

/// Response payload of `POST {API_BASE}/chatbot/`. The timestamp is the
/// server's ISO-8601 stamp and is stored verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of a chat transcript. Ordering is by insertion, not by the
/// timestamp value: user messages are client-stamped while assistant replies
/// carry server stamps, and the two clocks may disagree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyse_response_decodes_wire_shape() {
        let json = r#"{
            "predicted_class": "Pneumonia",
            "original_image": "aGVsbG8=",
            "segmented_image": "d29ybGQ="
        }"#;
        let resp: AnalyseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.predicted_class, "Pneumonia");
        assert_eq!(resp.original_image, "aGVsbG8=");
        assert_eq!(resp.segmented_image, "d29ybGQ=");
    }

    #[test]
    fn chat_response_decodes_wire_shape() {
        let json = r#"{"response": "Rest and fluids.", "timestamp": "2025-05-01T10:00:00Z"}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "Rest and fluids.");
        assert_eq!(resp.timestamp, "2025-05-01T10:00:00Z");
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn chat_request_serializes_both_fields() {
        let req = ChatRequest {
            message: "What should I do next?".into(),
            predicted_class: "Effusion".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["message"], "What should I do next?");
        assert_eq!(value["predicted_class"], "Effusion");
    }
}
