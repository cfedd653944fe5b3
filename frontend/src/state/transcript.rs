use shared::{ChatMessage, ChatResponse, Role};

/// Synthetic greeting seeded into every chat session.
pub fn greeting(predicted_class: &str) -> String {
    format!(
        "Your recent X-ray analysis detected **{predicted_class}**. I'm Radiologix, \
         your AI radiology assistant. I'm here to provide information and support \
         about this condition. Please ask any questions or let me know how I can \
         assist you further."
    )
}

/// Append-only, insertion-ordered conversation log for one chat session.
///
/// User messages are client-stamped at append time; assistant replies keep
/// the server stamp verbatim. The seeded greeting is the one assistant
/// message that is client-stamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn seeded(predicted_class: &str, timestamp: String) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: greeting(predicted_class),
                timestamp,
            }],
        }
    }

    /// Optimistically appends a user message before its request is sent.
    /// Blank input appends nothing; otherwise returns the trimmed content
    /// that was stored, which is also what goes on the wire.
    pub fn push_user(&mut self, input: &str, timestamp: String) -> Option<String> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            content: content.to_owned(),
            timestamp,
        });
        Some(content.to_owned())
    }

    /// Appends an assistant reply with the server-supplied text and stamp.
    pub fn push_reply(&mut self, reply: ChatResponse) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply.response,
            timestamp: reply.timestamp,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(n: u32) -> String {
        format!("2025-05-01T10:00:{n:02}.000Z")
    }

    #[test]
    fn greeting_is_always_first_and_names_the_condition() {
        let transcript = Transcript::seeded("Pneumonia", stamp(0));
        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert!(first.content.contains("Pneumonia"));
        assert_eq!(first.timestamp, stamp(0));
    }

    #[test]
    fn user_message_precedes_its_reply() {
        let mut transcript = Transcript::seeded("Effusion", stamp(0));
        let sent = transcript.push_user("What does this mean?", stamp(1)).unwrap();
        assert_eq!(sent, "What does this mean?");
        transcript.push_reply(ChatResponse {
            response: "Fluid around the lungs.".into(),
            timestamp: "2025-05-01T09:59:59.000Z".into(),
        });

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        // server stamp kept verbatim even though it sorts before the user's
        assert_eq!(transcript.messages()[2].timestamp, "2025-05-01T09:59:59.000Z");
    }

    #[test]
    fn blank_input_appends_nothing() {
        let mut transcript = Transcript::seeded("Nodule", stamp(0));
        assert!(transcript.push_user("", stamp(1)).is_none());
        assert!(transcript.push_user("   ", stamp(2)).is_none());
        assert!(transcript.push_user("\n\t", stamp(3)).is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn input_is_trimmed_before_storage() {
        let mut transcript = Transcript::seeded("Mass", stamp(0));
        let sent = transcript.push_user("  is this serious?  ", stamp(1)).unwrap();
        assert_eq!(sent, "is this serious?");
        assert_eq!(transcript.messages()[1].content, "is this serious?");
    }

    #[test]
    fn failed_send_leaves_the_optimistic_message_in_place() {
        let mut transcript = Transcript::seeded("Cardiomegaly", stamp(0));
        transcript.push_user("hello?", stamp(1));
        // no reply arrives; the transcript still holds the user's message
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].role, Role::User);
        assert_eq!(transcript.messages()[1].content, "hello?");
    }
}
