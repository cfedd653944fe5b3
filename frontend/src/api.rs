use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{AnalyseResponse, ChatRequest, ChatResponse};

use crate::error::ApiError;
use crate::state::AnalysisResult;

/// Base URL of the inference service, injected at build time. Deployments
/// that proxy the service under the site origin can leave it unset.
fn api_base() -> &'static str {
    option_env!("API_BASE").unwrap_or("/api")
}

/// Uploads one image as multipart form data and materializes the response
/// into displayable form. Issues exactly one request; never retries.
pub async fn analyse_image(file: &GlooFile) -> Result<AnalysisResult, ApiError> {
    let form_data = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build form data".into()))?;
    form_data
        .append_with_blob("image", file.as_ref())
        .map_err(|_| ApiError::Transport("could not attach image".into()))?;

    let response = Request::post(&format!("{}/analyse/", api_base()))
        .body(form_data)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let payload: AnalyseResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(AnalysisResult::from(payload))
}

/// Sends one chat turn scoped to the detected condition.
pub async fn send_chat_message(
    message: String,
    predicted_class: String,
) -> Result<ChatResponse, ApiError> {
    let body = ChatRequest {
        message,
        predicted_class,
    };

    let response = Request::post(&format!("{}/chatbot/", api_base()))
        .json(&body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
