use thiserror::Error;

/// Failure raised at the HTTP boundary. The detail is logged for diagnostics
/// and never rendered; views show a fixed retry message instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}
