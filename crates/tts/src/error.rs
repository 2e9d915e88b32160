use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// No speech provider is configured
    #[error("speech synthesis is not configured")]
    NotConfigured,

    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("speech request timed out")]
    Timeout,

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    #[error("configuration error: {0}")]
    ConfigError(String),
}
