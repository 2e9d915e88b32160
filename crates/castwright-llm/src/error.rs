use thiserror::Error;

/// Errors from the external completion call
#[derive(Debug, Error)]
pub enum LlmError {
    /// Request did not finish within the configured timeout
    #[error("completion request timed out")]
    Timeout,

    /// Transport failure or non-success status
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider answered without usable text
    #[error("empty completion")]
    EmptyCompletion,

    /// Client could not be constructed
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Upstream(error.to_string())
        }
    }
}
