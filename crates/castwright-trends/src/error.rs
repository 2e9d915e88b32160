use thiserror::Error;

/// Errors from a trends source
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("request timed out")]
    Timeout,

    #[error("upstream error: {0}")]
    Upstream(String),

    /// Response body did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TrendsError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Upstream(error.to_string())
        }
    }
}
