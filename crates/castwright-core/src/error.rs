use http::StatusCode;
use thiserror::Error;

/// Trait for domain errors that can be converted to HTTP responses
///
/// The server layer turns these into responses, keeping domain crates
/// free of any web framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `validation_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Underlying cause, only sent to clients in development or debug mode
    fn details(&self) -> Option<String> {
        None
    }
}

/// Errors surfaced by API handlers
///
/// Upstream failures never appear here: they are recovered with fallback
/// content next to the call site.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid required input
    #[error("{0}")]
    Validation(String),

    /// Anything unexpected
    #[error("{message}")]
    Internal {
        /// Generic message shown to the client
        message: String,
        /// Cause, logged server-side
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Build a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build an internal error with a client-facing message and a private cause
    pub fn internal(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Internal { source, .. } => Some(format!("{source:#}")),
            Self::Validation(_) => None,
        }
    }
}
