/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Token was rejected by the identity provider
    #[error("invalid ID token")]
    InvalidToken,

    /// HTTP request to the identity provider failed
    #[error("token verification failed: {0}")]
    VerificationFailed(#[from] reqwest::Error),

    /// Identity provider returned an unexpected response
    #[error("identity provider error ({status}): {message}")]
    ProviderError {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Backend could not be constructed
    #[error("auth configuration error: {0}")]
    Config(String),
}
