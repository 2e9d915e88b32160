use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use castwright_core::{ApiError, HttpError};
use serde::Serialize;

/// JSON error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Handler error converted to an HTTP response
///
/// The body never carries details. When a cause exists it rides along in the
/// response extensions for [`error_details_middleware`] to expose or drop.
#[derive(Debug)]
pub struct ErrorResponse(pub ApiError);

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = error.status_code();

        if let ApiError::Internal { message, source } = &error {
            tracing::error!(error = %message, cause = %format!("{source:#}"), "request failed");
        } else {
            tracing::debug!(error = %error, error_type = error.error_type(), "request rejected");
        }

        let body = ErrorBody {
            error: error.client_message(),
            details: None,
        };
        let details = error.details();

        let mut response = (status, Json(body.clone())).into_response();
        if details.is_some() {
            response.extensions_mut().insert(ErrorBody { details, ..body });
        }
        response
    }
}

/// Attach error details to responses when the environment allows it
///
/// Details are exposed in development or with debug enabled, and stripped
/// everywhere else.
pub async fn error_details_middleware(expose: bool, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(body) = response.extensions_mut().remove::<ErrorBody>() else {
        return response;
    };

    if expose {
        return (response.status(), Json(body)).into_response();
    }

    response
}
