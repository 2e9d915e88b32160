use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use castwright_core::ApiError;
use serde::de::DeserializeOwned;

use crate::error::ErrorResponse;

/// JSON body extractor with the API's error shape
///
/// Bodies that parse but do not fit the endpoint, or arrive without a JSON
/// content type, are validation errors. Unparsable JSON and body read
/// failures are internal errors. Missing fields are left to handler
/// validation because every request field is optional.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_error(&rejection).into()),
        }
    }
}

fn rejection_error(rejection: &JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::validation(data_error_message(&e.body_text())),
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::validation("Content-Type must be application/json")
        }
        other => ApiError::internal("Invalid request body", anyhow::anyhow!(other.body_text())),
    }
}

/// One-line message naming the offending field
///
/// axum renders data errors as `<preamble>: <path>: <serde message> at line
/// L column C`; the path is absent when the top-level value has the wrong
/// shape.
fn data_error_message(body_text: &str) -> String {
    let detail = body_text.split_once(": ").map_or(body_text, |(_, rest)| rest);
    let detail = detail.rfind(" at line ").map_or(detail, |at| &detail[..at]);

    match detail.split_once(": ") {
        Some((field, reason)) if !field.is_empty() && !field.contains(' ') => {
            format!("Invalid value for {field}: {reason}")
        }
        _ => format!("Invalid request body: {detail}"),
    }
}
