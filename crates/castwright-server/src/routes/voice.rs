use axum::extract::State;
use axum::response::{IntoResponse, Response};
use castwright_content::types::VoiceRequest;
use castwright_core::{ApiError, validate};
use http::header;

use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

/// Synthesize speech; there is no fallback audio, so any failure is a 500
pub async fn generate(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<VoiceRequest>,
) -> Result<Response, ErrorResponse> {
    let text = validate::required("text", request.text.as_ref())?;

    let speech = state
        .speech
        .speak(text, request.settings.speed)
        .await
        .map_err(|e| ApiError::internal("Failed to generate voice", e))?;

    Ok(([(header::CONTENT_TYPE, speech.content_type)], speech.audio).into_response())
}
