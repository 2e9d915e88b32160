use axum::Json;
use axum::extract::State;
use castwright_content::types::{Outline, OutlineRequest, OutlineResponse, ScriptOutlineRequest};
use castwright_core::{ApiError, validate};

use super::duration_minutes;
use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

pub async fn generate_outline(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<OutlineRequest>,
) -> Result<Json<OutlineResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    let duration = duration_minutes(request.duration)?;
    let members = request.member_count.unwrap_or(1);
    if members < 1 {
        return Err(ApiError::validation("memberCount must be at least 1").into());
    }

    let outline = state.content.outline(topic, duration, members).await;
    Ok(Json(OutlineResponse { outline }))
}

pub async fn script_outline(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<ScriptOutlineRequest>,
) -> Result<Json<Outline>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    let duration = duration_minutes(request.duration)?;

    let outline = state
        .content
        .script_outline(topic, duration, request.trends_data.as_ref())
        .await;
    Ok(Json(outline))
}
