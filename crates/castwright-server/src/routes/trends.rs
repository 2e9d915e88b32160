use axum::Json;
use axum::extract::State;
use castwright_content::types::{TopicRequest, TrendsResponse};
use castwright_core::validate;

use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

pub async fn trends(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<TopicRequest>,
) -> Result<Json<TrendsResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    Ok(Json(state.trends.trends(topic).await))
}
