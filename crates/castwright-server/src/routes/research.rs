use axum::Json;
use axum::extract::State;
use castwright_content::mock;
use castwright_content::types::{
    RecommendationsRequest, RecommendationsResponse, ResearchResponse, ResearchTrendsResponse, TopicRequest,
};
use castwright_core::validate;

use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

pub async fn generate(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<TopicRequest>,
) -> Result<Json<ResearchResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    Ok(Json(state.content.research(topic).await))
}

/// Recommendations for the topic; the submitted trends are echoed back
pub async fn recommendations(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    let recommendations = state.content.recommendations(topic, &request.trends).await;

    Ok(Json(RecommendationsResponse {
        trends: request.trends,
        recommendations,
    }))
}

/// Search trends; there is no upstream source, so these are always mock data
pub async fn trends(JsonBody(request): JsonBody<TopicRequest>) -> Result<Json<ResearchTrendsResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;

    Ok(Json(ResearchTrendsResponse {
        trends: mock::research_trends(topic),
    }))
}
