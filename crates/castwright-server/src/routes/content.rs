use axum::Json;
use axum::extract::State;
use castwright_content::types::{
    EnhancementRequest, EnhancementResponse, EnhancementType, FactsResponse, NewsResponse, TopicRequest,
};
use castwright_core::validate;

use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

pub async fn enhance(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<EnhancementRequest>,
) -> Result<Json<EnhancementResponse>, ErrorResponse> {
    let content = validate::required("content", request.content.as_ref())?;
    let kind = EnhancementType::from_wire(request.enhancement_type.as_deref());

    Ok(Json(state.content.enhance(content, kind).await))
}

pub async fn generate_facts(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<TopicRequest>,
) -> Result<Json<FactsResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    let facts = state.content.facts(topic).await;

    Ok(Json(FactsResponse { facts }))
}

pub async fn generate_news(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<TopicRequest>,
) -> Result<Json<NewsResponse>, ErrorResponse> {
    let topic = validate::required("topic", request.topic.as_ref())?;
    let news = state.content.news(topic).await;

    Ok(Json(NewsResponse { news }))
}
