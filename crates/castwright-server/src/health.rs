use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    environment: String,
    services: Services,
}

/// Whether each service is configured; nothing is probed
#[derive(Debug, Serialize)]
struct Services {
    firebase: bool,
    openai: bool,
}

/// Health check handler
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let config = &state.config;

    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now().to_string(),
        environment: config.app.environment.to_string(),
        services: Services {
            firebase: config.auth.firebase.is_configured(),
            openai: config.openai.is_configured(),
        },
    })
}
