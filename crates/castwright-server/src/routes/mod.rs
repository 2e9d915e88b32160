//! Endpoint handlers
//!
//! Each handler validates its input, delegates to a service, and wraps the
//! result. Upstream failures are absorbed by the services; only validation
//! and unexpected failures reach the client as errors.

mod content;
mod outline;
mod research;
mod scripts;
mod session;
mod trends;
mod voice;

use axum::Router;
use axum::routing::{get, post};
use castwright_core::ApiError;

use crate::state::SharedState;

/// Episode length used when a request omits `duration`
const DEFAULT_DURATION_MINUTES: i64 = 30;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/content/enhance", post(content::enhance))
        .route("/api/generate-facts", post(content::generate_facts))
        .route("/api/generate-news", post(content::generate_news))
        .route("/api/outline/generate", post(outline::generate_outline))
        .route("/api/script/outline", post(outline::script_outline))
        .route("/api/research/generate", post(research::generate))
        .route("/api/research/recommendations", post(research::recommendations))
        .route("/api/research/trends", post(research::trends))
        .route("/api/script/rate", post(scripts::rate))
        .route("/api/scripts/save", post(scripts::save))
        .route("/api/scripts/download", get(scripts::download))
        .route("/api/trends", post(trends::trends))
        .route("/api/voice/generate", post(voice::generate))
        .route("/api/auth/session", get(session::session))
}

/// Episode length in minutes, defaulting when absent
fn duration_minutes(value: Option<i64>) -> Result<i64, ApiError> {
    match value {
        None => Ok(DEFAULT_DURATION_MINUTES),
        Some(minutes) if minutes > 0 => Ok(minutes),
        Some(_) => Err(ApiError::validation("Duration must be a positive number of minutes")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_defaults_and_rejects_non_positive() {
        assert_eq!(duration_minutes(None).unwrap(), 30);
        assert_eq!(duration_minutes(Some(45)).unwrap(), 45);
        assert!(duration_minutes(Some(0)).is_err());
        assert!(duration_minutes(Some(-5)).is_err());
    }
}
