use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use castwright_content::mock;
use castwright_content::types::{SaveScriptResponse, ScriptData, ScriptRatingRequest, ScriptRatingResponse};
use castwright_core::validate;
use http::header;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::SharedState;

pub async fn rate(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<ScriptRatingRequest>,
) -> Result<Json<ScriptRatingResponse>, ErrorResponse> {
    let script = validate::required("script", request.script.as_ref())?;
    Ok(Json(state.content.rate(script).await))
}

/// Accept a script for saving
///
/// Nothing is stored: the record is logged and an id is issued so the client
/// can request the download placeholder.
pub async fn save(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(script): JsonBody<ScriptData>,
) -> Result<Json<SaveScriptResponse>, ErrorResponse> {
    let topic = validate::present(script.topic.as_ref());
    let body = validate::present(script.script.as_ref());
    validate::require(&[("topic", topic), ("script", body)])?;

    let script_id = Uuid::new_v4().to_string();
    let user_id = user
        .map(|user| user.uid)
        .or_else(|| validate::present(script.user_id.as_ref()).map(str::to_owned))
        .unwrap_or_else(|| "anonymous".to_owned());

    tracing::info!(
        %script_id,
        %user_id,
        topic = topic.unwrap_or_default(),
        script_len = body.map_or(0, str::len),
        duration = ?script.duration,
        member_count = ?script.member_count,
        rating = ?script.rating,
        has_ai_rating = script.ai_rating.is_some(),
        has_outline = script.outline.is_some(),
        references = script.references.as_ref().map_or(0, Vec::len),
        created_at = ?script.created_at,
        "script saved"
    );

    Ok(Json(SaveScriptResponse {
        success: true,
        download_url: format!("/api/scripts/download?id={script_id}"),
        script_id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    id: Option<String>,
}

/// Plain-text attachment for a script id
pub async fn download(Query(query): Query<DownloadQuery>) -> Result<Response, ErrorResponse> {
    let id = safe_id(validate::required("id", query.id.as_ref())?);
    let disposition = format!("attachment; filename=\"script-{id}.txt\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        mock::script_document(&id),
    )
        .into_response())
}

/// Id restricted to characters safe inside a quoted header filename
fn safe_id(id: &str) -> String {
    let safe: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    if safe.is_empty() { "script".to_owned() } else { safe }
}
