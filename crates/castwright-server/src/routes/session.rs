use axum::extract::State;
use axum::{Extension, Json};
use castwright_auth::AuthMode;
use castwright_core::AuthenticatedUser;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<AuthenticatedUser>,
    mode: AuthMode,
}

/// Caller identity as resolved by the active auth provider
pub async fn session(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: user.is_some(),
        user,
        mode: state.auth_mode,
    })
}
