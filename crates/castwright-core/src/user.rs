use serde::Serialize;

/// Identity resolved by the active auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}
