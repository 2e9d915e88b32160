use async_trait::async_trait;
use castwright_core::AuthenticatedUser;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::AuthError;

/// Which backend is resolving identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthMode {
    Demo,
    Firebase,
}

/// Resolves the caller's identity from a bearer token
///
/// One implementation is chosen at startup; request handling only ever sees
/// this trait.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    fn mode(&self) -> AuthMode;

    /// `Ok(None)` means an anonymous caller
    async fn authenticate(&self, bearer: Option<&str>) -> Result<Option<AuthenticatedUser>, AuthError>;
}
