//! Identity resolution for Castwright
//!
//! [`from_config`] picks the backend once at startup: Firebase token
//! verification when the web API key and project id are configured, the demo
//! user otherwise.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod demo;
mod error;
mod firebase;
mod provider;

use std::sync::Arc;
use std::time::Duration;

use castwright_config::AuthConfig;

pub use demo::DemoAuthBackend;
pub use error::AuthError;
pub use firebase::FirebaseAuthBackend;
pub use provider::{AuthMode, AuthProvider};

/// Select the auth backend for this process
pub fn from_config(config: &AuthConfig) -> Result<Arc<dyn AuthProvider>, AuthError> {
    if let Some(api_key) = &config.firebase.api_key
        && config.firebase.is_configured()
    {
        let backend = FirebaseAuthBackend::new(
            api_key.clone(),
            &config.firebase,
            Duration::from_secs(config.cache_ttl_seconds),
        )?;
        tracing::info!(project_id = ?config.firebase.project_id, "using Firebase authentication");
        return Ok(Arc::new(backend));
    }

    tracing::info!(uid = %config.demo_user.uid, "Firebase not configured, using demo authentication");
    Ok(Arc::new(DemoAuthBackend::new(&config.demo_user)))
}
