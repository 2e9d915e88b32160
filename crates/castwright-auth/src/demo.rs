use async_trait::async_trait;
use castwright_config::DemoUserConfig;
use castwright_core::AuthenticatedUser;

use crate::{AuthError, AuthMode, AuthProvider};

/// Attributes every request to a fixed demo user
pub struct DemoAuthBackend {
    user: AuthenticatedUser,
}

impl DemoAuthBackend {
    pub fn new(config: &DemoUserConfig) -> Self {
        Self {
            user: AuthenticatedUser {
                uid: config.uid.clone(),
                email: Some(config.email.clone()),
                display_name: Some(config.display_name.clone()),
            },
        }
    }
}

#[async_trait]
impl AuthProvider for DemoAuthBackend {
    fn mode(&self) -> AuthMode {
        AuthMode::Demo
    }

    async fn authenticate(&self, _bearer: Option<&str>) -> Result<Option<AuthenticatedUser>, AuthError> {
        Ok(Some(self.user.clone()))
    }
}
