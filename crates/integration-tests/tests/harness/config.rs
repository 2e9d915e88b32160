//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use castwright_config::{Config, CorsConfig, Environment, FirebaseConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal defaults: no credentials, so every generator serves fallback content
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        Self { config }
    }

    /// Point completions and speech at a mock OpenAI backend
    pub fn with_openai(mut self, base_url: &str) -> Self {
        self.config.openai.api_key = Some(SecretString::from("test-key"));
        self.config.openai.base_url = Some(base_url.parse().expect("valid URL"));
        self.config.openai.timeout_seconds = 5;
        self
    }

    /// Verify tokens against a mock Identity Toolkit endpoint
    pub fn with_firebase(mut self, identity_url: &str) -> Self {
        self.config.auth.firebase = FirebaseConfig {
            api_key: Some(SecretString::from("firebase-web-key")),
            project_id: Some("castwright-test".to_owned()),
            identity_url: Some(identity_url.parse().expect("valid URL")),
            ..FirebaseConfig::default()
        };
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.app.environment = environment;
        self
    }

    pub fn with_debug(mut self) -> Self {
        self.config.app.debug = true;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Mount the health endpoint somewhere other than `/api/health`
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
