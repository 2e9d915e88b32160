use secrecy::SecretString;
use serde::Deserialize;

/// Authentication configuration
///
/// Firebase verification is used when both `api_key` and `project_id`
/// are set; otherwise every request is attributed to the demo user.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub demo_user: DemoUserConfig,
    /// Seconds a verified token stays cached
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            firebase: FirebaseConfig::default(),
            demo_user: DemoUserConfig::default(),
            cache_ttl_seconds: default_cache_ttl(),
        }
    }
}

/// Firebase web app configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirebaseConfig {
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub auth_domain: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub storage_bucket: Option<String>,
    #[serde(default)]
    pub messaging_sender_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    /// Identity Toolkit endpoint override
    #[serde(default)]
    pub identity_url: Option<url::Url>,
}

impl FirebaseConfig {
    /// Whether enough is configured to verify tokens
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.project_id.is_some()
    }
}

/// Identity served by demo mode
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoUserConfig {
    #[serde(default = "default_uid")]
    pub uid: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for DemoUserConfig {
    fn default() -> Self {
        Self {
            uid: default_uid(),
            email: default_email(),
            display_name: default_display_name(),
        }
    }
}

const fn default_cache_ttl() -> u64 {
    300
}

fn default_uid() -> String {
    "demo-user-123".to_string()
}

fn default_email() -> String {
    "demo@example.com".to_string()
}

fn default_display_name() -> String {
    "Demo User".to_string()
}
