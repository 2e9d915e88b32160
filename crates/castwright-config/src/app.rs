use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Process-wide runtime settings
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
    /// Attach error details to 500 responses even outside development
    #[serde(default)]
    pub debug: bool,
}

impl AppConfig {
    /// Whether internal error details may be sent to clients
    pub const fn expose_error_details(&self) -> bool {
        self.debug || matches!(self.environment, Environment::Development)
    }
}

/// Deployment environment
///
/// Defaults to production so a bare deployment never exposes error details.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Development,
    #[default]
    Production,
    Test,
}
