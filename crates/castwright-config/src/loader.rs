use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file, then overlay the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, an environment value is malformed, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let mut config = Self::from_toml_str(&raw)?;
        config.apply_env_overlay()?;
        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the environment-only configuration
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(path = %path.display(), "config file not found, using environment only");
        Self::from_env()
    }

    /// Build configuration from defaults plus the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value is malformed or validation fails
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overlay()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text after expanding `{{ env.VAR }}` placeholders
    ///
    /// # Errors
    ///
    /// Returns an error if expansion or parsing fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_openai()?;
        self.validate_sources()?;
        Ok(())
    }

    fn validate_openai(&self) -> anyhow::Result<()> {
        let openai = &self.openai;

        if !(0.0..=2.0).contains(&openai.temperature) {
            anyhow::bail!("openai.temperature must be between 0 and 2, got {}", openai.temperature);
        }
        if openai.timeout_seconds == 0 || openai.speech.timeout_seconds == 0 {
            anyhow::bail!("openai timeouts must be greater than 0");
        }
        if openai.model.trim().is_empty() {
            anyhow::bail!("openai.model must not be empty");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let path = &self.server.health.path;
        if !path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got `{path}`");
        }
        if self.server.body_limit_bytes == 0 {
            anyhow::bail!("server.body_limit_bytes must be greater than 0");
        }

        Ok(())
    }

    fn validate_sources(&self) -> anyhow::Result<()> {
        if !(1..=100).contains(&self.news.page_size) {
            anyhow::bail!("news.page_size must be between 1 and 100");
        }
        if self.news.timeout_seconds == 0 || self.discussions.timeout_seconds == 0 {
            anyhow::bail!("source timeouts must be greater than 0");
        }
        if self.auth.cache_ttl_seconds == 0 {
            anyhow::bail!("auth.cache_ttl_seconds must be greater than 0");
        }

        Ok(())
    }
}
