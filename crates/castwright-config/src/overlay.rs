use secrecy::SecretString;
use url::Url;

use crate::{Config, Environment, LogFormat};

/// Read the first non-empty variable among `names`
fn var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}

fn firebase_var(suffix: &str) -> Option<String> {
    let plain = format!("FIREBASE_{suffix}");
    let public = format!("NEXT_PUBLIC_FIREBASE_{suffix}");
    var(&[plain.as_str(), public.as_str()])
}

fn parse_flag(name: &str, value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{name} must be a boolean, got `{other}`"),
    }
}

impl Config {
    /// Overlay well-known process environment variables onto the parsed file
    ///
    /// Environment values win over file values. Empty variables are ignored.
    pub(crate) fn apply_env_overlay(&mut self) -> anyhow::Result<()> {
        if let Some(key) = var(&["OPENAI_API_KEY"]) {
            self.openai.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = var(&["OPENAI_BASE_URL"]) {
            self.openai.base_url =
                Some(Url::parse(&url).map_err(|e| anyhow::anyhow!("invalid OPENAI_BASE_URL: {e}"))?);
        }
        if let Some(model) = var(&["OPENAI_MODEL"]) {
            self.openai.model = model;
        }

        if let Some(key) = var(&["NEWS_API_KEY"]) {
            self.news.api_key = Some(SecretString::from(key));
        }

        let firebase = &mut self.auth.firebase;
        if let Some(key) = firebase_var("API_KEY") {
            firebase.api_key = Some(SecretString::from(key));
        }
        if let Some(value) = firebase_var("AUTH_DOMAIN") {
            firebase.auth_domain = Some(value);
        }
        if let Some(value) = firebase_var("PROJECT_ID") {
            firebase.project_id = Some(value);
        }
        if let Some(value) = firebase_var("STORAGE_BUCKET") {
            firebase.storage_bucket = Some(value);
        }
        if let Some(value) = firebase_var("MESSAGING_SENDER_ID") {
            firebase.messaging_sender_id = Some(value);
        }
        if let Some(value) = firebase_var("APP_ID") {
            firebase.app_id = Some(value);
        }

        if let Some(env) = var(&["APP_ENV", "NODE_ENV"]) {
            self.app.environment = env
                .parse::<Environment>()
                .map_err(|_| anyhow::anyhow!("unknown environment `{env}`"))?;
        }
        if let Some(flag) = var(&["ENABLE_DEBUG", "NEXT_PUBLIC_ENABLE_DEBUG"]) {
            self.app.debug = parse_flag("ENABLE_DEBUG", &flag)?;
        }

        if let Some(format) = var(&["LOG_FORMAT"]) {
            self.telemetry.format = format
                .parse::<LogFormat>()
                .map_err(|_| anyhow::anyhow!("unknown log format `{format}`"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    const ALL_VARS: [&str; 8] = [
        "OPENAI_API_KEY",
        "NEWS_API_KEY",
        "FIREBASE_API_KEY",
        "NEXT_PUBLIC_FIREBASE_API_KEY",
        "NEXT_PUBLIC_FIREBASE_PROJECT_ID",
        "APP_ENV",
        "NODE_ENV",
        "ENABLE_DEBUG",
    ];

    fn cleared<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|name| (*name, None)).collect();
        all.extend_from_slice(vars);
        temp_env::with_vars(all, f);
    }

    #[test]
    fn openai_key_from_environment() {
        cleared(&[("OPENAI_API_KEY", Some("sk-env"))], || {
            let mut config = Config::default();
            config.apply_env_overlay().unwrap();
            assert_eq!(config.openai.api_key.unwrap().expose_secret(), "sk-env");
        });
    }

    #[test]
    fn empty_values_count_as_unset() {
        cleared(&[("OPENAI_API_KEY", Some("  "))], || {
            let mut config = Config::default();
            config.apply_env_overlay().unwrap();
            assert!(config.openai.api_key.is_none());
        });
    }

    #[test]
    fn next_public_firebase_aliases() {
        let vars = [
            ("NEXT_PUBLIC_FIREBASE_API_KEY", Some("fb-key")),
            ("NEXT_PUBLIC_FIREBASE_PROJECT_ID", Some("castwright")),
        ];
        cleared(&vars, || {
            let mut config = Config::default();
            config.apply_env_overlay().unwrap();
            assert!(config.auth.firebase.is_configured());
            assert_eq!(config.auth.firebase.project_id.as_deref(), Some("castwright"));
        });
    }

    #[test]
    fn node_env_is_accepted_as_environment() {
        cleared(&[("NODE_ENV", Some("production"))], || {
            let mut config = Config::default();
            config.apply_env_overlay().unwrap();
            assert_eq!(config.app.environment, Environment::Production);
        });
    }

    #[test]
    fn invalid_debug_flag_is_rejected() {
        cleared(&[("ENABLE_DEBUG", Some("maybe"))], || {
            let mut config = Config::default();
            let err = config.apply_env_overlay().unwrap_err();
            assert!(err.to_string().contains("ENABLE_DEBUG"));
        });
    }
}
