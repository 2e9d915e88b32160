use std::fmt::Write as _;
use std::time::Duration;

use async_trait::async_trait;
use castwright_config::FirebaseConfig;
use castwright_core::AuthenticatedUser;
use mini_moka::sync::Cache;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{AuthError, AuthMode, AuthProvider};

const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

const CACHE_CAPACITY: u64 = 10_000;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
}

/// Verifies Firebase ID tokens with the Identity Toolkit REST API
///
/// Verified users are cached by token digest for the configured TTL.
#[derive(Clone)]
pub struct FirebaseAuthBackend {
    http: reqwest::Client,
    identity_url: Url,
    api_key: SecretString,
    cache: Cache<String, AuthenticatedUser>,
}

impl FirebaseAuthBackend {
    pub fn new(api_key: SecretString, config: &FirebaseConfig, cache_ttl: Duration) -> Result<Self, AuthError> {
        let identity_url = match &config.identity_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_IDENTITY_URL).map_err(|e| AuthError::Config(e.to_string()))?,
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AuthError::Config(e.to_string()))?;

        let cache = Cache::builder()
            .time_to_live(cache_ttl)
            .max_capacity(CACHE_CAPACITY)
            .build();

        Ok(Self {
            http,
            identity_url,
            api_key,
            cache,
        })
    }

    fn lookup_url(&self) -> String {
        let base = self.identity_url.as_str().trim_end_matches('/');
        format!("{base}/accounts:lookup")
    }

    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let cache_key = sha256_hex(token);
        if let Some(user) = self.cache.get(&cache_key) {
            return Ok(user);
        }

        let response = self
            .http
            .post(self.lookup_url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&serde_json::json!({ "idToken": token }))
            .send()
            .await?;

        let status = response.status();
        // Identity Toolkit answers 400 INVALID_ID_TOKEN for bad or expired tokens
        if status == StatusCode::BAD_REQUEST {
            return Err(AuthError::InvalidToken);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let body: LookupResponse = response.json().await.map_err(|e| AuthError::ProviderError {
            status: status.as_u16(),
            message: format!("failed to parse response: {e}"),
        })?;

        let account = body.users.into_iter().next().ok_or(AuthError::InvalidToken)?;
        let user = AuthenticatedUser {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name,
        };

        self.cache.insert(cache_key, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthBackend {
    fn mode(&self) -> AuthMode {
        AuthMode::Firebase
    }

    async fn authenticate(&self, bearer: Option<&str>) -> Result<Option<AuthenticatedUser>, AuthError> {
        match bearer.map(str::trim).filter(|token| !token.is_empty()) {
            Some(token) => self.verify(token).await.map(Some),
            None => Ok(None),
        }
    }
}

/// Compute the SHA-256 hex digest of a string
fn sha256_hex(input: &str) -> String {
    use sha2::{Digest, Sha256};

    let digest = Sha256::digest(input.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    })
}
