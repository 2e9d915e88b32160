use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// NewsAPI source for trending articles
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsConfig {
    /// API key; mock articles are served when absent
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default = "default_news_url")]
    pub base_url: Url,
    /// Articles requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u8,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_news_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Hacker News search source for trending discussions
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscussionsConfig {
    /// Disabled by default: discussions are mocked unless turned on
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_discussions_url")]
    pub base_url: Url,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DiscussionsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_discussions_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_news_url() -> Url {
    Url::parse("https://newsapi.org/v2/").expect("valid default URL")
}

fn default_discussions_url() -> Url {
    Url::parse("https://hn.algolia.com/api/v1/").expect("valid default URL")
}

const fn default_page_size() -> u8 {
    10
}

const fn default_timeout() -> u64 {
    10
}
