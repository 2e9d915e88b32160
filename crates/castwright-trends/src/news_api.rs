//! NewsAPI `everything` search

use std::time::Duration;

use castwright_config::NewsConfig;
use castwright_content::types::TrendItem;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::TrendsError;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    url: Option<String>,
    #[serde(default)]
    source: Source,
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Source {
    name: Option<String>,
}

impl Article {
    /// Articles without a title or link are unusable; NewsAPI also reports
    /// takedowns with the title `[Removed]`
    fn into_item(self) -> Option<TrendItem> {
        let title = self.title.filter(|t| !t.trim().is_empty() && t != "[Removed]")?;
        let url = self.url.filter(|u| !u.is_empty())?;

        Some(TrendItem {
            title,
            source: self.source.name.unwrap_or_else(|| "NewsAPI".to_owned()),
            url,
            score: None,
            published_at: self.published_at,
        })
    }
}

/// Client for the NewsAPI article search
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    page_size: u8,
}

impl NewsApiClient {
    pub fn new(api_key: SecretString, config: &NewsConfig) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| TrendsError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            page_size: config.page_size,
        })
    }

    fn everything_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/everything")
    }

    /// Most recent articles matching the topic
    pub async fn search(&self, topic: &str) -> Result<Vec<TrendItem>, TrendsError> {
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(self.everything_url())
            .header("X-Api-Key", self.api_key.expose_secret())
            .query(&[
                ("q", topic),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: SearchResponse = response.json().await?;

        if !status.is_success() || body.status != "ok" {
            let message = body.message.unwrap_or_else(|| format!("status {status}"));
            return Err(TrendsError::Upstream(message));
        }

        Ok(body.articles.into_iter().filter_map(Article::into_item).collect())
    }
}
