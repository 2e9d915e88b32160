//! Hacker News story search via the Algolia API

use std::time::Duration;

use castwright_config::DiscussionsConfig;
use castwright_content::types::TrendItem;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::TrendsError;

const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    url: Option<String>,
    points: Option<u32>,
    created_at: Option<String>,
}

impl Hit {
    fn into_item(self) -> Option<TrendItem> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        // Ask/Show posts have no external link
        let url = self
            .url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| format!("{ITEM_URL}{}", self.object_id));

        Some(TrendItem {
            title,
            source: "Hacker News".to_owned(),
            url,
            score: self.points,
            published_at: self.created_at,
        })
    }
}

#[derive(Clone)]
pub struct HackerNewsClient {
    client: Client,
    base_url: Url,
}

impl HackerNewsClient {
    pub fn new(config: &DiscussionsConfig) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| TrendsError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Stories matching the topic, most relevant first
    pub async fn search(&self, topic: &str, limit: usize) -> Result<Vec<TrendItem>, TrendsError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let hits = limit.to_string();

        let response = self
            .client
            .get(format!("{base}/search"))
            .query(&[("query", topic), ("tags", "story"), ("hitsPerPage", hits.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TrendsError::Upstream(format!("search returned {}", response.status())));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.hits.into_iter().filter_map(Hit::into_item).collect())
    }
}
