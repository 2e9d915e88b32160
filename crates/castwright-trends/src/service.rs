use castwright_config::Config;
use castwright_content::mock;
use castwright_content::types::{TrendItem, TrendsResponse};

use crate::error::TrendsError;
use crate::hacker_news::HackerNewsClient;
use crate::news_api::NewsApiClient;

/// Items per source when serving mock data
const MOCK_ITEMS: usize = 5;

/// Discussions requested from Hacker News
const DISCUSSION_LIMIT: usize = 10;

/// News and discussions for a topic, each source falling back independently
#[derive(Clone, Default)]
pub struct TrendsService {
    news: Option<NewsApiClient>,
    discussions: Option<HackerNewsClient>,
}

impl TrendsService {
    pub fn from_config(config: &Config) -> Result<Self, TrendsError> {
        let news = match &config.news.api_key {
            Some(key) => Some(NewsApiClient::new(key.clone(), &config.news)?),
            None => {
                tracing::info!("NewsAPI key not configured, trending news will be mocked");
                None
            }
        };

        let discussions = if config.discussions.enabled {
            Some(HackerNewsClient::new(&config.discussions)?)
        } else {
            None
        };

        Ok(Self { news, discussions })
    }

    pub async fn trends(&self, topic: &str) -> TrendsResponse {
        let news = match &self.news {
            Some(client) => fallback("news", client.search(topic).await),
            None => None,
        };

        let discussions = match &self.discussions {
            Some(client) => fallback("discussions", client.search(topic, DISCUSSION_LIMIT).await),
            None => None,
        };

        TrendsResponse {
            news: news.unwrap_or_else(|| mock::news_items(topic, MOCK_ITEMS)),
            discussions: discussions.unwrap_or_else(|| mock::discussion_items(topic, MOCK_ITEMS)),
        }
    }
}

/// Usable items, or `None` after logging why the source is being mocked
fn fallback(source: &str, result: Result<Vec<TrendItem>, TrendsError>) -> Option<Vec<TrendItem>> {
    match result {
        Ok(items) if !items.is_empty() => Some(items),
        Ok(_) => {
            tracing::info!(source, "no trending items found, serving mock data");
            None
        }
        Err(error) => {
            tracing::warn!(source, error = %error, "trends source failed, serving mock data");
            None
        }
    }
}
