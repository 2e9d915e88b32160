//! Trending news and discussions for a topic
//!
//! Thin pass-throughs to NewsAPI and Hacker News search. Either source is
//! replaced with mock items when it is not configured or the call fails.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod hacker_news;
mod news_api;
mod service;

pub use error::TrendsError;
pub use hacker_news::HackerNewsClient;
pub use news_api::NewsApiClient;
pub use service::TrendsService;
