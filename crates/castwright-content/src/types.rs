//! Request and response records for the content endpoints
//!
//! Every record is transient: built from one inbound payload and dropped
//! once the response is serialized. Request fields are optional so that a
//! missing field reaches validation instead of failing deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, EnumString};

use crate::rating::RatingCriterion;

/// Kind of rewrite requested from `/api/content/enhance`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EnhancementType {
    Grammar,
    Clarity,
    Tone,
    Seo,
    #[default]
    Default,
}

impl EnhancementType {
    /// Parse the wire value; unknown or absent values mean `Default`
    pub fn from_wire(value: Option<&str>) -> Self {
        value.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRequest {
    pub content: Option<String>,
    pub enhancement_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResponse {
    pub enhanced_content: String,
    pub suggestions: Vec<String>,
}

/// Body shared by every topic-keyed endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TopicRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FactsResponse {
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news: Vec<NewsArticle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    pub topic: Option<String>,
    /// Episode length in minutes
    pub duration: Option<i64>,
    pub member_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineSection {
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outline {
    pub title: String,
    pub sections: Vec<OutlineSection>,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub outline: Outline,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutlineRequest {
    pub topic: Option<String>,
    pub trends_data: Option<Value>,
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResponse {
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsRequest {
    pub topic: Option<String>,
    #[serde(default)]
    pub trends: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub trends: Vec<Value>,
    pub recommendations: String,
}

/// A search trend with its traffic bucket and related articles
#[derive(Debug, Clone, Serialize)]
pub struct ResearchTrend {
    pub title: String,
    pub traffic: String,
    pub articles: Vec<TrendItem>,
}

#[derive(Debug, Serialize)]
pub struct ResearchTrendsResponse {
    pub trends: Vec<ResearchTrend>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScriptRatingRequest {
    pub script: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRatingResponse {
    /// Weighted average, one decimal place
    pub rating: f64,
    /// Criterion name to score in [1, 5], in table order
    pub detailed_ratings: IndexMap<String, f64>,
    pub feedback: Vec<String>,
    pub criteria: &'static [RatingCriterion],
}

/// Article or discussion surfaced by the trends endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendItem {
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub news: Vec<TrendItem>,
    pub discussions: Vec<TrendItem>,
}

/// Script submitted for saving; logged, never persisted
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptData {
    pub topic: Option<String>,
    pub script: Option<String>,
    pub outline: Option<Value>,
    pub duration: Option<i64>,
    pub member_count: Option<i64>,
    pub user_id: Option<String>,
    pub rating: Option<f64>,
    pub ai_rating: Option<Value>,
    pub created_at: Option<String>,
    pub references: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScriptResponse {
    pub success: bool,
    pub script_id: String,
    pub download_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub settings: VoiceSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceSettings {
    pub speed: Option<f64>,
}
