//! Response normalizers
//!
//! Each function turns raw completion text into an endpoint's response shape.
//! None of them fail: unusable input yields `None` (or a fallback value) and
//! the caller substitutes mock content.

use indexmap::IndexMap;
use serde_json::Value;

use crate::rating;
use crate::types::{EnhancementResponse, NewsArticle, ResearchResponse};

/// Maximum facts kept from a completion
pub const MAX_FACTS: usize = 6;

/// Maximum enhancement suggestions kept
pub const MAX_SUGGESTIONS: usize = 5;

/// Pull a JSON value out of completion text
///
/// Accepts bare JSON, JSON inside a markdown code fence, or JSON embedded in
/// surrounding prose (first opening bracket to last matching closer).
pub fn extract_json(raw: &str) -> Option<Value> {
    let text = strip_code_fence(raw.trim());

    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }

    let start = text.find(['{', '['])?;
    let closer = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(closer)?;
    if end <= start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening fence line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Non-empty trimmed strings from an array, or from `object[key]`
fn string_list(value: &Value, key: &str) -> Vec<String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(key) {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Facts from a JSON array or `{"facts": [...]}`, at most [`MAX_FACTS`]
pub fn facts(raw: &str) -> Option<Vec<String>> {
    let mut facts = string_list(&extract_json(raw)?, "facts");
    facts.truncate(MAX_FACTS);
    (!facts.is_empty()).then_some(facts)
}

/// Articles from a JSON array or `{"news": [...]}`; untitled items are dropped
pub fn news(raw: &str) -> Option<Vec<NewsArticle>> {
    let value = extract_json(raw)?;
    let items = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map.get("news").and_then(Value::as_array).map(Vec::as_slice)?,
        _ => return None,
    };

    let articles: Vec<NewsArticle> = items
        .iter()
        .filter_map(|item| {
            let title = item.get("title")?.as_str()?.trim();
            if title.is_empty() {
                return None;
            }
            let content = item
                .get("content")
                .or_else(|| item.get("summary"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim();
            Some(NewsArticle {
                title: title.to_owned(),
                content: content.to_owned(),
            })
        })
        .collect();

    (!articles.is_empty()).then_some(articles)
}

/// Enhanced content and suggestions
///
/// Non-JSON text is taken as the enhanced content itself. Blank output keeps
/// the original content.
pub fn enhancement(raw: &str, original: &str) -> EnhancementResponse {
    if let Some(Value::Object(map)) = extract_json(raw) {
        let enhanced = map
            .get("enhancedContent")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(original);

        let mut suggestions = map
            .get("suggestions")
            .map(|value| string_list(value, "suggestions"))
            .unwrap_or_default();
        suggestions.truncate(MAX_SUGGESTIONS);

        return EnhancementResponse {
            enhanced_content: enhanced.to_owned(),
            suggestions,
        };
    }

    let text = raw.trim();
    EnhancementResponse {
        enhanced_content: if text.is_empty() { original } else { text }.to_owned(),
        suggestions: Vec::new(),
    }
}

/// Key findings and sources; `None` when both lists are empty
pub fn research(raw: &str) -> Option<ResearchResponse> {
    let value = extract_json(raw)?;
    let research = ResearchResponse {
        key_findings: value.get("keyFindings").map(|v| string_list(v, "")).unwrap_or_default(),
        sources: value.get("sources").map(|v| string_list(v, "")).unwrap_or_default(),
    };

    (!research.key_findings.is_empty() || !research.sources.is_empty()).then_some(research)
}

/// Trimmed free text, `None` when blank
pub fn free_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Scores and feedback parsed from a rating completion
#[derive(Debug, Clone, PartialEq)]
pub struct RatingDraft {
    /// Known criteria only, clamped to [1, 5], in table order
    pub scores: IndexMap<String, f64>,
    pub feedback: Vec<String>,
}

/// Parse `{ratings | detailedRatings: {criterion: score}, feedback: [...]}`
///
/// Unknown criteria are ignored and names are canonicalised against the
/// rating table. Scores may be numbers or numeric strings.
pub fn rating(raw: &str) -> Option<RatingDraft> {
    let value = extract_json(raw)?;
    let ratings = value
        .get("ratings")
        .or_else(|| value.get("detailedRatings"))
        .and_then(Value::as_object)?;

    let mut found: IndexMap<&'static str, f64> = IndexMap::new();
    for (name, score) in ratings {
        let Some(criterion) = rating::criterion(name) else {
            tracing::debug!(criterion = %name, "ignoring unknown rating criterion");
            continue;
        };
        let score = match score {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if let Some(score) = score {
            found.insert(criterion.name, rating::clamp_score(score));
        }
    }

    if found.is_empty() {
        return None;
    }

    let scores = rating::CRITERIA
        .iter()
        .filter_map(|c| found.get(c.name).map(|score| (c.name.to_owned(), *score)))
        .collect();

    Some(RatingDraft {
        scores,
        feedback: value.get("feedback").map(|v| string_list(v, "")).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_from_code_fence() {
        let raw = "```json\n[\"a\", \"b\"]\n```";
        assert_eq!(extract_json(raw), Some(serde_json::json!(["a", "b"])));
    }

    #[test]
    fn extracts_json_embedded_in_prose() {
        let raw = "Sure! Here you go: {\"facts\": [\"x\"]} Hope that helps.";
        assert_eq!(extract_json(raw), Some(serde_json::json!({"facts": ["x"]})));
    }

    #[test]
    fn garbage_is_not_json() {
        assert!(extract_json("no json here").is_none());
        assert!(extract_json("] backwards [").is_none());
    }

    #[test]
    fn facts_are_capped_and_cleaned() {
        let raw = r#"["1", " 2 ", "", "3", "4", "5", "6", "7"]"#;
        let facts = facts(raw).unwrap();
        assert_eq!(facts, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn facts_accept_wrapped_object() {
        assert_eq!(facts(r#"{"facts": ["only"]}"#).unwrap(), ["only"]);
        assert!(facts(r#"{"items": ["x"]}"#).is_none());
        assert!(facts("[]").is_none());
    }

    #[test]
    fn news_drops_untitled_items() {
        let raw = r#"{"news": [{"title": "A", "content": "body"}, {"content": "orphan"}, {"title": "B", "summary": "s"}]}"#;
        let news = news(raw).unwrap();
        assert_eq!(news.len(), 2);
        assert_eq!(news[1].content, "s");
    }

    #[test]
    fn enhancement_parses_json() {
        let raw = r#"{"enhancedContent": "Better.", "suggestions": ["a","b","c","d","e","f"]}"#;
        let result = enhancement(raw, "Original.");
        assert_eq!(result.enhanced_content, "Better.");
        assert_eq!(result.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn enhancement_plain_text_and_blank() {
        assert_eq!(enhancement("Just rewritten text", "orig").enhanced_content, "Just rewritten text");
        assert_eq!(enhancement("   ", "orig").enhanced_content, "orig");
        assert_eq!(enhancement(r#"{"suggestions": ["x"]}"#, "orig").enhanced_content, "orig");
    }

    #[test]
    fn research_requires_some_content() {
        let parsed = research(r#"{"keyFindings": ["f"], "sources": []}"#).unwrap();
        assert_eq!(parsed.key_findings, ["f"]);
        assert!(research(r#"{"keyFindings": [], "sources": []}"#).is_none());
    }

    #[test]
    fn rating_canonicalises_and_clamps() {
        let raw = r#"{"ratings": {"engagement": 7, "Structure": "2", "Humor": 5}, "feedback": ["Good pacing"]}"#;
        let draft = rating(raw).unwrap();
        assert_eq!(draft.scores.len(), 2);
        assert_eq!(draft.scores.get_index(0).map(|(k, _)| k.as_str()), Some("Engagement"));
        assert!((draft.scores["Engagement"] - 5.0).abs() < f64::EPSILON);
        assert!((draft.scores["Structure"] - 2.0).abs() < f64::EPSILON);
        assert_eq!(draft.feedback, ["Good pacing"]);
    }

    #[test]
    fn rating_accepts_detailed_ratings_key() {
        let draft = rating(r#"{"detailedRatings": {"Expertise": 4}}"#).unwrap();
        assert!(draft.feedback.is_empty());
        assert!(rating(r#"{"ratings": {"Humor": 5}}"#).is_none());
    }
}
