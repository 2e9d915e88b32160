//! Prompt builders for each generator
//!
//! Prompts ask for JSON where the normalizer expects JSON and for markdown
//! headings and bullets where the outline parser runs.

use indoc::{formatdoc, indoc};
use serde_json::Value;

use crate::rating::CRITERIA;
use crate::types::EnhancementType;

/// System message sent with every completion
pub const SYSTEM: &str = indoc! {"
    You are a podcast production assistant. You help hosts research topics,
    plan episodes and polish scripts. Be accurate, concise and conversational.
    When asked for JSON, reply with JSON only and no commentary.
"};

pub fn enhance(content: &str, kind: EnhancementType) -> String {
    let focus = match kind {
        EnhancementType::Grammar => "Fix grammar, spelling and punctuation without changing the meaning.",
        EnhancementType::Clarity => "Make the content clearer and easier to follow when spoken aloud.",
        EnhancementType::Tone => "Adjust the tone to be warm, engaging and conversational.",
        EnhancementType::Seo => "Improve discoverability with natural keywords for podcast directories.",
        EnhancementType::Default => "Improve the overall quality, flow and engagement of the content.",
    };

    formatdoc! {r#"
        {focus}

        Content:
        {content}

        Respond with a JSON object of the form
        {{"enhancedContent": "<rewritten content>", "suggestions": ["<up to 5 short suggestions>"]}}
    "#}
}

pub fn facts(topic: &str) -> String {
    formatdoc! {r#"
        Give 6 interesting, verifiable facts about "{topic}" that would work well
        as talking points in a podcast episode.

        Respond with a JSON array of 6 strings.
    "#}
}

pub fn news(topic: &str) -> String {
    formatdoc! {r#"
        Summarise 3 recent news stories related to "{topic}" that a podcast host
        could discuss.

        Respond with a JSON array of objects: [{{"title": "...", "content": "<two sentence summary>"}}]
    "#}
}

pub fn outline(topic: &str, duration: i64, members: i64) -> String {
    let hosts = if members == 1 {
        "a single host".to_owned()
    } else {
        format!("{members} hosts")
    };

    formatdoc! {"
        Create an outline for a {duration}-minute podcast episode about \"{topic}\"
        presented by {hosts}.

        Use a markdown heading (`#`) for each segment and `-` bullets for the
        talking points under it. Include an introduction and a conclusion.
    "}
}

pub fn script_outline(topic: &str, duration: i64, trends: Option<&Value>) -> String {
    let context = trends
        .filter(|value| !value.is_null())
        .map(|value| format!("\nCurrent trends to draw on:\n{value}\n"))
        .unwrap_or_default();

    formatdoc! {"
        Plan the segments of a {duration}-minute podcast script about \"{topic}\".
        {context}
        Use numbered segment headings (`1. Title`) with `-` bullets listing what
        is covered in each segment and roughly how long it runs.
    "}
}

pub fn research(topic: &str) -> String {
    formatdoc! {r#"
        Research "{topic}" for an upcoming podcast episode.

        Respond with a JSON object:
        {{"keyFindings": ["<finding>", ...], "sources": ["<source name or URL>", ...]}}
    "#}
}

pub fn recommendations(topic: &str, trends: &[Value]) -> String {
    let trends = if trends.is_empty() {
        "none provided".to_owned()
    } else {
        Value::Array(trends.to_vec()).to_string()
    };

    formatdoc! {"
        Suggest how to structure a podcast episode about \"{topic}\" so it connects
        with current audience interest.

        Trending items: {trends}

        Reply with a short paragraph of practical recommendations.
    "}
}

pub fn rate(script: &str) -> String {
    let criteria = CRITERIA
        .iter()
        .map(|c| format!("- {}: {}", c.name, c.description))
        .collect::<Vec<_>>()
        .join("\n");

    formatdoc! {r#"
        Rate the following podcast script from 1 to 5 on each criterion:
        {criteria}

        Script:
        {script}

        Respond with a JSON object:
        {{"ratings": {{"<criterion>": <score>, ...}}, "feedback": ["<specific improvement>", ...]}}
    "#}
}
