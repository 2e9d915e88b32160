//! Placeholder content served when no upstream is configured or a call fails
//!
//! Output is well-formed but not factual. Cosmetic fields (dates, sources,
//! URL suffixes, scores) draw from the thread-local random source; nothing
//! here is seeded or reproducible.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::types::{EnhancementResponse, NewsArticle, ResearchResponse, ResearchTrend, TrendItem};

const NEWS_SOURCES: &[&str] = &[
    "TechCrunch",
    "The Verge",
    "Wired",
    "Reuters",
    "BBC News",
    "Ars Technica",
    "The Guardian",
    "Bloomberg",
];

const DISCUSSION_SOURCES: &[&str] = &["Reddit", "Hacker News", "Twitter", "Quora", "Stack Exchange"];

const HEADLINES: &[&str] = &[
    "Latest developments in {topic}",
    "Why {topic} matters more than ever",
    "Experts weigh in on the future of {topic}",
    "{topic}: what you need to know",
    "How {topic} is changing the industry",
];

const DISCUSSION_TITLES: &[&str] = &[
    "What is your take on {topic}?",
    "Ask: best resources to learn about {topic}",
    "{topic} is overrated, change my mind",
    "Show: a side project built around {topic}",
    "Long-time lurker, first post about {topic}",
];

const TRAFFIC_BUCKETS: &[&str] = &["5K+", "10K+", "20K+", "50K+", "100K+"];

/// Articles are dated within this many days of now
const MAX_AGE_DAYS: i64 = 30;

fn fill(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// URL-safe lowercase slug of a topic
fn slug(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    for ch in topic.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() { "topic".to_owned() } else { trimmed.to_owned() }
}

fn url_suffix(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric)
        .take(8)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

fn recent_timestamp(rng: &mut impl Rng) -> String {
    let age = SignedDuration::from_secs(rng.random_range(0..MAX_AGE_DAYS * 24 * 60 * 60));
    let now = Timestamp::now();
    now.checked_sub(age).unwrap_or(now).to_string()
}

/// Three generic facts about a topic
pub fn facts(topic: &str) -> Vec<String> {
    vec![
        format!("{topic} has seen growing public interest over the past few years."),
        format!("Experts continue to debate the long-term impact of {topic}."),
        format!("Many listeners want practical, real-world examples of {topic}."),
    ]
}

/// Article at `index`; the title cycles through a fixed headline set
pub fn article(topic: &str, index: usize) -> NewsArticle {
    NewsArticle {
        title: fill(HEADLINES[index % HEADLINES.len()], topic),
        content: format!(
            "A roundup of recent coverage on {topic}, highlighting the main viewpoints and what they mean for listeners."
        ),
    }
}

pub fn articles(topic: &str, count: usize) -> Vec<NewsArticle> {
    (0..count).map(|index| article(topic, index)).collect()
}

/// News trend item with a random source, URL suffix, and publish date
pub fn news_item(topic: &str, index: usize) -> TrendItem {
    let mut rng = rand::rng();
    let source = pick(&mut rng, NEWS_SOURCES);

    TrendItem {
        title: fill(HEADLINES[index % HEADLINES.len()], topic),
        source: source.to_owned(),
        url: format!(
            "https://{}.example.com/{}-{}",
            slug(source),
            slug(topic),
            url_suffix(&mut rng)
        ),
        score: None,
        published_at: Some(recent_timestamp(&mut rng)),
    }
}

/// Discussion trend item with a random community source and score
pub fn discussion_item(topic: &str, index: usize) -> TrendItem {
    let mut rng = rand::rng();
    let source = pick(&mut rng, DISCUSSION_SOURCES);

    TrendItem {
        title: fill(DISCUSSION_TITLES[index % DISCUSSION_TITLES.len()], topic),
        source: source.to_owned(),
        url: format!("https://{}.example.com/t/{}", slug(source), url_suffix(&mut rng)),
        score: Some(rng.random_range(10..500)),
        published_at: Some(recent_timestamp(&mut rng)),
    }
}

pub fn news_items(topic: &str, count: usize) -> Vec<TrendItem> {
    (0..count).map(|index| news_item(topic, index)).collect()
}

pub fn discussion_items(topic: &str, count: usize) -> Vec<TrendItem> {
    (0..count).map(|index| discussion_item(topic, index)).collect()
}

pub fn research(topic: &str) -> ResearchResponse {
    ResearchResponse {
        key_findings: vec![
            format!("Interest in {topic} has grown steadily."),
            format!("Audiences respond best to concrete {topic} case studies."),
            format!("Common misconceptions about {topic} are worth addressing early."),
        ],
        sources: news_items(topic, 3).into_iter().map(|item| item.url).collect(),
    }
}

/// Three to five search trends around a topic
pub fn research_trends(topic: &str) -> Vec<ResearchTrend> {
    let mut rng = rand::rng();
    let count = rng.random_range(3..=5);

    (0..count)
        .map(|index| ResearchTrend {
            title: fill(HEADLINES[index % HEADLINES.len()], topic),
            traffic: pick(&mut rng, TRAFFIC_BUCKETS).to_owned(),
            articles: news_items(topic, 2),
        })
        .collect()
}

pub fn recommendations(topic: &str) -> String {
    format!(
        "Open with a recent story about {topic} to hook listeners, explain the key trend in plain language, \
         then invite a guest or co-host to offer a contrasting view before closing with practical takeaways."
    )
}

/// Original content with no suggestions
pub fn enhancement(content: &str) -> EnhancementResponse {
    EnhancementResponse {
        enhanced_content: content.to_owned(),
        suggestions: Vec::new(),
    }
}

pub fn rating_feedback() -> Vec<String> {
    vec![
        "Automated rating is unavailable; scores reflect a neutral baseline.".to_owned(),
        "Consider adding a personal story to strengthen listener connection.".to_owned(),
        "Check that each segment transitions clearly into the next.".to_owned(),
    ]
}

/// General advice for a rated script that came back without feedback
pub fn review_feedback() -> Vec<String> {
    vec![
        "Review the lowest-scoring criteria first; they move the overall rating most.".to_owned(),
        "Read the script aloud to check pacing and conversational flow.".to_owned(),
    ]
}

/// Plain-text document served for a script download
pub fn script_document(id: &str) -> String {
    format!(
        "Podcast Script\n==============\n\nScript ID: {id}\nGenerated: {}\n\n\
         Saved scripts are not stored on this server. Regenerate the script from its outline to get the full text.\n",
        Timestamp::now()
    )
}
