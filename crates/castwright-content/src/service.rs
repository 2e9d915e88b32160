use std::sync::Arc;

use castwright_llm::{CompletionProvider, CompletionRequest, LlmError};
use serde_json::Value;

use crate::types::{
    EnhancementResponse, EnhancementType, NewsArticle, Outline, ResearchResponse, ScriptRatingResponse,
};
use crate::{mock, normalize, outline, prompts, rating};

/// Mock articles served when news generation falls back
const FALLBACK_ARTICLES: usize = 3;

/// Generators behind the content endpoints
///
/// Every method returns usable content. Upstream failures and unusable
/// completions are logged and replaced with fallback data, so the only errors
/// a caller sees come from request validation done before these are called.
#[derive(Clone, Default)]
pub struct ContentService {
    llm: Option<Arc<dyn CompletionProvider>>,
}

impl ContentService {
    pub fn new(llm: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { llm }
    }

    /// Run one completion; `None` means serve fallback content
    async fn complete(&self, operation: &'static str, prompt: String) -> Option<String> {
        let llm = self.llm.as_ref()?;
        let request = CompletionRequest::new(prompt).with_system(prompts::SYSTEM);

        match llm.complete(&request).await {
            Ok(text) => Some(text),
            Err(error) => {
                log_fallback(operation, llm.name(), &error);
                None
            }
        }
    }

    pub async fn enhance(&self, content: &str, kind: EnhancementType) -> EnhancementResponse {
        match self.complete("enhance", prompts::enhance(content, kind)).await {
            Some(raw) => normalize::enhancement(&raw, content),
            None => mock::enhancement(content),
        }
    }

    pub async fn facts(&self, topic: &str) -> Vec<String> {
        self.complete("facts", prompts::facts(topic))
            .await
            .and_then(|raw| unusable("facts", normalize::facts(&raw)))
            .unwrap_or_else(|| mock::facts(topic))
    }

    pub async fn news(&self, topic: &str) -> Vec<NewsArticle> {
        self.complete("news", prompts::news(topic))
            .await
            .and_then(|raw| unusable("news", normalize::news(&raw)))
            .unwrap_or_else(|| mock::articles(topic, FALLBACK_ARTICLES))
    }

    /// Episode outline; the parser supplies fallback sections on failure
    pub async fn outline(&self, topic: &str, duration: i64, members: i64) -> Outline {
        let sections = self
            .complete("outline", prompts::outline(topic, duration, members))
            .await
            .map_or_else(outline::fallback_sections, |raw| outline::parse_outline(&raw));

        Outline {
            title: format!("{topic} Podcast Outline"),
            sections,
        }
    }

    pub async fn script_outline(&self, topic: &str, duration: i64, trends: Option<&Value>) -> Outline {
        let sections = self
            .complete("script_outline", prompts::script_outline(topic, duration, trends))
            .await
            .map_or_else(outline::fallback_sections, |raw| outline::parse_outline(&raw));

        Outline {
            title: format!("{topic}: {duration}-Minute Episode"),
            sections,
        }
    }

    pub async fn research(&self, topic: &str) -> ResearchResponse {
        self.complete("research", prompts::research(topic))
            .await
            .and_then(|raw| unusable("research", normalize::research(&raw)))
            .unwrap_or_else(|| mock::research(topic))
    }

    pub async fn recommendations(&self, topic: &str, trends: &[Value]) -> String {
        self.complete("recommendations", prompts::recommendations(topic, trends))
            .await
            .and_then(|raw| unusable("recommendations", normalize::free_text(&raw)))
            .unwrap_or_else(|| mock::recommendations(topic))
    }

    pub async fn rate(&self, script: &str) -> ScriptRatingResponse {
        let draft = self
            .complete("rate", prompts::rate(script))
            .await
            .and_then(|raw| unusable("rate", normalize::rating(&raw)));

        let (scores, mut feedback) = match draft {
            Some(draft) => (draft.scores, draft.feedback),
            None => (rating::fallback_scores(), mock::rating_feedback()),
        };
        if feedback.is_empty() {
            feedback = mock::review_feedback();
        }

        ScriptRatingResponse {
            rating: rating::weighted_score(&scores),
            detailed_ratings: scores,
            feedback,
            criteria: rating::CRITERIA,
        }
    }
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("llm", &self.llm.as_ref().map(|llm| llm.name().to_owned()))
            .finish()
    }
}

fn log_fallback(operation: &str, provider: &str, error: &LlmError) {
    tracing::warn!(operation, provider, error = %error, "completion failed, serving fallback content");
}

fn unusable<T>(operation: &str, parsed: Option<T>) -> Option<T> {
    if parsed.is_none() {
        tracing::warn!(operation, "completion was not usable, serving fallback content");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Provider that answers every prompt with a canned result
    struct FakeLlm {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeLlm {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_owned()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeLlm {
        fn name(&self) -> &str {
            "fake"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            assert_eq!(request.system.as_deref(), Some(prompts::SYSTEM));
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.reply.clone().map_err(|()| LlmError::Upstream("boom".to_owned()))
        }
    }

    fn service(llm: Arc<FakeLlm>) -> ContentService {
        ContentService::new(Some(llm))
    }

    #[tokio::test]
    async fn facts_from_completion() {
        let llm = FakeLlm::replying(r#"["a", "b", "c", "d"]"#);
        let facts = service(llm.clone()).facts("bees").await;
        assert_eq!(facts, ["a", "b", "c", "d"]);
        assert!(llm.prompts.lock().unwrap()[0].contains("bees"));
    }

    #[tokio::test]
    async fn facts_fall_back_on_failure() {
        let facts = service(FakeLlm::failing()).facts("bees").await;
        assert_eq!(facts.len(), 3);
    }

    #[tokio::test]
    async fn facts_fall_back_on_garbage() {
        let facts = service(FakeLlm::replying("I cannot help with that")).facts("bees").await;
        assert_eq!(facts.len(), 3);
    }

    #[tokio::test]
    async fn unconfigured_service_serves_mock_content() {
        let service = ContentService::default();
        assert_eq!(service.news("bees").await.len(), FALLBACK_ARTICLES);
        assert_eq!(service.enhance("draft", EnhancementType::Default).await.enhanced_content, "draft");
        assert!(!service.research("bees").await.key_findings.is_empty());
        assert!(service.recommendations("bees", &[]).await.contains("bees"));
    }

    #[tokio::test]
    async fn outline_is_parsed_from_markdown() {
        let llm = FakeLlm::replying("# Intro\n- Hello\n# Deep dive\n- Point one\n- Point two");
        let outline = service(llm).outline("Bees", 30, 2).await;
        assert_eq!(outline.title, "Bees Podcast Outline");
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[1].points, ["Point one", "Point two"]);
    }

    #[tokio::test]
    async fn outline_falls_back_to_default_sections() {
        let outline = service(FakeLlm::failing()).outline("Bees", 30, 1).await;
        assert_eq!(outline.sections, outline::fallback_sections());
    }

    #[tokio::test]
    async fn script_outline_title_includes_duration() {
        let llm = FakeLlm::replying("1. Opening\n- Greet\n2. Close");
        let outline = service(llm).script_outline("Bees", 45, None).await;
        assert_eq!(outline.title, "Bees: 45-Minute Episode");
        assert_eq!(outline.sections.len(), 2);
    }

    #[tokio::test]
    async fn rating_uses_weighted_scores() {
        let llm = FakeLlm::replying(
            r#"{"ratings": {"Engagement": 5, "Personal Connection": 4, "Expertise": 4, "Structure": 3, "Authenticity": 5}, "feedback": ["Nice"]}"#,
        );
        let rated = service(llm).rate("script").await;
        assert!((rated.rating - 4.3).abs() < 1e-9);
        assert_eq!(rated.feedback, ["Nice"]);
        assert_eq!(rated.criteria.len(), 5);
    }

    #[tokio::test]
    async fn rated_script_without_feedback_gets_general_advice() {
        let llm = FakeLlm::replying(r#"{"ratings": {"Engagement": 2, "Structure": 4}}"#);
        let rated = service(llm).rate("script").await;
        assert!((rated.rating - 1.1).abs() < 1e-9);
        assert_eq!(rated.feedback, mock::review_feedback());
        assert!(rated.feedback.iter().all(|line| !line.contains("unavailable")));
    }

    #[tokio::test]
    async fn rating_falls_back_to_neutral() {
        let rated = service(FakeLlm::failing()).rate("script").await;
        assert!((rated.rating - 3.0).abs() < 1e-9);
        assert_eq!(rated.detailed_ratings.len(), 5);
        assert!(!rated.feedback.is_empty());
    }

    #[tokio::test]
    async fn enhancement_keeps_plain_text() {
        let enhanced = service(FakeLlm::replying("Polished words."))
            .enhance("rough words", EnhancementType::Tone)
            .await;
        assert_eq!(enhanced.enhanced_content, "Polished words.");
        assert!(enhanced.suggestions.is_empty());
    }
}
