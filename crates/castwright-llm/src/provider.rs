use async_trait::async_trait;

use crate::error::LlmError;

/// Prompt sent to a completion provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Optional system instruction
    pub system: Option<String>,
    /// Rendered user prompt
    pub prompt: String,
}

impl CompletionRequest {
    /// Prompt with no system message
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
        }
    }

    /// Attach a system message
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Trait implemented by text completion backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Complete the prompt, returning the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
