//! External completion caller for Castwright
//!
//! Sends rendered prompts to an OpenAI-compatible chat completion API with a
//! fixed temperature and a bounded timeout. Callers own fallback behaviour:
//! every failure is returned as an [`LlmError`] for them to recover from.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod openai;
mod protocol;
mod provider;

use std::sync::Arc;

pub use error::LlmError;
pub use openai::OpenAiProvider;
pub use provider::{CompletionProvider, CompletionRequest};

/// Build the completion provider from configuration
///
/// Returns `Ok(None)` when no API key is configured; callers then serve
/// fallback content without attempting any outbound call.
pub fn from_config(config: &castwright_config::OpenAiConfig) -> Result<Option<Arc<dyn CompletionProvider>>, LlmError> {
    let Some(api_key) = config.api_key.clone() else {
        tracing::info!("OpenAI API key not configured, generators will serve fallback content");
        return Ok(None);
    };

    let provider = OpenAiProvider::new(api_key, config)?;
    tracing::debug!(model = %config.model, "OpenAI completion provider initialized");

    Ok(Some(Arc::new(provider)))
}
