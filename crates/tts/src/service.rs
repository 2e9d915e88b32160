use std::sync::Arc;
use std::time::Duration;

use castwright_config::OpenAiConfig;

use crate::error::TtsError;
use crate::provider::TtsProvider;
use crate::provider::openai_tts::OpenAiTtsProvider;
use crate::types::{SpeechRequest, SpeechResponse, normalize_speed};

/// Turns text into audio with the configured model and voice
#[derive(Clone, Default)]
pub struct SpeechService {
    provider: Option<Arc<dyn TtsProvider>>,
    model: String,
    voice: String,
}

impl SpeechService {
    /// Build from configuration; without an API key every call fails with
    /// [`TtsError::NotConfigured`]
    pub fn from_config(config: &OpenAiConfig) -> crate::error::Result<Self> {
        let provider = match &config.api_key {
            Some(api_key) => {
                let provider = OpenAiTtsProvider::new(
                    api_key.clone(),
                    config.base_url.as_ref(),
                    Duration::from_secs(config.speech.timeout_seconds),
                )?;
                Some(Arc::new(provider) as Arc<dyn TtsProvider>)
            }
            None => {
                tracing::debug!("no speech provider configured");
                None
            }
        };

        Ok(Self {
            provider,
            model: config.speech.model.clone(),
            voice: config.speech.voice.clone(),
        })
    }

    /// Synthesize `text` as mp3 at the given speed (clamped)
    pub async fn speak(&self, text: &str, speed: Option<f64>) -> crate::error::Result<SpeechResponse> {
        let provider = self.provider.as_ref().ok_or(TtsError::NotConfigured)?;

        let request = SpeechRequest {
            model: self.model.clone(),
            input: text.to_owned(),
            voice: self.voice.clone(),
            response_format: Some("mp3".to_owned()),
            speed: normalize_speed(speed),
        };

        provider.synthesize(&request).await
    }
}
