use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::TtsProvider;
use crate::error::TtsError;
use crate::http_client::http_client;
use crate::types::{SpeechRequest, SpeechResponse};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` speech provider
pub struct OpenAiTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiTtsProvider {
    pub fn new(api_key: SecretString, base_url: Option<&Url>, timeout: Duration) -> crate::error::Result<Self> {
        let base_url = base_url.map_or(DEFAULT_OPENAI_API_URL, Url::as_str);

        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,
    speed: f64,
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            input_len = request.input.len(),
            "sending speech request"
        );

        let body = OpenAiTtsRequest {
            model: &request.model,
            input: &request.input,
            voice: &request.voice,
            response_format: request.response_format.as_deref(),
            speed: request.speed,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "speech request failed");
                if e.is_timeout() {
                    TtsError::Timeout
                } else {
                    TtsError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "speech provider returned error");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::ConnectionError(format!("failed to read audio body: {e}")))?;

        tracing::debug!(bytes = audio.len(), "speech synthesis complete");

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
