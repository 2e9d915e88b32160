use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// `OpenAI` configuration shared by text completion and speech synthesis
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key; when absent every generator serves fallback content
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (must include the `/v1` segment)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Chat completion model
    #[serde(default = "default_model")]
    pub model: String,
    /// Decoding temperature applied to every completion
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
            speech: SpeechConfig::default(),
        }
    }
}

impl OpenAiConfig {
    /// Whether an API key is present
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Text-to-speech settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_model")]
    pub model: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Speech calls get their own, longer timeout
    #[serde(default = "default_speech_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            model: default_speech_model(),
            voice: default_voice(),
            timeout_seconds: default_speech_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_temperature() -> f64 {
    0.7
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_timeout() -> u64 {
    30
}

fn default_speech_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

const fn default_speech_timeout() -> u64 {
    120
}
