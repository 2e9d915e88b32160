/// Slowest speed the speech API accepts
pub const MIN_SPEED: f64 = 0.25;
/// Fastest speed the speech API accepts
pub const MAX_SPEED: f64 = 4.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Speech synthesis request following the `OpenAI` TTS API format
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Model identifier (e.g. "tts-1")
    pub model: String,
    /// Text to synthesize into speech
    pub input: String,
    /// Voice identifier (e.g. "alloy")
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    pub response_format: Option<String>,
    /// Speech speed multiplier
    pub speed: f64,
}

/// Clamp a requested speed into the accepted range; absent or non-finite
/// values become [`DEFAULT_SPEED`]
pub fn normalize_speed(speed: Option<f64>) -> f64 {
    speed
        .filter(|s| s.is_finite())
        .map_or(DEFAULT_SPEED, |s| s.clamp(MIN_SPEED, MAX_SPEED))
}

/// Raw audio response from a TTS provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
