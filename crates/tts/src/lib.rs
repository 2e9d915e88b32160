//! Text-to-speech pass-through
//!
//! A single speech call per request. There is no fallback audio: callers get
//! a [`TtsError`] when synthesis is unavailable.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod service;
mod types;

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use provider::openai_tts::OpenAiTtsProvider;
pub use service::SpeechService;
pub use types::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SpeechRequest, SpeechResponse, normalize_speed};
