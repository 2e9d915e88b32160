#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod auth;
pub mod cors;
mod env;
mod loader;
pub mod news;
pub mod openai;
mod overlay;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use app::*;
pub use auth::*;
pub use cors::*;
pub use news::*;
pub use openai::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Castwright configuration
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Runtime environment and debug switch
    #[serde(default)]
    pub app: AppConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// `OpenAI` completion and speech configuration
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// News source configuration
    #[serde(default)]
    pub news: NewsConfig,
    /// Discussion source configuration
    #[serde(default)]
    pub discussions: DiscussionsConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
