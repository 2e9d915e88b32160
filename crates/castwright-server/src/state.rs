use std::sync::Arc;

use castwright_auth::AuthMode;
use castwright_config::Config;
use castwright_content::ContentService;
use castwright_trends::TrendsService;
use tts::SpeechService;

/// Shared, read-only state for every handler
pub struct AppState {
    pub config: Arc<Config>,
    pub content: ContentService,
    pub trends: TrendsService,
    pub speech: SpeechService,
    pub auth_mode: AuthMode,
}

pub type SharedState = Arc<AppState>;
