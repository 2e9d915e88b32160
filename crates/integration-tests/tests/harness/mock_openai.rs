//! Mock OpenAI backend for integration tests
//!
//! Implements chat completions and speech synthesis with canned responses

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Bytes returned for every speech request
pub const MOCK_AUDIO: &[u8] = b"ID3\x04mock-mp3-frames";

/// Mock OpenAI backend that returns predictable responses
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    completion_count: AtomicU32,
    speech_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Completion text returned for every chat request
    response_content: String,
    last_prompt: Mutex<Option<String>>,
    last_speech: Mutex<Option<serde_json::Value>>,
}

impl MockOpenAi {
    /// Start a mock server that answers every completion with `content`
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, content.to_owned()).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, "unused".to_owned()).await
    }

    async fn start_inner(fail_count: u32, response_content: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            completion_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            response_content,
            last_prompt: Mutex::new(None),
            last_speech: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL including `/v1`, as the clients append `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Number of speech requests received
    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    /// User prompt of the most recent completion request
    pub fn last_prompt(&self) -> Option<String> {
        self.state.last_prompt.lock().unwrap().clone()
    }

    /// Body of the most recent speech request
    pub fn last_speech(&self) -> Option<serde_json::Value> {
        self.state.last_speech.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Decrement the failure budget; true when this request should fail
fn should_fail(state: &MockState) -> bool {
    state
        .fail_count
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
        .is_ok()
}

fn failure() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": {"message": "mock server intentional failure", "type": "server_error"}
        })),
    )
        .into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(req): Json<ChatCompletionRequest>,
) -> axum::response::Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    let prompt = req.messages.iter().rev().find(|m| m.role == "user").map(|m| m.content.clone());
    *state.last_prompt.lock().unwrap() = prompt;

    if should_fail(&state) {
        return failure();
    }

    Json(serde_json::json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": req.model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": state.response_content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}

async fn handle_speech(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    *state.last_speech.lock().unwrap() = Some(body);

    if should_fail(&state) {
        return failure();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO).into_response()
}
