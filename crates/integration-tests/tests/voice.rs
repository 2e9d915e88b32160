mod harness;

use harness::config::ConfigBuilder;
use harness::mock_openai::{MOCK_AUDIO, MockOpenAi};
use harness::server::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn voice_returns_audio() {
    let mock = MockOpenAi::start_with_response("unused").await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let resp = server
        .post_json("/api/voice/generate", &json!({"text": "Hello listeners", "settings": {"speed": 12}}))
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "audio/mpeg");
    assert_eq!(resp.bytes().await.unwrap().as_ref(), MOCK_AUDIO);

    let sent = mock.last_speech().unwrap();
    assert_eq!(sent["input"], "Hello listeners");
    assert_eq!(sent["speed"], 4.0);
}

#[tokio::test]
async fn voice_without_key_is_internal_error() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.post_json("/api/voice/generate", &json!({"text": "Hello"})).await;
    assert_eq!(resp.status(), 500);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "Failed to generate voice");
}

#[tokio::test]
async fn voice_upstream_failure_is_internal_error() {
    let mock = MockOpenAi::start_failing(1).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let resp = server.post_json("/api/voice/generate", &json!({"text": "Hello"})).await;
    assert_eq!(resp.status(), 500);
    assert_eq!(mock.speech_count(), 1);
}

#[tokio::test]
async fn voice_requires_text() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.post_json("/api/voice/generate", &json!({"settings": {"speed": 1.0}})).await;
    assert_eq!(resp.status(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "Text is required");
}
