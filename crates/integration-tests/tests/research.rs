mod harness;

use harness::config::ConfigBuilder;
use harness::mock_openai::MockOpenAi;
use harness::server::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn trends_are_mocked_without_sources() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.post_json("/api/trends", &json!({"topic": "space travel"})).await;
    assert_eq!(resp.status(), 200);

    let json: Value = resp.json().await.unwrap();
    let news = json["news"].as_array().unwrap();
    let discussions = json["discussions"].as_array().unwrap();
    assert!(!news.is_empty());
    assert!(!discussions.is_empty());
    assert!(news.iter().all(|item| item["url"].as_str().unwrap().starts_with("https://")));
    assert!(discussions.iter().all(|item| item["score"].is_u64()));
}

#[tokio::test]
async fn research_trends_have_traffic_buckets() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let json: Value = server
        .post_json("/api/research/trends", &json!({"topic": "space travel"}))
        .await
        .json()
        .await
        .unwrap();

    let trends = json["trends"].as_array().unwrap();
    assert!((3..=5).contains(&trends.len()));
    for trend in trends {
        assert!(trend["traffic"].as_str().unwrap().ends_with("K+"));
        assert!(!trend["articles"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn recommendations_echo_trends() {
    let mock = MockOpenAi::start_with_response("  Lead with the launch story.  ").await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let trends = json!([{"title": "Rocket launch"}, "orbital tourism"]);
    let json: Value = server
        .post_json("/api/research/recommendations", &json!({"topic": "space", "trends": trends}))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(json["trends"], trends);
    assert_eq!(json["recommendations"], "Lead with the launch story.");
    assert!(mock.last_prompt().unwrap().contains("orbital tourism"));
}

#[tokio::test]
async fn research_uses_completion_json() {
    let mock = MockOpenAi::start_with_response(r#"{"keyFindings": ["Mars is far"], "sources": ["NASA"]}"#)
        .await
        .unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let json: Value = server
        .post_json("/api/research/generate", &json!({"topic": "Mars"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json, json!({"keyFindings": ["Mars is far"], "sources": ["NASA"]}));
}
