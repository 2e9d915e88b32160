mod harness;

use harness::config::ConfigBuilder;
use harness::mock_openai::MockOpenAi;
use harness::server::TestServer;
use serde_json::{Value, json};

const MARKDOWN: &str = "\
Here is your outline:
- stray bullet before any heading
# Opening
- Welcome listeners
- Introduce the guest
## Deep Dive
* History of the hive
1) Modern beekeeping
3. Wrap Up
";

#[tokio::test]
async fn outline_is_parsed_from_markdown() {
    let mock = MockOpenAi::start_with_response(MARKDOWN).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let resp = server
        .post_json("/api/outline/generate", &json!({"topic": "Bees", "duration": 45, "memberCount": 2}))
        .await;
    assert_eq!(resp.status(), 200);

    let json: Value = resp.json().await.unwrap();
    let outline = &json["outline"];
    assert_eq!(outline["title"], "Bees Podcast Outline");
    assert_eq!(
        outline["sections"],
        json!([
            {"title": "Opening", "points": ["Welcome listeners", "Introduce the guest"]},
            {"title": "Deep Dive", "points": ["History of the hive", "Modern beekeeping"]},
            {"title": "Wrap Up", "points": []}
        ])
    );

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("45-minute"));
    assert!(prompt.contains("2 hosts"));
}

#[tokio::test]
async fn outline_falls_back_without_upstream() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let json: Value = server
        .post_json("/api/outline/generate", &json!({"topic": "Bees"}))
        .await
        .json()
        .await
        .unwrap();

    let titles: Vec<&str> = json["outline"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Introduction", "Main Discussion", "Conclusion"]);
}

#[tokio::test]
async fn outline_without_headings_uses_fallback_sections() {
    let mock = MockOpenAi::start_with_response("just a paragraph of prose").await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let json: Value = server
        .post_json("/api/outline/generate", &json!({"topic": "Bees"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json["outline"]["sections"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn member_count_must_be_positive() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .post_json("/api/outline/generate", &json!({"topic": "Bees", "memberCount": 0}))
        .await;
    assert_eq!(resp.status(), 400);

    let resp = server
        .post_json("/api/outline/generate", &json!({"topic": "Bees", "duration": -10}))
        .await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn script_outline_uses_duration_in_title() {
    let mock = MockOpenAi::start_with_response("1. Cold open\n- Teaser\n2. Interview\n- Questions").await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_openai(&mock.base_url()).build())
        .await
        .unwrap();

    let resp = server
        .post_json(
            "/api/script/outline",
            &json!({"topic": "Bees", "duration": 20, "trendsData": {"news": [{"title": "Hive heist"}]}}),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "Bees: 20-Minute Episode");
    assert_eq!(json["sections"][1]["title"], "Interview");
    assert!(mock.last_prompt().unwrap().contains("Hive heist"));
}
