//! Client tests against mock HTTP servers.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentitube_client::{
    ClassifyError, CommentsClient, CommentsConfig, FetchError, GeminiClient, GeminiConfig,
};
use sentitube_models::{extract_video_id, SentimentLabel};

fn comments_client(server: &MockServer) -> CommentsClient {
    CommentsClient::new(CommentsConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn gemini_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        api_key: "test-key".to_string(),
        endpoint: server.uri(),
        model: "gemini-pro".to_string(),
        max_batch: 100,
    })
    .unwrap()
}

fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn fetch_returns_comments_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("videoId", "dQw4w9WgXcQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"comments": ["a", "b"]})))
        .mount(&server)
        .await;

    let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
    let comments = comments_client(&server).fetch(&id).await.unwrap();

    assert_eq!(comments, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn fetch_missing_comments_field_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
    let comments = comments_client(&server).fetch(&id).await.unwrap();

    assert!(comments.is_empty());
}

#[tokio::test]
async fn fetch_odd_shaped_comments_field_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"comments": "nope"})))
        .mount(&server)
        .await;

    let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
    let comments = comments_client(&server).fetch(&id).await.unwrap();

    assert!(comments.is_empty());
}

#[tokio::test]
async fn fetch_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker exploded"))
        .mount(&server)
        .await;

    let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
    let err = comments_client(&server).fetch(&id).await.unwrap_err();

    match err {
        FetchError::Status { status, detail } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(detail, "worker exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn classify_returns_one_label_per_comment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body("Positive\nNegative\nNeutral")),
        )
        .mount(&server)
        .await;

    let comments = vec!["yes".to_string(), "no".to_string(), "ok".to_string()];
    let labels = gemini_client(&server).classify(&comments).await.unwrap();

    assert_eq!(
        labels,
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ]
    );
}

#[tokio::test]
async fn classify_pads_short_model_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body("Positive\nNegative\nNeutral")),
        )
        .mount(&server)
        .await;

    let comments: Vec<String> = (0..5).map(|i| format!("comment {i}")).collect();
    let labels = gemini_client(&server).classify(&comments).await.unwrap();

    assert_eq!(labels.len(), 5);
    assert_eq!(labels[3], SentimentLabel::Neutral);
    assert_eq!(labels[4], SentimentLabel::Neutral);
}

#[tokio::test]
async fn classify_batches_large_inputs_in_order() {
    let server = MockServer::start().await;
    // Two comments per request, two requests expected
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("Positive\nNegative")))
        .expect(2)
        .mount(&server)
        .await;

    let client = GeminiClient::new(GeminiConfig {
        api_key: "test-key".to_string(),
        endpoint: server.uri(),
        model: "gemini-pro".to_string(),
        max_batch: 2,
    })
    .unwrap();

    let comments: Vec<String> = (0..4).map(|i| format!("comment {i}")).collect();
    let labels = client.classify(&comments).await.unwrap();

    assert_eq!(
        labels,
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]
    );
}

#[tokio::test]
async fn classify_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let comments = vec!["hi".to_string()];
    let err = gemini_client(&server).classify(&comments).await.unwrap_err();

    match err {
        ClassifyError::Status { status, .. } => assert_eq!(status.as_u16(), 429),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn classify_empty_candidates_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let comments = vec!["hi".to_string()];
    let err = gemini_client(&server).classify(&comments).await.unwrap_err();

    assert!(matches!(err, ClassifyError::EmptyResponse));
}

#[test]
fn gemini_client_requires_api_key() {
    let err = GeminiClient::new(GeminiConfig {
        api_key: String::new(),
        endpoint: "http://localhost".to_string(),
        model: "gemini-pro".to_string(),
        max_batch: 100,
    })
    .unwrap_err();

    assert!(matches!(err, ClassifyError::MissingApiKey));
}
