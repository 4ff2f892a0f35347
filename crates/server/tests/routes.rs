// ABOUTME: Route-level tests for the lectern HTTP service.
// ABOUTME: Drives the router in-process with tower oneshot against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use lectern_reader::Reader;
use lectern_server::routes::AppState;
use lectern_server::{openapi_document, router};

const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Test Article</title></head>
<body>
<nav><a href="/">Home</a></nav>
<article>
<p>The first paragraph of the article has enough words, commas, and substance to score well.</p>
<p>The second paragraph continues with additional details, context, and observations.</p>
</article>
</body>
</html>"#;

fn test_app() -> Router {
    let reader = Reader::builder()
        .allow_private_networks(true)
        .timeout(Duration::from_secs(2))
        .build();
    router(AppState {
        reader: Arc::new(reader),
        openapi: Arc::new(openapi_document()),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn missing_url_parameter_is_a_400_without_any_fetch() {
    let (status, json) = get(test_app(), "/content").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "URL must be a string");
    assert_eq!(json["statusCode"], 400);
    assert_eq!(json["responseObject"], serde_json::Value::Null);
}

#[tokio::test]
async fn repeated_url_parameter_is_a_400() {
    let (status, json) = get(test_app(), "/content?url=a&url=b").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "URL must be a string");
}

#[tokio::test]
async fn content_route_returns_article_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/article");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(ARTICLE_PAGE);
    });

    let uri = format!("/content?url={}", server.url("/article"));
    let (status, json) = get(test_app(), &uri).await;
    mock.assert();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Content extracted successfully");
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["responseObject"]["title"], "Test Article");
    let content = json["responseObject"]["content"].as_str().unwrap();
    assert!(content.contains("first paragraph of the article"));
    assert!(!content.contains("Home"));
}

#[tokio::test]
async fn pipeline_failure_is_a_500_with_cause_in_message() {
    // Nothing listens on port 9 (discard); the fetch fails fast.
    let (status, json) = get(test_app(), "/content?url=http://127.0.0.1:9/x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], 500);
    let message = json["message"].as_str().unwrap();
    assert!(
        message.starts_with("Error fetching content: "),
        "unexpected message: {}",
        message
    );
}

#[tokio::test]
async fn unparseable_url_value_is_a_500() {
    let (status, json) = get(test_app(), "/content?url=not-a-real-url").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("Error fetching content: "));
}

#[tokio::test]
async fn health_route_reports_healthy() {
    let (status, json) = get(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service is healthy");
}

#[tokio::test]
async fn openapi_route_serves_the_document() {
    let (status, json) = get(test_app(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["openapi"], "3.0.3");
    assert!(json["paths"]["/content"].is_object());
}
