//! API-level tests: the router is served in-process on an ephemeral port and
//! driven with reqwest, with wiremock standing in for inspected sites.

use std::time::Duration;

use header_inspector::server::{router, ServerState};
use header_inspector::{Config, Inspector};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{header, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts the API on 127.0.0.1:0 and returns its base URL.
async fn start_api(config: Config) -> String {
    let inspector = Inspector::new(config).expect("Failed to build inspector");
    let app = router(ServerState::new(inspector));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("API server failed");
    });

    format!("http://{}", addr)
}

async fn redirecting_site() -> MockServer {
    let site = MockServer::start().await;
    Mock::given(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
        .mount(&site)
        .await;
    Mock::given(path("/new"))
        .respond_with(ResponseTemplate::new(200).insert_header("x-served-by", "mock"))
        .mount(&site)
        .await;
    site
}

#[tokio::test]
async fn test_post_check_headers_success_shape() {
    let site = redirecting_site().await;
    let api = start_api(Config::default()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/check-headers", api))
        .json(&json!({ "url": format!("{}/old", site.uri()) }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["url"], format!("{}/new", site.uri()));
    assert_eq!(body["redirects"], json!([format!("{}/old", site.uri())]));
    assert_eq!(body["headers"]["x-served-by"], "mock");
}

#[tokio::test]
async fn test_get_check_headers_with_user_agent_query() {
    let site = MockServer::start().await;
    Mock::given(path("/"))
        .and(header("user-agent", "query-agent/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&site)
        .await;
    let api = start_api(Config::default()).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/check-headers", api))
        .query(&[("url", site.uri().as_str()), ("userAgent", "query-agent/3")])
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["redirects"], json!([]));
}

#[tokio::test]
async fn test_invalid_url_returns_400_payload() {
    let api = start_api(Config::default()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/check-headers", api))
        .json(&json!({ "url": "not a url" }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["error"], "InvalidInput");
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid input:"));
}

#[tokio::test]
async fn test_malformed_body_and_missing_query_are_invalid_input() {
    let api = start_api(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/check-headers", api))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["error"], "InvalidInput");

    let response = client
        .get(format!("{}/api/check-headers", api))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["error"], "InvalidInput");
}

#[tokio::test]
async fn test_redirect_loop_returns_502_payload() {
    let site = MockServer::start().await;
    Mock::given(path("/ping"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/pong"))
        .mount(&site)
        .await;
    Mock::given(path("/pong"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/ping"))
        .mount(&site)
        .await;
    let api = start_api(Config::default()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/check-headers", api))
        .json(&json!({ "url": format!("{}/ping", site.uri()) }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["error"], "TooManyRedirects");
    assert!(body.get("status_code").is_none(), "no partial result");
}

#[tokio::test]
async fn test_timeout_returns_504_payload() {
    let site = MockServer::start().await;
    Mock::given(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&site)
        .await;
    let api = start_api(Config {
        timeout_seconds: 1,
        ..Default::default()
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/check-headers", api))
        .json(&json!({ "url": format!("{}/slow", site.uri()) }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 504);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["error"], "Timeout");
    assert_eq!(body["message"], "Request timed out after 1s");
}

#[tokio::test]
async fn test_status_and_metrics_count_outcomes() {
    let site = redirecting_site().await;
    let api = start_api(Config::default()).await;
    let client = reqwest::Client::new();

    for url in [format!("{}/old", site.uri()), "".to_string()] {
        client
            .post(format!("{}/api/check-headers", api))
            .json(&json!({ "url": url }))
            .send()
            .await
            .expect("request failed");
    }

    let status: Value = client
        .get(format!("{}/status", api))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("body should be JSON");
    assert_eq!(status["total_inspections"], 2);
    assert_eq!(status["succeeded"], 1);
    assert_eq!(status["failed"], 1);
    assert_eq!(status["redirected"], 1);
    assert_eq!(status["redirects_followed"], 1);
    assert_eq!(status["failures"]["invalid_input"], 1);
    assert_eq!(status["failures"]["timeout"], 0);

    let metrics = client
        .get(format!("{}/metrics", api))
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("body should be text");
    assert!(metrics.contains("header_inspector_inspections_total 2"));
    assert!(metrics.contains("header_inspector_inspections_failed_total{kind=\"InvalidInput\"} 1"));
    assert!(metrics.contains("header_inspector_inspections_failed_total{kind=\"Timeout\"} 0"));
}
