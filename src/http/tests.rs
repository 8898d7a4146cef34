//! Tests for the HTTP module

use super::*;
use crate::auth::Credential;
use crate::error::Error;
use crate::types::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, credential: Credential) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_credential(config, credential).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert!(config.user_agent.starts_with("mgmt-api-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/new/management/v2.0/users"),
        "https://api.example.com/new/management/v2.0/users"
    );
    assert_eq!(
        client.build_url("v2.0/auditevents"),
        "https://api.example.com/v2.0/auditevents"
    );
    assert_eq!(
        client.build_url("https://other.example.com/x"),
        "https://other.example.com/x"
    );
}

// ============================================================================
// Request Descriptor Tests
// ============================================================================

#[test]
fn test_request_descriptor_builder() {
    let req = RequestDescriptor::get("users")
        .query("limit", "25")
        .header("X-Request-Id", "abc123")
        .json(json!({"key": "value"}));

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "users");
    assert_eq!(req.query.get("limit"), Some(&"25".to_string()));
    assert_eq!(req.headers.get("X-Request-Id"), Some(&"abc123".to_string()));
    assert!(req.body.is_some());
    assert!(req.expected_status.is_none());
}

#[test]
fn test_request_descriptor_success() {
    let get = RequestDescriptor::get("users");
    assert!(get.is_success(200));
    assert!(!get.is_success(204));

    let post = RequestDescriptor::post("apikeys").expect_status(&[204]);
    assert!(post.is_success(204));
    assert!(!post.is_success(200));
}

#[test]
fn test_request_descriptor_continuation() {
    let req = RequestDescriptor::get("users")
        .query("limit", "25")
        .query("filter", "x")
        .header("X-Trace", "1");

    let next = req.continuation("next", "cursor_abc");

    assert_eq!(next.query.len(), 1);
    assert_eq!(next.query.get("next"), Some(&"cursor_abc".to_string()));
    assert_eq!(next.path, req.path);
    assert_eq!(next.method, req.method);
    assert_eq!(next.headers, req.headers);
    // original untouched
    assert_eq!(req.query.len(), 2);
}

// ============================================================================
// Response Envelope Tests
// ============================================================================

#[test]
fn test_api_response_from_text() {
    let resp = ApiResponse::from_text(200, "u", r#"{"a": 1}"#);
    assert_eq!(resp.body, Some(json!({"a": 1})));
    assert_eq!(resp.size_bytes(), 8);

    let empty = ApiResponse::from_text(204, "u", "");
    assert!(empty.body.is_none());
    assert_eq!(empty.into_json(0).unwrap(), serde_json::Value::Null);

    let html = ApiResponse::from_text(502, "u", "<html>Bad Gateway</html>");
    assert!(html.body.is_none());
    assert_eq!(html.text, "<html>Bad Gateway</html>");

    let err = html.into_json(2).unwrap_err();
    assert!(matches!(err, Error::MalformedPage { pages_fetched: 2, .. }));
    assert!(err.to_string().contains("<html>Bad Gateway</html>"));
}

#[test]
fn test_api_response_from_json() {
    let resp = ApiResponse::from_json(200, "u", json!({"items": []}));
    assert_eq!(resp.text, r#"{"items":[]}"#);
    assert_eq!(resp.into_json(0).unwrap(), json!({"items": []}));
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_execute_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 1, "name": "Alice"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::None);
    let response = client
        .execute(&RequestDescriptor::get("/api/users"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.unwrap()["users"][0]["name"], "Alice");
    assert!(response.url.ends_with("/api/users"));
}

#[tokio::test]
async fn test_execute_post_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_json(json!({"name": "test"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 123})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::None);
    let response = client
        .execute(&RequestDescriptor::post("/api/items").json(json!({"name": "test"})))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body.unwrap()["id"], 123);
}

#[tokio::test]
async fn test_execute_returns_error_status_as_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::None);
    let response = client
        .execute(&RequestDescriptor::get("/api/missing"))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.text, "Not found");
    assert!(response.body.is_none());
}

#[tokio::test]
async fn test_execute_basic_auth() {
    let mock_server = MockServer::start().await;

    // "user:pass" in base64
    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::basic("user", "pass"));
    let response = client
        .execute(&RequestDescriptor::get("/secure"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_execute_api_key_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/auditevents"))
        .and(header("X-API-Key", "secret123"))
        .and(query_param("api_key", "secret123"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::api_key("secret123"));
    let response = client
        .execute(&RequestDescriptor::get("/v2.0/auditevents").query("limit", "10"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    // the key is stripped from the recorded URL
    assert!(!response.url.contains("secret123"));
}

#[tokio::test]
async fn test_execute_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Credential::None);
    let response = client
        .execute(&RequestDescriptor::get("/api/data").header("X-Request-Id", "req-456"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_execute_connection_refused() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .execute(&RequestDescriptor::get("/anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, crate::error::Error::Transport(_)));
}

#[tokio::test]
async fn test_execute_invalid_url() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();

    let err = client
        .execute(&RequestDescriptor::get("no-base-url"))
        .await
        .unwrap_err();

    assert!(matches!(err, crate::error::Error::InvalidUrl(_)));
}
