//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: credentials file → client → paginated
//! HTTP requests → merged JSON

use mgmt_api_client::auth::load_credentials;
use mgmt_api_client::{
    ApiClient, ApiKeyApi, ClientConfig, Credential, Error, HttpClient, ManagementApi,
    PageAggregator, RequestDescriptor,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Write;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount `pages` at `endpoint`: the first without a cursor, the rest keyed
/// by the previous page's `nextCursor`
async fn mount_cursor_chain(server: &MockServer, verb: &str, endpoint: &str, pages: &[Value]) {
    let mut previous: Option<String> = None;
    for page in pages {
        let mock = Mock::given(method(verb)).and(path(endpoint));
        let mock = match &previous {
            None => mock.and(query_param_is_missing("next")),
            Some(cursor) => mock.and(query_param("next", cursor.as_str())),
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
            .expect(1)
            .mount(server)
            .await;
        previous = page["nextCursor"].as_str().map(String::from);
    }
}

fn user_pages(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let cursor = if i + 1 < count {
                Value::String(format!("cursor-{}", i + 1))
            } else {
                Value::Null
            };
            json!({
                "items": [{"_id": format!("u{}", 2 * i)}, {"_id": format!("u{}", 2 * i + 1)}],
                "nextCursor": cursor
            })
        })
        .collect()
}

// ============================================================================
// Management flow
// ============================================================================

#[tokio::test]
async fn test_management_flow_from_secrets_file() {
    let mock_server = MockServer::start().await;
    mount_cursor_chain(
        &mock_server,
        "GET",
        "/new/management/v2.0/users",
        &user_pages(4),
    )
    .await;

    let mut secrets = tempfile::NamedTempFile::new().unwrap();
    secrets
        .write_all(br#"{"username": "admin@example.com", "password": "pw"}"#)
        .unwrap();

    let config = ClientConfig::new(mock_server.uri());
    let credential = load_credentials(secrets.path()).unwrap();
    let api = ManagementApi::from_config(&config, credential).unwrap();

    let users = api.list_users().await.unwrap();
    let ids: Vec<&str> = users["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["_id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["u0", "u1", "u2", "u3", "u4", "u5", "u6", "u7"]);
    assert_eq!(users["nextCursor"], Value::Null);
}

#[tokio::test]
async fn test_page_cap_from_config() {
    let mock_server = MockServer::start().await;

    // server never stops handing out the same cursor
    Mock::given(method("GET"))
        .and(path("/new/management/v2.0/organisations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"_id": "o"}],
            "nextCursor": "again"
        })))
        .expect(5)
        .mount(&mock_server)
        .await;

    let mut config = ClientConfig::new(mock_server.uri());
    config.max_pages = Some(5);
    let api = ManagementApi::connect(&config, "admin", "pw").unwrap();

    let err = api.list_organisations().await.unwrap_err();
    assert!(matches!(err, Error::PageLimitExceeded { max_pages: 5, .. }));
}

// ============================================================================
// API key flow
// ============================================================================

#[tokio::test]
async fn test_api_key_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/auditevents"))
        .and(header("X-API-Key", "svc-key"))
        .and(query_param("api_key", "svc-key"))
        .and(query_param("type", "login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"n": 1}, {"n": 2}],
            "nextCursor": "e2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.0/auditevents"))
        .and(header("X-API-Key", "svc-key"))
        .and(query_param("api_key", "svc-key"))
        .and(query_param("next", "e2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"n": 3}],
            "nextCursor": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri());
    let api = ApiKeyApi::connect(&config, "svc-key").unwrap();

    let mut params = HashMap::new();
    params.insert("type".to_string(), "login".to_string());
    let events = api.list_audit_events(params).await.unwrap();

    assert_eq!(events["items"], json!([{"n": 1}, {"n": 2}, {"n": 3}]));
}

#[tokio::test]
async fn test_failed_continuation_returns_no_partial_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/auditevents"))
        .and(query_param_is_missing("next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"n": 1}],
            "nextCursor": "e2"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.0/auditevents"))
        .and(query_param("next", "e2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri());
    let api = ApiKeyApi::connect(&config, "svc-key").unwrap();

    let err = api.list_audit_events(HashMap::new()).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.pages_fetched(), Some(1));
    assert!(err.to_string().contains("maintenance"));
    // the key never leaks into the error text
    assert!(!err.to_string().contains("svc-key"));
}

// ============================================================================
// Generic client
// ============================================================================

#[tokio::test]
async fn test_generic_client_with_custom_aggregator() {
    let mock_server = MockServer::start().await;
    mount_cursor_chain(&mock_server, "GET", "/custom/things", &user_pages(3)).await;

    let config = ClientConfig::new(mock_server.uri());
    let transport =
        HttpClient::with_credential(config.http_config().unwrap(), Credential::basic("u", "p"))
            .unwrap();
    let client = ApiClient::new(transport, PageAggregator::new().with_max_pages(None));

    let (value, report) = client
        .fetch_all_with_report(&RequestDescriptor::get("custom/things"))
        .await
        .unwrap();

    assert_eq!(value["items"].as_array().unwrap().len(), 6);
    assert_eq!(report.pages, 3);
    assert_eq!(report.items, 6);
    assert!(report.paginated);
}

#[tokio::test]
async fn test_non_paginated_resource_passthrough() {
    let mock_server = MockServer::start().await;

    let body = json!({"_id": "u1", "name": "Alice", "roles": ["admin", "editor"]});
    Mock::given(method("GET"))
        .and(path("/new/management/v2.0/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri());
    let api = ManagementApi::connect(&config, "admin", "pw").unwrap();

    assert_eq!(api.get_user("u1").await.unwrap(), body);
}
