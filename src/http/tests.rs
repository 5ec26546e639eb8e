//! Tests for the HTTP transport module

use super::*;
use crate::request::{Endpoint, QueryBuilder};
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("solaredge-api/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_default_header_is_config_error() {
    let config = HttpClientConfig::builder().header("bad header", "v").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, crate::Error::Config { .. }));
}

// ============================================================================
// Request building
// ============================================================================

#[test]
fn test_build_joins_base_and_path_with_query() {
    let endpoint =
        Endpoint::get("/site/1/energy").with_query(QueryBuilder::new().push("a", "1 2").push("b", "x"));
    let request = HttpRequest::build("https://example.com/", endpoint, HeaderMap::new()).unwrap();

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url.as_str(), "https://example.com/site/1/energy?a=1+2&b=x");
    assert!(request.body.is_none());
}

#[test]
fn test_build_json_body_sets_content_type() {
    let endpoint = Endpoint::post("/layout").with_json(json!({ "reporterIds": [1] }));
    let request = HttpRequest::build("https://example.com", endpoint, HeaderMap::new()).unwrap();

    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(request.body.unwrap().as_ref(), br#"{"reporterIds":[1]}"#);
}

#[test]
fn test_build_form_body_overrides_content_type() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let endpoint = Endpoint::post("/login").with_form("j_username=a&j_password=b");
    let request = HttpRequest::build("https://example.com", endpoint, headers).unwrap();

    assert_eq!(
        request.headers.get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded"
    );
}

#[test]
fn test_build_rejects_bad_base_url() {
    let err = HttpRequest::build("not a url", Endpoint::get("/x"), HeaderMap::new()).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidUrl(_)));
}

// ============================================================================
// Sending
// ============================================================================

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/list"))
        .and(query_param("api_key", "KEY"))
        .and(header("user-agent", "custom/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sites": { "count": 0 } })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("custom/1.0"));
    let endpoint = Endpoint::get("/sites/list").with_query(QueryBuilder::new().push("api_key", "KEY"));
    let request = HttpRequest::build(&mock_server.uri(), endpoint, headers).unwrap();

    let response = client.send(request).await.unwrap();
    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["sites"]["count"], 0);
}

#[tokio::test]
async fn test_http_client_post_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/layout"))
        .and(body_json(json!({ "reporterIds": [1] })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string("j_username=a&j_password=b"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let json_request = HttpRequest::build(
        &mock_server.uri(),
        Endpoint::post("/layout").with_json(json!({ "reporterIds": [1] })),
        HeaderMap::new(),
    )
    .unwrap();
    let form_request = HttpRequest::build(
        &mock_server.uri(),
        Endpoint::post("/login").with_form("j_username=a&j_password=b"),
        HeaderMap::new(),
    )
    .unwrap();

    assert_eq!(client.send(json_request).await.unwrap().status, 200);
    assert_eq!(client.send(form_request).await.unwrap().status, 200);
}

#[tokio::test]
async fn test_http_client_does_not_interpret_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let request =
        HttpRequest::build(&mock_server.uri(), Endpoint::get("/missing"), HeaderMap::new()).unwrap();

    let response = client.send(request).await.unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(response.body.as_ref(), b"nope");
}

#[tokio::test]
async fn test_http_client_returns_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "A=1; Path=/"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = HttpRequest::build(&mock_server.uri(), Endpoint::get("/"), HeaderMap::new()).unwrap();

    let response = client.send(request).await.unwrap();
    assert_eq!(response.headers.get("set-cookie").unwrap(), "A=1; Path=/");
}

#[tokio::test]
async fn test_connection_error_is_transport_error() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(2))
            .build(),
    )
    .unwrap();
    let request = HttpRequest::build("http://127.0.0.1:1", Endpoint::get("/"), HeaderMap::new()).unwrap();

    let err = client.send(request).await.unwrap_err();
    assert!(matches!(err, crate::Error::Transport(_)));
}
