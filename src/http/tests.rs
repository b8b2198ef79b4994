//! Tests for the HTTP transport module

use super::response::strip_api_path;
use super::*;
use crate::config::ElinkConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn headers_with(name: &'static str, value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_str(value).unwrap());
    headers
}

// ============================================================================
// RawResponse Tests
// ============================================================================

#[test]
fn test_raw_response_parts() {
    let response = RawResponse::from_parts(200, HeaderMap::new(), r#"{"ok":true}"#.as_bytes());

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), r#"{"ok":true}"#);
    assert_eq!(response.content().as_ref(), br#"{"ok":true}"#);
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let headers = headers_with("x-total-count", "42");
    let response = RawResponse::from_parts(200, headers, "");

    assert_eq!(response.header("X-Total-Count"), Some("42"));
    assert_eq!(response.header("x-total-count"), Some("42"));
}

#[test]
fn test_total_count_parses_header() {
    let headers = headers_with(TOTAL_COUNT_HEADER, "125");
    let response = RawResponse::from_parts(200, headers, "[]");
    assert_eq!(response.total_count(), 125);
}

#[test]
fn test_total_count_defaults_to_zero() {
    let response = RawResponse::from_parts(200, HeaderMap::new(), "[]");
    assert_eq!(response.total_count(), 0);

    // non-numeric values are a silent default, not an error
    let headers = headers_with(TOTAL_COUNT_HEADER, "lots");
    let response = RawResponse::from_parts(200, headers, "[]");
    assert_eq!(response.total_count(), 0);
}

#[test]
fn test_link_relation_lookup() {
    let headers = headers_with(
        "link",
        "<https://example.com/elink2api/records?page=2>; rel=\"next\", \
         <https://example.com/elink2api/records?page=0>; rel=\"first\"",
    );
    let response = RawResponse::from_parts(200, headers, "[]");

    assert_eq!(
        response.link("next"),
        Some("https://example.com/elink2api/records?page=2".to_string())
    );
    assert_eq!(
        response.link("first"),
        Some("https://example.com/elink2api/records?page=0".to_string())
    );
    assert_eq!(response.link("prev"), None);
}

#[test]
fn test_link_absent_header() {
    let response = RawResponse::from_parts(200, HeaderMap::new(), "[]");
    assert_eq!(response.link("next"), None);
}

// ============================================================================
// Link relativizing
// ============================================================================

#[test]
fn test_strip_api_path_absolute_url() {
    let stripped = strip_api_path(
        "https://example.com/elink2api/records?page=2",
        "/elink2api/",
    );
    assert_eq!(stripped, "records?page=2");
}

#[test]
fn test_strip_api_path_relative_url() {
    let stripped = strip_api_path("/elink2api/records?page=2", "/elink2api/");
    assert_eq!(stripped, "records?page=2");
}

#[test]
fn test_strip_api_path_root_prefix_skips_scheme() {
    let stripped = strip_api_path("https://example.com/records?page=2", "/");
    assert_eq!(stripped, "records?page=2");
}

#[test]
fn test_strip_api_path_missing_prefix_left_unchanged() {
    let stripped = strip_api_path("https://example.com/other/records", "/elink2api/");
    assert_eq!(stripped, "https://example.com/other/records");
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elink2api/records/123"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"osti_id": 123})))
        .mount(&mock_server)
        .await;

    let config = ElinkConfig::builder()
        .base_url(format!("{}/elink2api/", mock_server.uri()))
        .token("test-token")
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let response = client.get("records/123").await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().contains("123"));
}

#[tokio::test]
async fn test_get_with_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elink2api/records"))
        .and(query_param("title", "fusion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let config = ElinkConfig::builder()
        .base_url(format!("{}/elink2api/", mock_server.uri()))
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let query = vec![("title".to_string(), "fusion".to_string())];
    let response = client.get_with_query("records", &query).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_non_2xx_is_captured_not_failed() {
    // transport hands back the snapshot; classification happens in validate()
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elink2api/records/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .mount(&mock_server)
        .await;

    let config = ElinkConfig::builder()
        .base_url(format!("{}/elink2api/", mock_server.uri()))
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let response = client.get("records/9").await.unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), "no such record");
}
