//! Tests for the HTTP module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Link Header Tests
// ============================================================================

#[test]
fn test_parse_link_header_github_style() {
    let header = r#"<https://api.github.com/user/repos?page=3&per_page=100>; rel="next", <https://api.github.com/user/repos?page=50&per_page=100>; rel="last""#;
    let links = parse_link_header(header);

    assert_eq!(links.len(), 2);
    assert_eq!(
        links.get("next").map(String::as_str),
        Some("https://api.github.com/user/repos?page=3&per_page=100")
    );
    assert_eq!(
        links.get("last").map(String::as_str),
        Some("https://api.github.com/user/repos?page=50&per_page=100")
    );
}

#[test]
fn test_parse_link_header_unquoted_and_multi_rel() {
    let links = parse_link_header(
        "<https://x.test/p1>; rel=first, <https://x.test/p2>; rel=\"next last\"",
    );

    assert_eq!(links.get("first").map(String::as_str), Some("https://x.test/p1"));
    assert_eq!(links.get("next").map(String::as_str), Some("https://x.test/p2"));
    assert_eq!(links.get("last").map(String::as_str), Some("https://x.test/p2"));
}

#[test]
fn test_parse_link_header_keeps_commas_inside_urls() {
    let links = parse_link_header(r#"<https://x.test/items?ids=1,2,3&page=2>; rel="next""#);
    assert_eq!(
        links.get("next").map(String::as_str),
        Some("https://x.test/items?ids=1,2,3&page=2")
    );
}

#[test]
fn test_parse_link_header_extra_params_and_case() {
    let links = parse_link_header(r#"<https://x.test/p0>; title="prev page"; REL="Prev""#);
    assert_eq!(links.get("prev").map(String::as_str), Some("https://x.test/p0"));
}

#[test]
fn test_parse_link_header_skips_malformed() {
    assert!(parse_link_header("").is_empty());
    assert!(parse_link_header("garbage").is_empty());
    assert!(parse_link_header("<https://x.test/p1>; title=\"no rel\"").is_empty());
    assert!(parse_link_header("<https://x.test/unterminated; rel=\"next\"").is_empty());
}

// ============================================================================
// Client Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("page-links/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::default()
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0");

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_http_client_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client =
        HttpClient::with_config(HttpClientConfig::default().header("Accept", "application/json"))
            .unwrap();
    let response = client
        .get(&format!("{}/items", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn test_http_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}
