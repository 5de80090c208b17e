//! Tests for the HTTP client module

use super::*;
use crate::cache::MemoryCache;
use crate::error::Error;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_api_client_config_builder() {
    let config = ApiClientConfig::new("https://memex.social")
        .header("X-Memex-Personal-Key-ID", "key")
        .timeout(std::time::Duration::from_secs(5));

    assert_eq!(config.base_url, "https://memex.social");
    assert_eq!(
        config.default_headers.get("X-Memex-Personal-Key-ID"),
        Some(&"key".to_string())
    );
    assert_eq!(config.timeout, std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_get_json_parses_typed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/personal/space/list"))
        .and(query_param("spacesToWhen", "1700000000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "personalSpaces": [
                {"personalSpaceId": "sp1", "title": "Inbox", "createdWhen": 1, "updatedWhen": 2}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(ApiClientConfig::new(mock_server.uri()));
    let page: crate::types::SpaceListPage = client
        .get_json("/api/personal/space/list?spacesToWhen=1700000000000&maxSpaceCount=50")
        .await
        .unwrap();

    assert_eq!(page.personal_spaces.len(), 1);
    assert_eq!(page.personal_spaces[0].title, "Inbox");
}

#[tokio::test]
async fn test_default_headers_sent_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/personal/space/list"))
        .and(header("X-Memex-Personal-Key-ID", "the-id"))
        .and(header("X-Memex-Personal-Key-Secret", "the-secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"personalSpaces": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ApiClientConfig::new(mock_server.uri())
        .header("X-Memex-Personal-Key-ID", "the-id")
        .header("X-Memex-Personal-Key-Secret", "the-secret");
    let client = ApiClient::new(config);

    let _: crate::types::SpaceListPage =
        client.get_json("/api/personal/space/list").await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_typed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/personal/space/list"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid-key\"}"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(ApiClientConfig::new(mock_server.uri()));
    let err = client
        .get_json::<crate::types::SpaceListPage>("/api/personal/space/list")
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid-key"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cache_short_circuits_second_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/personal/content/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": [],
            "locators": [],
            "annotations": [],
            "personalSpaceEntries": []
        })))
        .expect(1) // the second get_json must not reach the server
        .mount(&mock_server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let client = ApiClient::with_cache(ApiClientConfig::new(mock_server.uri()), cache.clone());

    let first: serde_json::Value = client
        .get_json("/api/personal/content/list?contentToWhen=5")
        .await
        .unwrap();
    let second: serde_json::Value = client
        .get_json("/api/personal/content/list?contentToWhen=5")
        .await
        .unwrap();

    assert_eq!(first, second);

    // byte-identical replay of the stored body
    let url = url::Url::parse(&format!(
        "{}/api/personal/content/list?contentToWhen=5",
        mock_server.uri()
    ))
    .unwrap();
    let cached = crate::cache::ResponseCache::get(cache.as_ref(), &url).unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&cached).unwrap(),
        first
    );
}

#[tokio::test]
async fn test_error_responses_are_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/personal/space/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let client = ApiClient::with_cache(ApiClientConfig::new(mock_server.uri()), cache);

    for _ in 0..2 {
        let err = client
            .get_json::<crate::types::SpaceListPage>("/api/personal/space/list")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }
}
