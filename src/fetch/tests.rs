//! Tests for the fetch module

use super::*;
use crate::error::FetchError;
use crate::http::{HttpClient, HttpClientConfig, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_case::test_case;
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Transport that records every target and replays scripted outcomes
#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<Url>>,
    outcomes: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
}

impl RecordingTransport {
    fn with(outcome: Result<TransportResponse, TransportError>) -> Arc<Self> {
        let transport = Self::default();
        transport.outcomes.lock().unwrap().push_back(outcome);
        Arc::new(transport)
    }

    fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(url.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted outcome".to_string())))
    }
}

fn page_body() -> serde_json::Value {
    json!({
        "info": {
            "count": 826,
            "pages": 42,
            "next": "https://rickandmortyapi.com/api/character?page=3",
            "prev": "https://rickandmortyapi.com/api/character?page=1"
        },
        "results": [{
            "id": 21,
            "name": "Aqua Morty",
            "status": "unknown",
            "species": "Humanoid",
            "type": "Fish-Person",
            "gender": "Male",
            "origin": {"name": "unknown", "url": ""},
            "location": {
                "name": "Citadel of Ricks",
                "url": "https://rickandmortyapi.com/api/location/3"
            },
            "image": "https://rickandmortyapi.com/api/character/avatar/21.jpeg",
            "episode": [
                "https://rickandmortyapi.com/api/episode/10",
                "https://rickandmortyapi.com/api/episode/22"
            ],
            "url": "https://rickandmortyapi.com/api/character/21",
            "created": "2017-11-04T22:39:48.055Z"
        }]
    })
}

fn client_with(transport: Arc<RecordingTransport>) -> FetchClient {
    FetchClient::new(Endpoint::new("https://example.com/api"), transport)
}

// ============================================================================
// Endpoint Tests
// ============================================================================

#[test]
fn test_page_url_without_filter() {
    let url = Endpoint::default().page_url(1, None).unwrap();
    assert_eq!(
        url.as_str(),
        "https://rickandmortyapi.com/api/character?page=1"
    );
}

#[test]
fn test_page_url_lowercases_filter() {
    let url = Endpoint::new("https://example.com/api/")
        .page_url(3, Some("Alive"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/api/character?page=3&status=alive"
    );
}

#[test]
fn test_character_url() {
    let url = Endpoint::new("http://localhost:8080").character_url(21).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/character/21");
}

#[test_case("invalid_url" ; "no scheme")]
#[test_case("" ; "empty")]
#[test_case("ftp://example.com/api" ; "unsupported scheme")]
#[test_case("file:///tmp/api" ; "no host")]
#[test_case("mailto:someone@example.com" ; "not a base")]
#[test_case("http://" ; "empty host")]
fn test_validate_rejects(address: &str) {
    assert_eq!(validate(address), Err(FetchError::InvalidAddress));
    assert_eq!(
        Endpoint::new(address).page_url(1, None),
        Err(FetchError::InvalidAddress)
    );
}

#[test_case("https://rickandmortyapi.com/api" ; "https")]
#[test_case("http://127.0.0.1:9000" ; "http with port")]
fn test_validate_accepts(address: &str) {
    assert!(validate(address).is_ok());
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_classification() {
    let page: Result<crate::types::CharacterPage, _> =
        decode(&TransportResponse::new(200, page_body().to_string()));
    assert_eq!(page.unwrap().results[0].name, "Aqua Morty");

    let result: Result<crate::types::CharacterPage, _> =
        decode(&TransportResponse::new(500, page_body().to_string()));
    assert_eq!(result, Err(FetchError::RemoteError(500)));

    let result: Result<crate::types::CharacterPage, _> = decode(&TransportResponse::new(200, ""));
    assert_eq!(result, Err(FetchError::NoData));

    let result: Result<crate::types::CharacterPage, _> =
        decode(&TransportResponse::new(200, r#"{ "invalidKey": "Invalid Value" }"#));
    assert_eq!(result, Err(FetchError::MalformedResponse));
}

// ============================================================================
// FetchClient Tests (scripted transport)
// ============================================================================

#[tokio::test]
async fn test_fetch_page_success() {
    let transport = RecordingTransport::with(Ok(TransportResponse::new(
        200,
        page_body().to_string(),
    )));
    let client = client_with(transport.clone());

    let page = client.fetch_page(2, None).await.unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, 21);
    assert_eq!(page.results[0].name, "Aqua Morty");
    assert_eq!(page.info.count, 826);
    assert_eq!(
        transport.calls()[0].as_str(),
        "https://example.com/api/character?page=2"
    );
}

#[tokio::test]
async fn test_fetch_page_invalid_address_skips_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let client = FetchClient::new(Endpoint::new("invalid_url"), transport.clone());

    let result = client.fetch_page(1, None).await;

    assert_eq!(result, Err(FetchError::InvalidAddress));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_fetch_character_invalid_address_skips_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let client = FetchClient::new(Endpoint::new("example.com/api"), transport.clone());

    assert_eq!(
        client.fetch_character(1).await,
        Err(FetchError::InvalidAddress)
    );
    assert!(transport.calls().is_empty());
}

#[test_case(Err(TransportError::Timeout { timeout_ms: 10 }), FetchError::Timeout ; "timeout")]
#[test_case(Err(TransportError::Other("reset".into())), FetchError::Unknown ; "other transport failure")]
#[test_case(Ok(TransportResponse::new(500, "oops")), FetchError::RemoteError(500) ; "server error")]
#[test_case(Ok(TransportResponse::new(404, "")), FetchError::RemoteError(404) ; "not found")]
#[test_case(Ok(TransportResponse::new(200, "")), FetchError::NoData ; "empty body")]
#[test_case(Ok(TransportResponse::new(200, "[1,2,3]")), FetchError::MalformedResponse ; "wrong shape")]
#[tokio::test]
async fn test_fetch_page_failure_classification(
    outcome: Result<TransportResponse, TransportError>,
    expected: FetchError,
) {
    let transport = RecordingTransport::with(outcome);
    let client = client_with(transport.clone());

    assert_eq!(client.fetch_page(1, None).await, Err(expected));
    assert_eq!(transport.calls().len(), 1);
}

// ============================================================================
// FetchClient Tests (HTTP)
// ============================================================================

#[tokio::test]
async fn test_fetch_page_over_http_with_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "1"))
        .and(query_param("status", "dead"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = Arc::new(HttpClient::new().unwrap());
    let client = FetchClient::new(
        Endpoint::new(format!("{}/api", mock_server.uri())),
        transport,
    );

    let page = client.fetch_page(1, Some("DEAD")).await.unwrap();
    assert_eq!(page.results[0].name, "Aqua Morty");
}

#[tokio::test]
async fn test_fetch_page_over_http_without_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "4"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = Arc::new(HttpClient::new().unwrap());
    let client = FetchClient::new(
        Endpoint::new(format!("{}/api", mock_server.uri())),
        transport,
    );

    assert!(client.fetch_page(4, None).await.is_ok());
}

#[tokio::test]
async fn test_fetch_page_over_http_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let transport = Arc::new(HttpClient::with_config(config).unwrap());
    let client = FetchClient::new(Endpoint::new(mock_server.uri()), transport);

    assert_eq!(client.fetch_page(1, None).await, Err(FetchError::Timeout));
}

#[tokio::test]
async fn test_fetch_character_over_http() {
    let mock_server = MockServer::start().await;
    let character = page_body()["results"][0].clone();

    Mock::given(method("GET"))
        .and(path("/character/21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(character))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/character/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Character not found"
        })))
        .mount(&mock_server)
        .await;

    let transport = Arc::new(HttpClient::new().unwrap());
    let client = FetchClient::new(Endpoint::new(mock_server.uri()), transport);

    let found = client.fetch_character(21).await.unwrap();
    assert_eq!(found.name, "Aqua Morty");
    assert_eq!(found.location.name, "Citadel of Ricks");

    assert_eq!(
        client.fetch_character(9999).await,
        Err(FetchError::RemoteError(404))
    );
}
