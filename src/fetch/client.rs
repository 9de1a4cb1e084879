//! Catalog fetch client
//!
//! One request per page/filter combination, no retries. Failures are
//! classified into `FetchError` kinds and returned to the caller.

use super::endpoint::Endpoint;
use crate::error::FetchError;
use crate::http::{Transport, TransportError, TransportResponse};
use crate::types::{Character, CharacterPage};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Source of character pages, as seen by the pagination controller
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page; `status` is an optional status filter
    async fn fetch_page(
        &self,
        page: u32,
        status: Option<&str>,
    ) -> Result<CharacterPage, FetchError>;
}

/// Fetch client bound to an endpoint and an injected transport
#[derive(Clone)]
pub struct FetchClient {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client for `endpoint` using `transport`
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetch a single character by id
    pub async fn fetch_character(&self, id: u64) -> Result<Character, FetchError> {
        let url = self.endpoint.character_url(id).inspect_err(|_| {
            warn!("Rejected invalid endpoint: {}", self.endpoint.base());
        })?;
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FetchError> {
        debug!("Dispatching {}", url);
        let response = self.transport.get(url).await.map_err(classify_transport)?;
        decode(&response).inspect_err(|e| warn!("Request to {} failed: {}", url, e))
    }
}

#[async_trait]
impl PageSource for FetchClient {
    async fn fetch_page(
        &self,
        page: u32,
        status: Option<&str>,
    ) -> Result<CharacterPage, FetchError> {
        let url = self.endpoint.page_url(page, status).inspect_err(|_| {
            warn!("Rejected invalid endpoint: {}", self.endpoint.base());
        })?;
        self.get_json(&url).await
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

fn classify_transport(error: TransportError) -> FetchError {
    match error {
        TransportError::Timeout { .. } => FetchError::Timeout,
        TransportError::Other(_) => FetchError::Unknown,
    }
}

/// Decode a completed exchange: status first, then presence, then shape
pub fn decode<T: DeserializeOwned>(response: &TransportResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::RemoteError(response.status));
    }
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::NoData);
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        debug!("Decode failure: {}", e);
        FetchError::MalformedResponse
    })
}
