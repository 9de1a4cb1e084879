//! Transport seam
//!
//! The fetch client talks to the network only through `Transport`, so tests
//! and embedders can substitute their own implementation.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// Raw response of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, possibly empty
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before a response was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Transport failure: {0}")]
    Other(String),
}

/// Asynchronous GET of an absolute URL
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET request; never retries
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
