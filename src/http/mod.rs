//! HTTP module
//!
//! The transport layer beneath the fetch client.
//!
//! # Features
//!
//! - **Transport seam**: `Transport` trait, injected at construction
//! - **Default transport**: `HttpClient` on reqwest with timeout and headers
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{Transport, TransportError, TransportResponse};
