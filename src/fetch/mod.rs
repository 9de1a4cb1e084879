//! Fetch module
//!
//! Issues catalog requests and classifies their failures.
//!
//! # Overview
//!
//! - `Endpoint` - builds and validates request targets
//! - `FetchClient` - single-shot page and character requests over a
//!   `Transport`
//! - `PageSource` - the trait the pagination controller consumes

mod client;
mod endpoint;

pub use client::{decode, FetchClient, PageSource};
pub use endpoint::{validate, Endpoint, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests;
