//! Request target construction
//!
//! Every target is validated before it reaches the transport: it must be an
//! absolute `http`/`https` URL with a non-empty host.

use crate::error::FetchError;
use url::Url;

/// Default public catalog API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

const CHARACTER_RESOURCE: &str = "character";

/// Base address of the catalog API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    /// Wrap a base address; validation happens when a target is built
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The raw base address
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Target for one page of characters, optionally filtered by status
    pub fn page_url(&self, page: u32, status: Option<&str>) -> Result<Url, FetchError> {
        let mut url = self.resource_url(&[CHARACTER_RESOURCE])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            if let Some(status) = status {
                query.append_pair("status", &status.to_lowercase());
            }
        }
        Ok(url)
    }

    /// Target for a single character
    pub fn character_url(&self, id: u64) -> Result<Url, FetchError> {
        self.resource_url(&[CHARACTER_RESOURCE, &id.to_string()])
    }

    fn resource_url(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = validate(&self.base)?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidAddress)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parse and check an address: absolute, http(s), non-empty host
pub fn validate(address: &str) -> Result<Url, FetchError> {
    let url = Url::parse(address.trim()).map_err(|_| FetchError::InvalidAddress)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidAddress);
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidAddress);
    }

    Ok(url)
}
