//! Explorer configuration
//!
//! Loaded from a YAML or JSON file (chosen by extension) and overridable from
//! the command line. Every field has a default, so an empty file is valid.

use crate::error::{Error, Result};
use crate::fetch::{self, Endpoint, FetchClient, DEFAULT_BASE_URL};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Runtime configuration of the explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL of the catalog API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent override
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,

    /// Client-side rate limit, disabled when absent
    pub rate_limit: Option<RateLimiterConfig>,

    /// Status filter applied when none is given on the command line
    pub default_status: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
            headers: HashMap::new(),
            rate_limit: None,
            default_status: None,
        }
    }
}

impl ExplorerConfig {
    /// Load and validate a config file (`.json` as JSON, anything else as YAML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("base_url", "cannot be empty"));
        }
        fetch::validate(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }

        if let Some(limit) = &self.rate_limit {
            if limit.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be positive",
                ));
            }
        }

        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        if let Some(limit) = &self.rate_limit {
            builder = builder.rate_limit(limit.clone());
        }

        builder.build()
    }

    /// Build a fetch client over the default reqwest transport
    pub fn build_client(&self) -> Result<FetchClient> {
        let transport = HttpClient::with_config(self.http_config())?;
        Ok(FetchClient::new(
            Endpoint::new(self.base_url.clone()),
            Arc::new(transport),
        ))
    }
}
