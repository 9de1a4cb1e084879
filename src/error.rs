//! Error types for the character explorer
//!
//! Two layers live here:
//! - `FetchError` - the failure taxonomy of a single catalog request. The
//!   pagination controller only renders these, it never reclassifies them.
//! - `Error` - crate-level errors (configuration, I/O, CLI) that may wrap a
//!   `FetchError`.

use thiserror::Error;

// ============================================================================
// Fetch Errors
// ============================================================================

/// Classified failure of one catalog request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request target is not an absolute http(s) URL with a host
    #[error("The URL provided is invalid.")]
    InvalidAddress,

    /// The server answered successfully but sent an empty body
    #[error("No data was returned by the server.")]
    NoData,

    /// The body could not be decoded into the expected shape
    #[error("Failed to decode the response from the server.")]
    MalformedResponse,

    /// Non-2xx status
    #[error("The server returned an error with status code {0}.")]
    RemoteError(u16),

    #[error("The request timed out. Please check your internet connection and try again.")]
    Timeout,

    #[error("An unknown error occurred.")]
    Unknown,
}

impl FetchError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAddress => "invalid_address",
            Self::NoData => "no_data",
            Self::MalformedResponse => "malformed_response",
            Self::RemoteError(_) => "remote_error",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Status code carried by a remote error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteError(code) => Some(*code),
            _ => None,
        }
    }
}

// ============================================================================
// Crate Errors
// ============================================================================

/// The main error type for the character explorer
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for the character explorer
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FetchError::InvalidAddress, "The URL provided is invalid." ; "invalid address")]
    #[test_case(FetchError::NoData, "No data was returned by the server." ; "no data")]
    #[test_case(FetchError::MalformedResponse, "Failed to decode the response from the server." ; "malformed")]
    #[test_case(FetchError::RemoteError(500), "The server returned an error with status code 500." ; "remote error")]
    #[test_case(FetchError::Unknown, "An unknown error occurred." ; "unknown")]
    fn test_fetch_error_message(err: FetchError, expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_timeout_message_mentions_timeout() {
        assert!(FetchError::Timeout.to_string().contains("timed out"));
    }

    #[test]
    fn test_status_code() {
        assert_eq!(FetchError::RemoteError(404).status_code(), Some(404));
        assert_eq!(FetchError::Timeout.status_code(), None);
        assert_eq!(FetchError::RemoteError(404).kind(), "remote_error");
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("timeout_secs", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'timeout_secs': must be positive"
        );

        let err = Error::from(FetchError::NoData);
        assert_eq!(
            err.to_string(),
            "Fetch failed: No data was returned by the server."
        );
    }
}
