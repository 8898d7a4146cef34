//! Error types for the management API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Aggregation is all-or-nothing: every variant raised mid-run aborts the
//! run and no partially merged collection escapes.

use thiserror::Error;

/// The main error type for the management API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Credential Errors
    // ============================================================================
    #[error("Failed to read credentials from '{path}': {message}")]
    CredentialFile { path: String, message: String },

    #[error("Missing credential field: {field}")]
    MissingCredentialField { field: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to {url} failed with HTTP {status} after {pages_fetched} page(s): {body}")]
    RequestFailed {
        status: u16,
        url: String,
        body: String,
        pages_fetched: u32,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Malformed page from {url} after {pages_fetched} page(s): {message}")]
    MalformedPage {
        url: String,
        message: String,
        pages_fetched: u32,
    },

    #[error("Pagination of {url} exceeded the limit of {max_pages} pages")]
    PageLimitExceeded { url: String, max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
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

    /// Create a missing credential field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingCredentialField {
            field: field.into(),
        }
    }

    /// Create a request failure for a non-success status
    pub fn request_failed(
        status: u16,
        url: impl Into<String>,
        body: impl Into<String>,
        pages_fetched: u32,
    ) -> Self {
        Self::RequestFailed {
            status,
            url: url.into(),
            body: body.into(),
            pages_fetched,
        }
    }

    /// Create a malformed page error
    pub fn malformed_page(
        url: impl Into<String>,
        message: impl Into<String>,
        pages_fetched: u32,
    ) -> Self {
        Self::MalformedPage {
            url: url.into(),
            message: message.into(),
            pages_fetched,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Number of pages successfully fetched before the run failed
    pub fn pages_fetched(&self) -> Option<u32> {
        match self {
            Error::RequestFailed { pages_fetched, .. }
            | Error::MalformedPage { pages_fetched, .. } => Some(*pages_fetched),
            Error::PageLimitExceeded { max_pages, .. } => Some(*max_pages),
            _ => None,
        }
    }
}

/// Result type alias for the management API client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
