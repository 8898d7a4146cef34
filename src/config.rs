//! Client configuration
//!
//! Everything that composes a transport and an aggregator lives here and is
//! passed explicitly; nothing is held in process globals. Loadable from
//! YAML (or JSON, which YAML accepts):
//!
//! ```yaml
//! base_url: https://api.example.com
//! timeout_secs: 30
//! max_pages: 500
//! logging:
//!   level: DEBUG
//! ```

use crate::auth::{DEFAULT_API_KEY_HEADER, DEFAULT_API_KEY_QUERY_PARAM};
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::{PageAggregator, DEFAULT_MAX_PAGES};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Client Config
// ============================================================================

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.example.com`
    pub base_url: String,

    /// Path prefix of the management (Basic auth) API
    pub management_prefix: String,

    /// Path prefix of the API-key API
    pub api_prefix: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Page cap per aggregation run; `null` disables the cap
    pub max_pages: Option<u32>,

    /// User agent string
    pub user_agent: Option<String>,

    /// Header carrying the API key (`null` to omit)
    pub api_key_header: Option<String>,

    /// Query parameter repeating the API key (`null` to omit)
    pub api_key_query_param: Option<String>,

    /// Diagnostics
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            management_prefix: default_management_prefix(),
            api_prefix: default_api_prefix(),
            timeout_secs: 30,
            max_pages: Some(DEFAULT_MAX_PAGES),
            user_agent: None,
            api_key_header: Some(DEFAULT_API_KEY_HEADER.to_string()),
            api_key_query_param: Some(DEFAULT_API_KEY_QUERY_PARAM.to_string()),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_management_prefix() -> String {
    "new/management/v2.0".to_string()
}

fn default_api_prefix() -> String {
    "v2.0".to_string()
}

impl ClientConfig {
    /// Config for the given API root with defaults elsewhere
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load a config file (YAML or JSON). Errors name the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse a config document (YAML or JSON)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.is_empty() {
            let url = url::Url::parse(&self.base_url)
                .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::invalid_value(
                    "base_url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url is not set"));
        }
        self.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(builder.build())
    }

    /// Aggregator settings derived from this config
    pub fn aggregator(&self) -> PageAggregator {
        PageAggregator::new().with_max_pages(self.max_pages)
    }
}

// ============================================================================
// Logging Config
// ============================================================================

/// Diagnostic settings, applied once by whatever owns the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level
    pub level: LogLevel,
    /// Colored output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Install a `tracing` subscriber. `RUST_LOG` directives take precedence
    /// over the configured level. Returns `false` if one was already set.
    pub fn init(&self) -> bool {
        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(tracing::Level::from(self.level).into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.ansi)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}
