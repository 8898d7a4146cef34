//! HTTP client
//!
//! reqwest-backed `Transport`:
//! - Base URL joining
//! - Default headers (`Accept: application/json`)
//! - Credential applied to every request
//! - Response size logging
//!
//! No retries and no rate limiting: a failed request surfaces immediately.

use super::request::RequestDescriptor;
use super::response::ApiResponse;
use super::transport::Transport;
use crate::auth::{Authenticator, Credential};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers,
            user_agent: format!("mgmt-api-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Authenticated HTTP client
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create an unauthenticated client
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Self::with_credential(config, Credential::None)
    }

    /// Create a client that authenticates every request with `credential`
    pub fn with_credential(config: HttpClientConfig, credential: Credential) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::new(credential),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the credential applied to requests
    pub fn credential(&self) -> &Credential {
        self.authenticator.credential()
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }

    /// Issue one request and collect its envelope
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        let full_url = self.build_url(&request.path);
        let url = url::Url::parse(&full_url)?;

        let mut req = self
            .client
            .request(request.method.into(), url)
            .timeout(self.config.timeout);

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add request-specific headers
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add query parameters
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        // Add body
        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        req = self.authenticator.apply(req);

        debug!("{} {}", request.method, full_url);
        let response = req.send().await.map_err(Error::Transport)?;
        let status = response.status().as_u16();
        let final_url = redact_url(response.url());
        let text = response.text().await.map_err(Error::Transport)?;

        let envelope = ApiResponse::from_text(status, final_url, text);
        log_response_size(&envelope);
        Ok(envelope)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        self.execute(request).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("credential", self.authenticator.credential())
            .finish_non_exhaustive()
    }
}

fn log_response_size(response: &ApiResponse) {
    #[allow(clippy::cast_precision_loss)]
    let size_mb = response.size_bytes() as f64 / 1024.0 / 1024.0;
    debug!(
        "Response {} from {}: {:.4} MB",
        response.status, response.url, size_mb
    );
}

/// Strip query and fragment so API keys never land in logs or errors
fn redact_url(url: &url::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}
