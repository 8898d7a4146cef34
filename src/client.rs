//! API client facade
//!
//! Pairs a transport with a page aggregator. Every call goes through the
//! aggregator, so listings come back fully merged and single resources
//! come back as-is.

use crate::auth::Credential;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor, Transport};
use crate::pagination::{AggregationReport, PageAggregator};
use crate::types::JsonValue;

/// Authenticated client over any transport
#[derive(Debug)]
pub struct ApiClient<T = HttpClient> {
    transport: T,
    aggregator: PageAggregator,
}

impl ApiClient<HttpClient> {
    /// Build an HTTP-backed client from config and a credential.
    ///
    /// API-key credentials take their header and query parameter names
    /// from the config.
    pub fn from_config(config: &ClientConfig, credential: Credential) -> Result<Self> {
        let credential = match credential {
            Credential::ApiKey { key, .. } => Credential::api_key(key)
                .with_header(config.api_key_header.clone())
                .with_query_param(config.api_key_query_param.clone()),
            other => other,
        };
        let transport = HttpClient::with_credential(config.http_config()?, credential)?;
        Ok(Self::new(transport, config.aggregator()))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client from its parts
    pub fn new(transport: T, aggregator: PageAggregator) -> Self {
        Self {
            transport,
            aggregator,
        }
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the aggregator
    pub fn aggregator(&self) -> &PageAggregator {
        &self.aggregator
    }

    /// Issue a request and merge all of its pages
    pub async fn fetch_all(&self, request: &RequestDescriptor) -> Result<JsonValue> {
        self.aggregator.fetch_all(&self.transport, request).await
    }

    /// Like [`fetch_all`](Self::fetch_all), also reporting pages and items
    pub async fn fetch_all_with_report(
        &self,
        request: &RequestDescriptor,
    ) -> Result<(JsonValue, AggregationReport)> {
        let initial = self.transport.send(request).await?;
        self.aggregator
            .aggregate_with_report(&self.transport, request, initial)
            .await
    }
}
