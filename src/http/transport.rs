//! Transport abstraction
//!
//! The aggregator only needs "send this descriptor, give me the envelope".
//! Non-success statuses come back as ordinary responses; deciding what
//! counts as failure is left to the caller.

use super::request::RequestDescriptor;
use super::response::ApiResponse;
use crate::error::Result;
use async_trait::async_trait;

/// Something that can issue a request and return its response envelope
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Errors only on connection/TLS/decode failures.
    async fn send(&self, request: &RequestDescriptor) -> Result<ApiResponse>;
}

