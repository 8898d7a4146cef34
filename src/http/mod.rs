//! HTTP module
//!
//! Transport-neutral request/response types plus a reqwest-backed client.
//!
//! # Features
//!
//! - **Request descriptors**: verb, path, query, headers, body and expected statuses
//! - **Response envelope**: status, decoded JSON body and raw text
//! - **Transport trait**: the seam the pagination aggregator drives
//! - **Authentication**: every request carries the client's credential

mod client;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use request::RequestDescriptor;
pub use response::ApiResponse;
pub use transport::Transport;

#[cfg(test)]
mod tests;
