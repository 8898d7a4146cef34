//! # Management API Client
//!
//! Authenticated, cursor-paginated access to a vendor management REST API.
//!
//! ## Features
//!
//! - **Two Auth Schemes**: HTTP Basic (management UI user) and static API key
//! - **Transparent Pagination**: follows `nextCursor` and merges every page's `items`
//! - **All-or-nothing**: a failed page aborts the run, no partial collections
//! - **Bounded**: a configurable page cap guards against endless cursor chains
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mgmt_api_client::{auth::load_basic_credentials, ClientConfig, ManagementApi, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new("https://api.example.com");
//!     let credential = load_basic_credentials("secrets.json")?;
//!     let api = ManagementApi::from_config(&config, credential)?;
//!
//!     // All pages, merged into one `items` array
//!     let users = api.list_users().await?;
//!     println!("{}", users["items"].as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │       Endpoints: ManagementApi (Basic) │ ApiKeyApi        │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────────────────────────────────────────────────┐
//! │   ApiClient = Transport + PageAggregator                  │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬──────────────────┬─────────────────────────┐
//! │     Auth     │       HTTP       │       Pagination        │
//! ├──────────────┼──────────────────┼─────────────────────────┤
//! │ Basic        │ RequestDescriptor│ Page (items/nextCursor) │
//! │ API Key      │ ApiResponse      │ cursor loop, page cap   │
//! │ secrets.json │ HttpClient       │ merge in server order   │
//! └──────────────┴──────────────────┴─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials and request authentication
pub mod auth;

/// Request descriptors, response envelopes and the HTTP transport
pub mod http;

/// Cursor pagination aggregation
pub mod pagination;

/// Client configuration
pub mod config;

/// Transport + aggregator facade
pub mod client;

/// Per-resource endpoint wrappers
pub mod endpoints;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credential;
pub use client::ApiClient;
pub use config::{ClientConfig, LoggingConfig};
pub use endpoints::{ApiKeyApi, ManagementApi};
pub use error::{Error, Result};
pub use http::{ApiResponse, HttpClient, RequestDescriptor, Transport};
pub use pagination::PageAggregator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
