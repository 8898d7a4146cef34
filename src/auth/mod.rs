//! Authentication module
//!
//! Supports: HTTP Basic (management UI credentials) and static API key.
//!
//! The `Authenticator` applies a `Credential` to every outgoing request,
//! so continuation requests are authenticated exactly like the first page.

mod authenticator;
mod credentials;
mod types;

pub use authenticator::Authenticator;
pub use credentials::{
    load_api_key_credentials, load_basic_credentials, load_credentials, parse_credentials,
};
pub use types::{Credential, DEFAULT_API_KEY_HEADER, DEFAULT_API_KEY_QUERY_PARAM};
