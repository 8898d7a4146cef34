//! CLI module
//!
//! Command-line interface over the endpoint wrappers.
//!
//! # Commands
//!
//! - `users`, `user`, `organisations`, `create-api-key` - management credentials
//! - `audit-events`, `deprecate-password`, `delete-project` - API key
//! - `get` - any path, all pages merged

mod commands;
mod runner;

pub use commands::{parse_key_val, Cli, Commands};
pub use runner::Runner;
