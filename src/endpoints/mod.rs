//! Endpoint wrappers
//!
//! One thin function per REST resource, split by credential scheme:
//!
//! - [`ManagementApi`]: management UI user over HTTP Basic
//! - [`ApiKeyApi`]: service account over a static API key

mod api_key;
mod management;

pub use api_key::ApiKeyApi;
pub use management::ManagementApi;

use crate::error::{Error, Result};

/// Join a prefix and a resource path
fn join(prefix: &str, resource: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let resource = resource.trim_start_matches('/');
    if prefix.is_empty() {
        resource.to_string()
    } else {
        format!("{prefix}/{resource}")
    }
}

/// Validate an identifier that is spliced into a path
fn path_id<'a>(field: &str, id: &'a str) -> Result<&'a str> {
    if id.is_empty() || id.contains('/') || id.contains('?') || id.contains('#') {
        return Err(Error::invalid_value(field, format!("invalid identifier '{id}'")));
    }
    Ok(id)
}

/// Any 2xx status
fn any_2xx() -> Vec<u16> {
    (200..300).collect()
}
