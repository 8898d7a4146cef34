//! Credential file loading
//!
//! The file is a JSON object holding `username`/`password`, `api_key`, or
//! both:
//!
//! ```json
//! { "username": "admin@example.com", "password": "...", "api_key": "..." }
//! ```
//!
//! [`load_credentials`] detects the scheme; the scheme-specific loaders
//! read only their own fields.

use super::types::Credential;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    api_key: Option<String>,
}

/// Load a credential from a JSON file, detecting the scheme from its fields.
///
/// A `username`/`password` pair wins over `api_key` when both are present.
pub fn load_credentials<P: AsRef<Path>>(path: P) -> Result<Credential> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let cred = parse_credentials(&content).map_err(|e| match e {
        Error::JsonParse(inner) => Error::CredentialFile {
            path: path.display().to_string(),
            message: inner.to_string(),
        },
        other => other,
    })?;
    debug!(
        "Loaded {} credentials from {}",
        cred.scheme(),
        path.display()
    );
    Ok(cred)
}

/// Load management UI (Basic auth) credentials from a JSON file
pub fn load_basic_credentials<P: AsRef<Path>>(path: P) -> Result<Credential> {
    basic_from(read_credential_file(path.as_ref())?)
}

/// Load a service-account API key from a JSON file, ignoring any
/// `username`/`password` pair stored alongside it
pub fn load_api_key_credentials<P: AsRef<Path>>(path: P) -> Result<Credential> {
    let path = path.as_ref();
    let file = read_credential_file(path)?;
    match file.api_key {
        Some(key) if !key.is_empty() => {
            debug!("Loaded api_key credentials from {}", path.display());
            Ok(Credential::api_key(key))
        }
        _ => Err(Error::missing_field("api_key")),
    }
}

/// Parse a credential from JSON text
pub fn parse_credentials(content: &str) -> Result<Credential> {
    let file: CredentialFile = serde_json::from_str(content)?;

    if file.username.is_some() || file.password.is_some() {
        return basic_from(file);
    }

    match file.api_key {
        Some(key) if !key.is_empty() => Ok(Credential::api_key(key)),
        _ => Err(Error::missing_field("username/password or api_key")),
    }
}

fn basic_from(file: CredentialFile) -> Result<Credential> {
    let username = file.username.ok_or_else(|| Error::missing_field("username"))?;
    let password = file.password.ok_or_else(|| Error::missing_field("password"))?;
    Ok(Credential::basic(username, password))
}

fn read_credential_file(path: &Path) -> Result<CredentialFile> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| Error::CredentialFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::CredentialFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
