//! Authenticator implementation
//!
//! Applies a credential to outgoing requests.

use super::types::Credential;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    credential: Credential,
}

impl Authenticator {
    /// Create a new authenticator for the given credential
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::None => req,

            Credential::Basic { username, password } => req.basic_auth(username, Some(password)),

            Credential::ApiKey {
                key,
                header_name,
                query_param,
            } => {
                let mut req = req;
                if let Some(header) = header_name {
                    req = req.header(header.as_str(), key.as_str());
                }
                if let Some(param) = query_param {
                    req = req.query(&[(param.as_str(), key.as_str())]);
                }
                req
            }
        }
    }

    /// Get the credential
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
