//! Credential types
//!
//! A credential is read-only for the whole lifetime of a client; every
//! request (first page and continuations alike) carries it unchanged.

use std::fmt;

/// Default header carrying the API key
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Default query parameter repeating the API key
pub const DEFAULT_API_KEY_QUERY_PARAM: &str = "api_key";

/// Authentication credential
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credential {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication (management UI user)
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Static API key (service account)
    ApiKey {
        /// The API key value
        key: String,
        /// Header carrying the key, if any
        header_name: Option<String>,
        /// Query parameter repeating the key on every request, if any
        query_param: Option<String>,
    },
}

impl Credential {
    /// Basic credential from a username/password pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// API key sent as `X-API-Key` header and `api_key` query parameter
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            header_name: Some(DEFAULT_API_KEY_HEADER.to_string()),
            query_param: Some(DEFAULT_API_KEY_QUERY_PARAM.to_string()),
        }
    }

    /// Override the header name of an API-key credential
    #[must_use]
    pub fn with_header(self, name: Option<String>) -> Self {
        match self {
            Self::ApiKey {
                key, query_param, ..
            } => Self::ApiKey {
                key,
                header_name: name,
                query_param,
            },
            other => other,
        }
    }

    /// Override the query parameter of an API-key credential
    #[must_use]
    pub fn with_query_param(self, param: Option<String>) -> Self {
        match self {
            Self::ApiKey {
                key, header_name, ..
            } => Self::ApiKey {
                key,
                header_name,
                query_param: param,
            },
            other => other,
        }
    }

    /// Short scheme name, safe to log
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::ApiKey { .. } => "api_key",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::ApiKey {
                header_name,
                query_param,
                ..
            } => f
                .debug_struct("ApiKey")
                .field("key", &"<redacted>")
                .field("header_name", header_name)
                .field("query_param", query_param)
                .finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_credential_default() {
        assert_eq!(Credential::default(), Credential::None);
    }

    #[test]
    fn test_api_key_defaults() {
        let cred = Credential::api_key("k");
        assert_eq!(
            cred,
            Credential::ApiKey {
                key: "k".to_string(),
                header_name: Some("X-API-Key".to_string()),
                query_param: Some("api_key".to_string()),
            }
        );
        assert_eq!(cred.scheme(), "api_key");
    }

    #[test]
    fn test_api_key_overrides() {
        let cred = Credential::api_key("k")
            .with_header(Some("X-Token".to_string()))
            .with_query_param(None);
        assert_eq!(
            cred,
            Credential::ApiKey {
                key: "k".to_string(),
                header_name: Some("X-Token".to_string()),
                query_param: None,
            }
        );

        let basic = Credential::basic("u", "p").with_header(Some("X".to_string()));
        assert_eq!(basic, Credential::basic("u", "p"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let basic = format!("{:?}", Credential::basic("alice", "hunter2"));
        assert!(basic.contains("alice"));
        assert!(!basic.contains("hunter2"));

        let key = format!("{:?}", Credential::api_key("sk_live_123"));
        assert!(!key.contains("sk_live_123"));
        assert!(key.contains("X-API-Key"));
    }
}
