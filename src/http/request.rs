//! Request descriptor
//!
//! Everything needed to (re)issue a request, independent of the transport.
//! The base URL and credential live in the transport; the descriptor holds
//! the per-request parts.

use crate::types::{JsonValue, Method, StringMap};

/// A transport-independent description of one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Resource path, relative to the transport's base URL
    pub path: String,
    /// Query parameters
    pub query: StringMap,
    /// Request headers
    pub headers: StringMap,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
    /// Status codes accepted as success; `None` uses the verb's defaults
    pub expected_status: Option<Vec<u16>>,
}

impl RequestDescriptor {
    /// Create a descriptor for the given verb and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge a set of query parameters
    #[must_use]
    pub fn params(mut self, params: StringMap) -> Self {
        self.query.extend(params);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace the verb's default success codes
    #[must_use]
    pub fn expect_status(mut self, statuses: &[u16]) -> Self {
        self.expected_status = Some(statuses.to_vec());
        self
    }

    /// Whether `status` counts as success for this request
    pub fn is_success(&self, status: u16) -> bool {
        match &self.expected_status {
            Some(expected) => expected.contains(&status),
            None => self.method.success_statuses().contains(&status),
        }
    }

    /// Continuation request: identical to this one, except the query is
    /// replaced by the single cursor parameter
    pub fn continuation(&self, cursor_param: &str, cursor: &str) -> Self {
        let mut next = self.clone();
        next.query.clear();
        next.query.insert(cursor_param.to_string(), cursor.to_string());
        next
    }
}
