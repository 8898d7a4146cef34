//! Response envelope
//!
//! A transport-neutral view of one HTTP response.

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Status, decoded body and raw text of one response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL (used in error messages)
    pub url: String,
    /// Decoded JSON body; `None` for empty or non-JSON bodies
    pub body: Option<JsonValue>,
    /// Raw body text
    pub text: String,
}

impl ApiResponse {
    /// Build an envelope from raw text, decoding JSON when possible
    pub fn from_text(status: u16, url: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };
        Self {
            status,
            url: url.into(),
            body,
            text,
        }
    }

    /// Build an envelope from a JSON value
    pub fn from_json(status: u16, url: impl Into<String>, body: JsonValue) -> Self {
        Self {
            status,
            url: url.into(),
            text: body.to_string(),
            body: Some(body),
        }
    }

    /// Body size in bytes
    pub fn size_bytes(&self) -> usize {
        self.text.len()
    }

    /// Consume the envelope, yielding the JSON body or `null` when empty.
    ///
    /// A non-empty body that is not JSON is a `MalformedPage` carrying the
    /// raw text.
    pub fn into_json(self, pages_fetched: u32) -> Result<JsonValue> {
        match self.body {
            Some(body) => Ok(body),
            None if self.text.trim().is_empty() => Ok(JsonValue::Null),
            None => Err(Error::malformed_page(
                self.url,
                format!("body is not JSON: {}", self.text),
                pages_fetched,
            )),
        }
    }
}
