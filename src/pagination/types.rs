//! Pagination types
//!
//! A page is a JSON object that may carry an `items` array and a
//! `nextCursor` continuation token.

use crate::types::{JsonObject, JsonValue};

/// Field holding a page's items
pub const ITEMS_FIELD: &str = "items";

/// Field holding the continuation token
pub const NEXT_CURSOR_FIELD: &str = "nextCursor";

/// Query parameter carrying the cursor on continuation requests
pub const DEFAULT_CURSOR_PARAM: &str = "next";

/// Default upper bound on pages per aggregation run
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// One decoded page envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    body: JsonObject,
}

impl Page {
    /// Wrap a decoded body. Non-object bodies are handed back unchanged.
    pub fn from_value(value: JsonValue) -> Result<Self, JsonValue> {
        match value {
            JsonValue::Object(body) => Ok(Self { body }),
            other => Err(other),
        }
    }

    /// Whether the page takes part in pagination (has an `items` key)
    pub fn is_paginated(&self) -> bool {
        self.body.contains_key(ITEMS_FIELD)
    }

    /// Borrow the items, if present and an array
    pub fn items(&self) -> Option<&Vec<JsonValue>> {
        self.body.get(ITEMS_FIELD).and_then(JsonValue::as_array)
    }

    /// Remove and return the items array; `None` when missing or not an array
    pub fn take_items(&mut self) -> Option<Vec<JsonValue>> {
        match self.body.remove(ITEMS_FIELD) {
            Some(JsonValue::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Replace the items array
    pub fn set_items(&mut self, items: Vec<JsonValue>) {
        self.body
            .insert(ITEMS_FIELD.to_string(), JsonValue::Array(items));
    }

    /// Continuation token; absent and `null` both mean "no more pages".
    /// Non-string tokens are passed on in their JSON text form.
    pub fn next_cursor(&self) -> Option<String> {
        match self.body.get(NEXT_CURSOR_FIELD)? {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Unwrap back into a JSON value
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.body)
    }
}

/// Summary of one aggregation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationReport {
    /// Pages fetched, including the initial one
    pub pages: u32,
    /// Items in the merged collection
    pub items: usize,
    /// Whether the response was a paginated collection at all
    pub paginated: bool,
}
