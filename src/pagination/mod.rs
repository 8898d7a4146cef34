//! Pagination module
//!
//! Cursor pagination over `{"items": [...], "nextCursor": ...}` envelopes.
//!
//! # Overview
//!
//! Given the first response of a listing, the aggregator re-issues the same
//! request with `?next=<cursor>` until the server returns a null cursor,
//! concatenating every page's items in server order. Responses without an
//! `items` key are returned untouched. Any failed page aborts the whole run.

mod aggregator;
mod types;

pub use aggregator::PageAggregator;
pub use types::{
    AggregationReport, Page, DEFAULT_CURSOR_PARAM, DEFAULT_MAX_PAGES, ITEMS_FIELD,
    NEXT_CURSOR_FIELD,
};
