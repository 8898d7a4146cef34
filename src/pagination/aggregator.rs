//! Cursor-pagination aggregator
//!
//! Follows `nextCursor` from page to page and merges every page's `items`
//! into one collection. The same loop serves every verb and credential
//! scheme: it only sees descriptors and envelopes.

use super::types::{AggregationReport, Page, DEFAULT_CURSOR_PARAM, DEFAULT_MAX_PAGES};
use crate::error::{Error, Result};
use crate::http::{ApiResponse, RequestDescriptor, Transport};
use crate::types::JsonValue;
use tracing::{debug, info, warn};

/// Merges a cursor-paginated result set into a single response
#[derive(Debug, Clone)]
pub struct PageAggregator {
    cursor_param: String,
    max_pages: Option<u32>,
}

impl Default for PageAggregator {
    fn default() -> Self {
        Self {
            cursor_param: DEFAULT_CURSOR_PARAM.to_string(),
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl PageAggregator {
    /// Aggregator with the `next` cursor parameter and the default page cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page cap; `None` follows cursors until the server stops
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the query parameter carrying the cursor
    #[must_use]
    pub fn with_cursor_param(mut self, param: impl Into<String>) -> Self {
        self.cursor_param = param.into();
        self
    }

    /// Current page cap
    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Query parameter carrying the cursor
    pub fn cursor_param(&self) -> &str {
        &self.cursor_param
    }

    /// Issue `request`, then aggregate all of its pages
    pub async fn fetch_all<T: Transport + ?Sized>(
        &self,
        transport: &T,
        request: &RequestDescriptor,
    ) -> Result<JsonValue> {
        let initial = transport.send(request).await?;
        self.aggregate(transport, request, initial).await
    }

    /// Aggregate starting from an already-issued response
    pub async fn aggregate<T: Transport + ?Sized>(
        &self,
        transport: &T,
        request: &RequestDescriptor,
        initial: ApiResponse,
    ) -> Result<JsonValue> {
        let (value, _) = self
            .aggregate_with_report(transport, request, initial)
            .await?;
        Ok(value)
    }

    /// Aggregate and also return how many pages and items were collected
    pub async fn aggregate_with_report<T: Transport + ?Sized>(
        &self,
        transport: &T,
        request: &RequestDescriptor,
        initial: ApiResponse,
    ) -> Result<(JsonValue, AggregationReport)> {
        if !request.is_success(initial.status) {
            return Err(Error::request_failed(
                initial.status,
                initial.url,
                initial.text,
                0,
            ));
        }

        let url = initial.url.clone();
        let mut page = match Page::from_value(initial.into_json(0)?) {
            Ok(page) if page.is_paginated() => page,
            Ok(page) => return Ok((page.into_value(), not_paginated())),
            Err(value) => return Ok((value, not_paginated())),
        };

        let mut items = page
            .take_items()
            .ok_or_else(|| Error::malformed_page(&url, "`items` is not an array", 0))?;
        let mut pages: u32 = 1;
        let mut cursor = page.next_cursor();

        while let Some(current) = cursor {
            if let Some(max) = self.max_pages {
                if pages >= max {
                    warn!(
                        "Stopping pagination of {}: {} pages fetched, cursor still present",
                        url, pages
                    );
                    return Err(Error::PageLimitExceeded {
                        url,
                        max_pages: max,
                    });
                }
            }

            let next_request = request.continuation(&self.cursor_param, &current);
            debug!("Fetching page {} of {} (cursor {})", pages + 1, url, current);

            let response = transport.send(&next_request).await?;
            if !next_request.is_success(response.status) {
                return Err(Error::request_failed(
                    response.status,
                    response.url,
                    response.text,
                    pages,
                ));
            }

            let page_url = response.url.clone();
            let mut next_page = Page::from_value(response.into_json(pages)?).map_err(|_| {
                Error::malformed_page(&page_url, "continuation page is not a JSON object", pages)
            })?;
            let page_items = next_page.take_items().ok_or_else(|| {
                Error::malformed_page(
                    &page_url,
                    "continuation page has no `items` array",
                    pages,
                )
            })?;

            items.extend(page_items);
            pages += 1;
            cursor = next_page.next_cursor();
            page = next_page;
        }

        let report = AggregationReport {
            pages,
            items: items.len(),
            paginated: true,
        };
        info!(
            "Collected {} items from {} page(s) of {}",
            report.items, report.pages, url
        );

        page.set_items(items);
        Ok((page.into_value(), report))
    }
}

fn not_paginated() -> AggregationReport {
    AggregationReport {
        pages: 1,
        items: 0,
        paginated: false,
    }
}
