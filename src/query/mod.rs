//! Paged query results
//!
//! A [`Query`] wraps one page of a record search and walks the server's
//! cursor pagination lazily: records are handed out one at a time in server
//! delivery order, and when the current page runs dry the cursor follows
//! the page's `next` link transparently, validating every fetch.
//!
//! Navigation is single-pass and consuming going forward; [`Query::previous`]
//! and [`Query::reset`] re-request earlier pages through the links the
//! service supplied. Page state is replaced wholesale on every successful
//! fetch, so a failed fetch never leaves a partially-loaded page behind.
//!
//! ```rust,ignore
//! let mut query = api.query_records(&QueryParams::new().param("title", "fusion")).await?;
//!
//! while let Some(record) = query.next_record().await? {
//!     println!("{}", record.title);
//! }
//! ```

use crate::decode::decode_one_or_many;
use crate::error::Result;
use crate::http::{strip_api_path, HttpClient, RawResponse};
use crate::models::RecordResponse;
use crate::validate::validate;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::debug;

/// One server-delivered batch of results plus its navigation links.
///
/// Owned exclusively by the [`Query`] that decoded it and replaced as a
/// whole on every page transition.
#[derive(Debug)]
struct Page {
    total_rows: u64,
    records: VecDeque<RecordResponse>,
    next_link: Option<String>,
    prev_link: Option<String>,
    first_link: Option<String>,
}

impl Page {
    /// Decode a validated list response into a page.
    ///
    /// Links are stored relative to the API root so they can be re-joined
    /// against the configured base URL on a later fetch. A body holding a
    /// single object is a one-element page.
    fn decode(response: &RawResponse, api_path: &str) -> Result<Self> {
        let link = |rel: &str| {
            response
                .link(rel)
                .map(|url| strip_api_path(&url, api_path))
        };

        Ok(Self {
            total_rows: response.total_count(),
            records: decode_one_or_many(response.text())?.into(),
            next_link: link("next"),
            prev_link: link("prev"),
            first_link: link("first"),
        })
    }
}

/// Lazily-advancing cursor over the records matching a query.
///
/// Created by [`crate::Elink::query_records`]. Methods take `&mut self`, so
/// a cursor cannot be advanced from two places at once.
#[derive(Debug)]
pub struct Query {
    page: Page,
    http: HttpClient,
}

impl Query {
    /// Build a cursor from an already-validated list response
    pub(crate) fn from_response(response: &RawResponse, http: HttpClient) -> Result<Self> {
        let page = Page::decode(response, http.config().api_path())?;
        Ok(Self { page, http })
    }

    /// Total number of rows matching the query, as reported by the most
    /// recently loaded page. 0 when the service did not say.
    pub fn total_rows(&self) -> u64 {
        self.page.total_rows
    }

    /// Whether a following page exists. No I/O.
    pub fn has_next(&self) -> bool {
        self.page.next_link.is_some()
    }

    /// Whether a preceding page exists. No I/O.
    pub fn has_previous(&self) -> bool {
        self.page.prev_link.is_some()
    }

    /// Produce the next record, fetching further pages as needed.
    ///
    /// Records come back in server delivery order. `Ok(None)` means the
    /// sequence is exhausted: the page buffer is empty and no `next` link
    /// remains. An empty page that still carries a `next` link is skipped
    /// over silently.
    pub async fn next_record(&mut self) -> Result<Option<RecordResponse>> {
        loop {
            if let Some(record) = self.page.records.pop_front() {
                return Ok(Some(record));
            }

            let Some(link) = self.page.next_link.clone() else {
                return Ok(None);
            };
            self.page = self.fetch(&link).await?;
        }
    }

    /// Step back to the preceding page.
    ///
    /// Returns `Ok(true)` when the page state was replaced, `Ok(false)`
    /// when no `prev` link exists (no I/O is performed in that case).
    pub async fn previous(&mut self) -> Result<bool> {
        let Some(link) = self.page.prev_link.clone() else {
            return Ok(false);
        };
        self.page = self.fetch(&link).await?;
        Ok(true)
    }

    /// Restart from the first page of results.
    ///
    /// Returns `Ok(true)` when the page state was replaced, `Ok(false)`
    /// when the current page carries no `first` link (no I/O).
    pub async fn reset(&mut self) -> Result<bool> {
        let Some(link) = self.page.first_link.clone() else {
            return Ok(false);
        };
        self.page = self.fetch(&link).await?;
        Ok(true)
    }

    /// Drain the rest of the sequence into a vector
    pub async fn collect_remaining(&mut self) -> Result<Vec<RecordResponse>> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Adapt the cursor into a `Stream` of records
    pub fn into_stream(self) -> impl Stream<Item = Result<RecordResponse>> {
        stream::try_unfold(self, |mut query| async move {
            Ok(query
                .next_record()
                .await?
                .map(|record| (record, query)))
        })
    }

    /// GET, validate, and decode one page. The current page is only
    /// replaced by the caller after this succeeds.
    async fn fetch(&self, link: &str) -> Result<Page> {
        debug!("fetching page {link}");
        let response = validate(self.http.get(link).await?)?;
        Page::decode(&response, self.http.config().api_path())
    }
}
