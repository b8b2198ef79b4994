//! Captured HTTP responses
//!
//! A [`RawResponse`] snapshots one HTTP exchange (status, headers, body)
//! so classification and decoding can happen after the transport call has
//! fully completed. Link-relation lookup follows the RFC 5988 `Link` header
//! convention used by the service for page navigation.

use crate::error::Result;
use bytes::Bytes;
use reqwest::header::HeaderMap;

/// Header carrying the total row count of a list response
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// One fully-received HTTP response.
///
/// Immutable; produced once per HTTP call and owned by the caller for the
/// duration of one validation/decode cycle.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    content: Bytes,
    text: String,
}

impl RawResponse {
    /// Drain a reqwest response into an owned snapshot
    pub(crate) async fn capture(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let content = response.bytes().await?;
        let text = String::from_utf8_lossy(&content).into_owned();

        Ok(Self {
            status,
            headers,
            content,
            text,
        })
    }

    /// Assemble a response from already-known parts
    pub fn from_parts(status: u16, headers: HeaderMap, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let text = String::from_utf8_lossy(&content).into_owned();
        Self {
            status,
            headers,
            content,
            text,
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers; lookup by name is case-insensitive
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value as UTF-8 text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body decoded as text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw body bytes
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Consume the response, keeping only the body bytes
    pub fn into_content(self) -> Bytes {
        self.content
    }

    /// Total row count reported by the service.
    ///
    /// Defaults to 0 when the header is absent or not numeric; a malformed
    /// count is never an error.
    pub fn total_count(&self) -> u64 {
        self.header(TOTAL_COUNT_HEADER)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// URL of the page-navigation link with the given relation, if present
    pub fn link(&self, rel: &str) -> Option<String> {
        self.header("link")
            .and_then(|header| parse_link_header(header, rel))
    }
}

/// Parse a `Link` header and extract the URL for the given rel
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="prev"
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                let rel_value = stripped.trim_matches('"').trim_matches('\'');
                rel = Some(rel_value);
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}

/// Strip the API root path from a page link, leaving the relative portion
/// that can be re-joined against the configured base URL.
///
/// The search starts after the scheme so an api path of `/` never matches
/// the slashes in `https://`. Links that do not carry the prefix are
/// returned unchanged.
pub(crate) fn strip_api_path(url: &str, api_path: &str) -> String {
    let search_from = url.find("://").map_or(0, |i| i + 3);
    match url[search_from..].find(api_path) {
        Some(pos) => url[search_from + pos + api_path.len()..].to_string(),
        None => url.to_string(),
    }
}
