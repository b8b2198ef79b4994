//! HTTP transport module
//!
//! Dispatches authenticated requests against the configured service target
//! and captures each exchange as an immutable [`RawResponse`] for the
//! validation and decode layers.

mod client;
mod response;

pub use client::HttpClient;
pub use response::{RawResponse, TOTAL_COUNT_HEADER};

pub(crate) use response::strip_api_path;

#[cfg(test)]
mod tests;
