//! # elink2
//!
//! Rust client for the DOE OSTI E-Link 2.0 metadata submission API:
//! record submission and revision history, record search with transparent
//! cursor pagination, and media (file/URL) attachment.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use elink2::{Elink, ElinkConfig, QueryParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = Elink::new(
//!         ElinkConfig::builder()
//!             .base_url("https://review.osti.gov/elink2api/")
//!             .token(std::env::var("ELINK_TOKEN").unwrap())
//!             .build()?,
//!     )?;
//!
//!     // Fetch one record
//!     let record = api.get_single_record(2300069).await?;
//!     println!("{}", record.title);
//!
//!     // Search, walking pages lazily as records are consumed
//!     let mut query = api
//!         .query_records(&QueryParams::new().param("title", "Science report"))
//!         .await?;
//!     println!("{} matching rows", query.total_rows());
//!     while let Some(record) = query.next_record().await? {
//!         println!("{}", record.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Elink client                         │
//! │   records · revisions · media · query_records() → Query      │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                             │
//! ┌───────────────┴──────────────┐ ┌────────────┴───────────────┐
//! │          HttpClient          │ │           Query            │
//! │  bearer auth · JSON/multipart│ │  page buffer · next/prev/  │
//! │  → RawResponse snapshot      │ │  first links · lazy fetch  │
//! └───────────────┬──────────────┘ └────────────┬───────────────┘
//!                 │                             │
//! ┌───────────────┴─────────────────────────────┴───────────────┐
//! │              validate() → pass | typed fault                │
//! │        decode → typed models | schema fault                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every HTTP outcome is classified exactly once into a typed [`Error`];
//! there is no retry, caching, or concurrent prefetch anywhere — one
//! request is in flight at a time, driven by the caller.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and the fault taxonomy
pub mod error;

/// Client configuration
pub mod config;

/// HTTP transport and response capture
pub mod http;

/// Response classification
pub mod validate;

/// Response body decoding
pub mod decode;

/// Paged query cursor
pub mod query;

/// Domain models
pub mod models;

/// The service client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Elink, QueryParams, SubmissionState};
pub use config::{ElinkConfig, ElinkConfigBuilder, DEFAULT_TARGET};
pub use error::{Error, ErrorDetail, Result};
pub use http::RawResponse;
pub use models::*;
pub use query::Query;
pub use validate::validate;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
