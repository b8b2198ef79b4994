//! Error types for the E-Link client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every failing HTTP exchange is classified exactly once (see
//! [`crate::validate::validate`]) into one of the fault variants below and
//! surfaced immediately; nothing is retried or suppressed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Structured detail attached to a `BadRequest` fault.
///
/// Mirrors one element of the service's `errors` array. All fields are
/// optional on the wire; whatever the server sends is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// HTTP status the server associated with this particular problem
    #[serde(default)]
    pub status: Option<u16>,

    /// Short label for the problem class
    #[serde(default)]
    pub title: Option<String>,

    /// Human-readable description of the problem
    #[serde(default)]
    pub detail: Option<String>,

    /// Field context, typically a JSON pointer under the `pointer` key
    #[serde(default)]
    pub source: HashMap<String, String>,

    /// Additional server-supplied metadata, if any
    #[serde(default)]
    pub meta: Option<HashMap<String, String>>,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pointer = self
            .source
            .get("pointer")
            .map_or("", std::string::String::as_str);
        write!(
            f,
            "message: {} source: {pointer}",
            self.detail.as_deref().unwrap_or("")
        )
    }
}

/// The main error type for the E-Link client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // HTTP faults, classified from response status codes
    // ============================================================================
    /// 400: the request body failed server-side validation
    #[error("{message}")]
    BadRequest {
        /// Comma-joined details, or the raw body when unstructured
        message: String,
        /// Per-field problems, in server order; empty when the body could
        /// not be decoded as an error envelope
        errors: Vec<ErrorDetail>,
    },

    /// 401: no usable account credentials accompanied the request
    #[error("{message}")]
    Unauthorized {
        /// Fault description
        message: String,
    },

    /// 403: the account is not permitted to access the resource
    #[error("{message}")]
    Forbidden {
        /// Fault description
        message: String,
    },

    /// 404: the requested record, revision, or media is not on file
    #[error("{message}")]
    NotFound {
        /// Fault description
        message: String,
    },

    /// 409: the URL or file is already associated with the record
    #[error("{message}")]
    Conflict {
        /// Fault description
        message: String,
    },

    /// 5xx family and anything otherwise unclassified
    #[error("{message}")]
    Server {
        /// Fault description
        message: String,
    },

    // ============================================================================
    // Decode and transport errors
    // ============================================================================
    /// A response body did not satisfy the expected model schema
    #[error("Schema validation failed: {message}")]
    Schema {
        /// What failed to decode, and why
        message: String,
    },

    /// Underlying transport failure (connect, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A link or base URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Local file access failed (media uploads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a bad-request fault with structured details
    pub fn bad_request(message: impl Into<String>, errors: Vec<ErrorDetail>) -> Self {
        Self::BadRequest {
            message: message.into(),
            errors,
        }
    }

    /// Create an unauthorized fault
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden fault
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a not-found fault
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict fault
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a server fault
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create a schema validation error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Status code associated with an HTTP fault, if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::Unauthorized { .. } => Some(401),
            Error::Forbidden { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::Conflict { .. } => Some(409),
            Error::Server { .. } => Some(500),
            _ => None,
        }
    }

    /// Structured per-field details; empty for everything except a
    /// `BadRequest` carrying a decoded error envelope
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Error::BadRequest { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Result type alias for the E-Link client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display_is_message() {
        let err = Error::not_found("Record is not on file.");
        assert_eq!(err.to_string(), "Record is not on file.");

        let err = Error::conflict("Conflict, URL or file is already associated with this record.");
        assert_eq!(
            err.to_string(),
            "Conflict, URL or file is already associated with this record."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::bad_request("x", vec![]).status_code(), Some(400));
        assert_eq!(Error::unauthorized("x").status_code(), Some(401));
        assert_eq!(Error::forbidden("x").status_code(), Some(403));
        assert_eq!(Error::not_found("x").status_code(), Some(404));
        assert_eq!(Error::conflict("x").status_code(), Some(409));
        assert_eq!(Error::server("x").status_code(), Some(500));
        assert_eq!(Error::schema("x").status_code(), None);
    }

    #[test]
    fn test_details_only_on_bad_request() {
        let detail = ErrorDetail {
            status: Some(400),
            detail: Some("title is required".to_string()),
            ..Default::default()
        };
        let err = Error::bad_request("title is required", vec![detail.clone()]);
        assert_eq!(err.details(), &[detail]);

        assert!(Error::server("oops").details().is_empty());
    }

    #[test]
    fn test_error_detail_display() {
        let mut source = HashMap::new();
        source.insert("pointer".to_string(), "/title".to_string());
        let detail = ErrorDetail {
            detail: Some("title is required".to_string()),
            source,
            ..Default::default()
        };
        assert_eq!(
            detail.to_string(),
            "message: title is required source: /title"
        );
    }
}
