//! Audit log events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One back-end processing event recorded against a record during release.
///
/// `status` is usually SUCCESS or FAIL; `kind` names the worker involved
/// (DOI, RELEASER, VALIDATOR, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    /// One or more messages relevant to this event
    pub messages: Vec<String>,
    /// Outcome of the operation
    pub status: String,
    /// The worker or process involved
    #[serde(rename = "type")]
    pub kind: String,
    /// When the event occurred
    pub audit_date: DateTime<Utc>,
}
