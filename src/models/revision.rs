//! Revision history and revision comparison

use super::record::WorkflowStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one revision of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Record the revision belongs to
    pub osti_id: i64,
    /// Revision number, starting at 1
    pub revision: u32,
    /// When this revision became the active one
    pub date_valid_start: DateTime<Utc>,
    /// When this revision was superseded; absent for the current revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_valid_end: Option<DateTime<Utc>>,
    /// Workflow state of the revision
    pub workflow_status: WorkflowStatus,
}

/// A field value present on only one side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPointer {
    /// JSON pointer to the field
    pub pointer: String,
    /// The field's value on the side it exists
    pub value: String,
}

/// A field holding different values on the two compared revisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    /// JSON pointer to the field
    pub pointer: String,
    /// Value on the left revision
    pub left: String,
    /// Value on the right revision
    pub right: String,
}

/// Field-level comparison of two revisions of the same record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionComparison {
    /// Fields present only on the left revision
    pub left_only: Vec<DataPointer>,
    /// Fields present only on the right revision
    pub right_only: Vec<DataPointer>,
    /// Fields that differ between the two
    pub differences: Vec<Difference>,
}
