//! Media sets and media files
//!
//! A media set is one or more files or URLs of full text associated with a
//! record, along with content derived during media processing (OCR output,
//! cached URL contents, and so on). Most fields are administrative and
//! filled in by the service's processing workers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a media file lives on the service or off-site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlType {
    /// Hosted locally by the service
    #[serde(rename = "L")]
    LocallyHosted,
    /// An off-site URL reference
    #[serde(rename = "O")]
    OffsiteUrl,
}

/// Information about one media set attached to a record.
///
/// The `status` generally reflects processing state: `C` completed, `P`
/// in processing, `X` failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Unique ID of this media set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<i64>,

    /// Record revision this set belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,

    /// Record the set is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osti_id: Option<i64>,

    /// Processing status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Account that added the set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<i64>,

    /// Page count of the processed document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_page_count: Option<u32>,

    /// MIME type of the basis content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Title supplied at attachment time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_title: Option<String>,

    /// Location of the basis content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_location: Option<String>,

    /// Source of the basis content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_source: Option<String>,

    /// When the set was added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,

    /// When the set was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,

    /// Start of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_valid_start: Option<DateTime<Utc>>,

    /// End of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_valid_end: Option<DateTime<Utc>>,

    /// Individual files or URLs making up this set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<MediaFile>>,
}

/// A single full-text file or URL within a media set.
///
/// `status` is generally `DONE` once processing completes, `OCR` while
/// awaiting background OCR, or `FAIL` when processing failed; failures are
/// detailed in `processing_exceptions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Unique ID of this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file_id: Option<i64>,

    /// Media set this file belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<i64>,

    /// Record revision this file belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,

    /// File this one was derived from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_media_file_id: Option<i64>,

    /// Processing status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Details of any processing failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_exceptions: Option<String>,

    /// Kind of media content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Local file or off-site reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_type: Option<UrlType>,

    /// File pathname or off-site URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Account that added the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<i64>,

    /// Page count, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_page_count: Option<u32>,

    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,

    /// Playback duration, for audio/video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,

    /// Subtitle track count, for video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_tracks: Option<u32>,

    /// Video track count, for video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_tracks: Option<u32>,

    /// MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Source of the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_source: Option<String>,

    /// When the file was added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_file_added: Option<DateTime<Utc>>,

    /// When the file was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_file_updated: Option<DateTime<Utc>>,
}
