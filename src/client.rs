//! E-Link service client
//!
//! [`Elink`] exposes the record, revision, and media operations of the
//! service. Every response passes through [`crate::validate::validate`]
//! before its body is decoded, so callers see either a typed model or a
//! classified fault, never a raw HTTP outcome.
//!
//! ```rust,ignore
//! use elink2::{Elink, ElinkConfig, QueryParams};
//!
//! let api = Elink::new(ElinkConfig::with_token("..."))?;
//! let record = api.get_single_record(2300069).await?;
//!
//! let mut query = api
//!     .query_records(&QueryParams::new().param("title", "Science report"))
//!     .await?;
//! while let Some(record) = query.next_record().await? {
//!     println!("{}", record.title);
//! }
//! ```

use crate::config::ElinkConfig;
use crate::decode::{decode_first, decode_one_or_many};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{MediaInfo, Record, RecordResponse, Revision, RevisionComparison};
use crate::query::Query;
use crate::validate::validate;
use bytes::Bytes;
use chrono::NaiveDate;
use std::path::Path;

/// 404 message for revision lookups by number
pub(crate) const REVISION_NOT_ON_FILE: &str = "Requested record version is not on file.";
/// 404 message for revision lookups by date
pub(crate) const REVISION_DATE_NOT_ON_FILE: &str =
    "Record version for specified date is not on file.";

/// Desired submission state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Save the metadata without releasing it
    #[default]
    Save,
    /// Submit the metadata for release processing
    Submit,
}

impl SubmissionState {
    fn as_str(self) -> &'static str {
        match self {
            SubmissionState::Save => "save",
            SubmissionState::Submit => "submit",
        }
    }
}

/// Query parameters for record searches.
///
/// Parameter names follow the service's record search API; values are
/// URL-encoded when the request is built.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// The accumulated parameters, in insertion order
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Client for the E-Link 2.0 service
#[derive(Debug, Clone)]
pub struct Elink {
    http: HttpClient,
}

impl Elink {
    /// Create a client from the given configuration
    pub fn new(config: ElinkConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Client with the given token against the default target
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(ElinkConfig::with_token(token))
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ElinkConfig {
        self.http.config()
    }

    // ========================================================================
    // Record operations
    // ========================================================================

    /// Obtain the metadata of a single record by its unique ID
    pub async fn get_single_record(&self, osti_id: i64) -> Result<RecordResponse> {
        let response = validate(self.http.get(&format!("records/{osti_id}")).await?)?;
        decode_first(response.text())
    }

    /// Query for records, returning a lazily-paginated [`Query`] cursor.
    ///
    /// See the service's record search documentation for the accepted
    /// parameters.
    pub async fn query_records(&self, params: &QueryParams) -> Result<Query> {
        let response = validate(
            self.http
                .get_with_query("records", params.as_slice())
                .await?,
        )?;
        Query::from_response(&response, self.http.clone())
    }

    /// Save a record with minimal validation to reserve its DOI.
    ///
    /// Requires at least title, site ownership code, and product type.
    pub async fn reserve_doi(&self, record: &Record) -> Result<RecordResponse> {
        let body = record_body(record)?;
        let response = validate(self.http.post_json("records/save", &body).await?)?;
        decode_first(response.text())
    }

    /// Create a new metadata record in the requested submission state
    pub async fn post_new_record(
        &self,
        record: &Record,
        state: SubmissionState,
    ) -> Result<RecordResponse> {
        let body = record_body(record)?;
        let response = validate(
            self.http
                .post_json(&format!("records/{}", state.as_str()), &body)
                .await?,
        )?;
        decode_first(response.text())
    }

    /// Update an existing record, creating a new revision
    pub async fn update_record(
        &self,
        osti_id: i64,
        record: &Record,
        state: SubmissionState,
    ) -> Result<RecordResponse> {
        let body = record_body(record)?;
        let response = validate(
            self.http
                .put_json(&format!("records/{osti_id}/{}", state.as_str()), &body)
                .await?,
        )?;
        decode_first(response.text())
    }

    // ========================================================================
    // Revision operations
    // ========================================================================

    /// Access a specific revision of a record by revision number
    pub async fn get_revision_by_number(
        &self,
        osti_id: i64,
        revision_number: u32,
    ) -> Result<RecordResponse> {
        let response = self
            .http
            .get(&format!("records/revision/{osti_id}/at/{revision_number}"))
            .await?;

        // 404 here means the revision, not the record, is missing
        if response.status() == 404 {
            return Err(Error::not_found(REVISION_NOT_ON_FILE));
        }

        let response = validate(response)?;
        decode_first(response.text())
    }

    /// Access the revision of a record that was active on the given date
    pub async fn get_revision_by_date(
        &self,
        osti_id: i64,
        date: NaiveDate,
    ) -> Result<RecordResponse> {
        let response = self
            .http
            .get(&format!("records/revision/{osti_id}/dated/{date}"))
            .await?;

        // 404 here includes dates before the record was created
        if response.status() == 404 {
            return Err(Error::not_found(REVISION_DATE_NOT_ON_FILE));
        }

        let response = validate(response)?;
        decode_first(response.text())
    }

    /// Summary information for every revision of a record
    pub async fn get_all_revisions(&self, osti_id: i64) -> Result<Vec<Revision>> {
        let response = validate(
            self.http
                .get(&format!("records/revision/{osti_id}"))
                .await?,
        )?;
        decode_one_or_many(response.text())
    }

    /// Field-by-field comparison of two revisions of the same record
    pub async fn compare_two_revisions(
        &self,
        osti_id: i64,
        left: u32,
        right: u32,
    ) -> Result<Vec<RevisionComparison>> {
        let response = validate(
            self.http
                .get(&format!("records/revision/{osti_id}/compare/{left}/{right}"))
                .await?,
        )?;
        decode_one_or_many(response.text())
    }

    // ========================================================================
    // Media operations
    // ========================================================================

    /// Information about the media sets associated with a record
    pub async fn get_media(&self, osti_id: i64) -> Result<Vec<MediaInfo>> {
        let response = validate(self.http.get(&format!("media/{osti_id}")).await?)?;
        decode_one_or_many(response.text())
    }

    /// Content stream of a particular media file by its unique ID
    pub async fn get_media_content(&self, media_file_id: i64) -> Result<Bytes> {
        let response = validate(self.http.get(&format!("media/file/{media_file_id}")).await?)?;
        Ok(response.into_content())
    }

    /// Attach the file at the given path to a record, optionally titled
    pub async fn post_media(
        &self,
        osti_id: i64,
        file_path: &Path,
        title: Option<&str>,
    ) -> Result<Vec<MediaInfo>> {
        let query = title_query(title);
        let response = validate(
            self.http
                .post_file(&format!("media/{osti_id}"), &query, file_path)
                .await?,
        )?;
        decode_one_or_many(response.text())
    }

    /// Replace a media set with a new basis file
    pub async fn put_media(
        &self,
        osti_id: i64,
        media_id: i64,
        file_path: &Path,
        title: Option<&str>,
    ) -> Result<Vec<MediaInfo>> {
        let query = title_query(title);
        let response = validate(
            self.http
                .put_file(&format!("media/{osti_id}/{media_id}"), &query, file_path)
                .await?,
        )?;
        decode_one_or_many(response.text())
    }

    /// Disassociate an individual media set from a record.
    ///
    /// Returns the number of rows removed, as reported by the service.
    pub async fn delete_single_media(
        &self,
        osti_id: i64,
        media_id: i64,
        reason: &str,
    ) -> Result<u64> {
        let query = vec![("reason".to_string(), reason.to_string())];
        let response = validate(
            self.http
                .delete(&format!("media/{osti_id}/{media_id}"), &query)
                .await?,
        )?;
        Ok(response.total_count())
    }

    /// Disassociate all media sets from a record.
    ///
    /// Returns the number of rows removed, as reported by the service.
    pub async fn delete_all_media(&self, osti_id: i64, reason: &str) -> Result<u64> {
        let query = vec![("reason".to_string(), reason.to_string())];
        let response = validate(self.http.delete(&format!("media/{osti_id}"), &query).await?)?;
        Ok(response.total_count())
    }
}

/// Serialize a record for submission, omitting absent fields
fn record_body(record: &Record) -> Result<serde_json::Value> {
    serde_json::to_value(record)
        .map_err(|e| Error::schema(format!("record could not be serialized: {e}")))
}

fn title_query(title: Option<&str>) -> Vec<(String, String)> {
    title
        .map(|t| vec![("title".to_string(), t.to_string())])
        .unwrap_or_default()
}
