//! Record metadata
//!
//! A [`Record`] describes a product (dataset, technical report, journal
//! article, ...) with its full bibliographic metadata. The service answers
//! submissions and queries with [`RecordResponse`] values, which add the
//! administrative read-only fields the service maintains.

use super::auditlog::AuditLog;
use super::geolocation::Geolocation;
use super::identifier::Identifier;
use super::media::MediaInfo;
use super::organization::Organization;
use super::person::Person;
use super::related_identifier::RelatedIdentifier;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Access or distribution limitation applied to a record.
///
/// Ranges from UNL (essentially unrestricted) to various limited-audience
/// notations. Several values are only meaningful on legacy records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum AccessLimitation {
    /// Applied Technology (legacy)
    AT,
    /// Unlimited
    UNL,
    /// Opennet
    OPN,
    /// Copyright
    CPY,
    /// Controlled Unclassified Information
    CUI,
    /// Official Use Only
    OUO,
    /// Export-controlled Information
    ECI,
    /// Security sensitive information
    SSI,
    /// Protected data
    PROT,
    /// Patented information
    PAT,
    /// Limited Rights Data
    LRD,
    /// Program-determined OUO
    PDOUO,
    /// Naval Nuclear Propulsion Information
    NNPI,
    /// International data
    INTL,
    /// International (legacy)
    ILLIM,
    /// International (legacy)
    ILUSO,
    /// Other/unknown (legacy)
    OTHR,
    /// Program Directed Sensitive (legacy)
    PDSH,
    /// Protected (legacy)
    PROP,
    /// Small Business Innovation Research
    SBIR,
    /// Small Business Technology Transfer
    STTR,
}

/// The type of product a record represents.
///
/// Each product type may require or disallow certain fields; journal
/// articles, for instance, require the journal-related fields most other
/// types disallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "AR")]
    AccomplishmentReport,
    #[serde(rename = "B")]
    Book,
    #[serde(rename = "CO")]
    Conference,
    #[serde(rename = "DA")]
    Dataset,
    #[serde(rename = "FS")]
    FactSheet,
    #[serde(rename = "JA")]
    JournalArticle,
    #[serde(rename = "MI")]
    Miscellaneous,
    #[serde(rename = "OT")]
    Other,
    #[serde(rename = "P")]
    Patent,
    #[serde(rename = "PD")]
    ProgramDocument,
    #[serde(rename = "SM")]
    SoftwareManual,
    #[serde(rename = "TD")]
    ThesisDissertation,
    #[serde(rename = "TR")]
    TechnicalReport,
    #[serde(rename = "PA")]
    PatentApplication,
}

/// Processing state of a record revision.
///
/// Submissions arrive as Saved, SubmitReleasing, or SubmitOsti; automated
/// workflow moves the latter through to Released. Failure states carry
/// explanations in the revision's audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowStatus {
    #[serde(rename = "SA")]
    Saved,
    #[serde(rename = "SR")]
    SubmitReleasing,
    #[serde(rename = "SO")]
    SubmitOsti,
    #[serde(rename = "R")]
    Released,
    #[serde(rename = "SV")]
    Validated,
    #[serde(rename = "SF")]
    FailedValidation,
    #[serde(rename = "SX")]
    FailedRelease,
}

/// The particular type of a journal publication; applicable only to
/// journal-article records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalType {
    #[serde(rename = "FT")]
    Manuscript,
    #[serde(rename = "AM")]
    DoeAcceptedManuscript,
    #[serde(rename = "AW")]
    DoeAcceptedManuscriptNoDoi,
    #[serde(rename = "PA")]
    PublishedArticle,
    #[serde(rename = "PM")]
    PublishedAcceptedManuscript,
}

/// PAMS publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PamsPublicationStatus {
    Published,
    Other,
    Submitted,
    UnderReview,
    Accepted,
    AwaitingPublication,
    Pending,
    Granted,
    Licensed,
    None,
}

fn default_country_code() -> String {
    "US".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["English".to_string()]
}

/// Bibliographic metadata of one record or product.
///
/// `product_type` and `title` are the minimum required fields; everything
/// else is supplied as applicable to the product type. Persons,
/// organizations, geolocations, and identifiers are one-to-many children
/// with models of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique record identifier; assigned by the service on first
    /// submission and supplied by the caller on later revisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osti_id: Option<i64>,

    /// Workflow state of this revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_status: Option<WorkflowStatus>,

    /// Access/distribution limitations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_limitations: Option<Vec<AccessLimitation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_limitation_other: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_codes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_award_date: Option<NaiveDate>,

    /// Country of publication; defaults to US
    #[serde(default = "default_country_code")]
    pub country_publication_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doe_funded_flag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doe_supported_flag: Option<bool>,

    /// Digital Object Identifier, once reserved or minted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi_infix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocations: Option<Vec<Geolocation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invention_disclosure_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_license_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_open_access_flag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_type: Option<JournalType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Languages of the product; defaults to English
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monographic_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_addressee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_declassified_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_declassified_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_document_categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_document_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opn_fieldoffice_acronym_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_information: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ouo_release_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_publication_status: Option<PamsPublicationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_publication_status_other: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_authors: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_editors: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_product_sub_type: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_patent_country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pams_transnational_patent_office: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patent_assignee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patent_file_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patent_priority_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdouo_exemption_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_reviewed_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_size: Option<String>,

    /// Type of product this record represents
    pub product_type: ProductType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type_other: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prot_flag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prot_data_other: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prot_release_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,

    /// Free-text publication date, for dates that are not calendar days
    /// ("Winter 2012")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_doc_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_to_osti_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub releasing_official_comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_period_end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_period_start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_types: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type_other: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbiz_flag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbiz_phase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbiz_previous_contract_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbiz_release_date: Option<NaiveDate>,

    /// Site responsible for the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ownership_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_unique_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_category_code: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_category_code_legacy: Option<Vec<String>>,

    /// Title of the product
    pub title: String,

    /// Abstract or description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<Identifier>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<Person>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<Organization>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_identifiers: Option<Vec<RelatedIdentifier>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

impl Record {
    /// Create a record with the minimum required fields, defaulting the
    /// rest
    pub fn new(product_type: ProductType, title: impl Into<String>) -> Self {
        Self {
            osti_id: None,
            workflow_status: None,
            access_limitations: None,
            access_limitation_other: None,
            announcement_codes: None,
            availability: None,
            edition: None,
            volume: None,
            conference_information: None,
            conference_type: None,
            contract_award_date: None,
            country_publication_code: default_country_code(),
            doe_funded_flag: None,
            doe_supported_flag: None,
            doi: None,
            doi_infix: None,
            edit_reason: None,
            geolocations: None,
            format_information: None,
            invention_disclosure_flag: None,
            issue: None,
            journal_license_url: None,
            journal_name: None,
            journal_open_access_flag: None,
            journal_type: None,
            keywords: None,
            languages: default_languages(),
            monographic_title: None,
            opn_addressee: None,
            opn_declassified_date: None,
            opn_declassified_status: None,
            opn_document_categories: None,
            opn_document_location: None,
            opn_fieldoffice_acronym_code: None,
            other_information: None,
            ouo_release_date: None,
            pams_publication_status: None,
            pams_publication_status_other: None,
            pams_authors: None,
            pams_editors: None,
            pams_product_sub_type: None,
            pams_patent_country_code: None,
            pams_transnational_patent_office: None,
            paper_flag: None,
            patent_assignee: None,
            patent_file_date: None,
            patent_priority_date: None,
            pdouo_exemption_number: None,
            peer_reviewed_flag: None,
            product_size: None,
            product_type,
            product_type_other: None,
            prot_flag: None,
            prot_data_other: None,
            prot_release_date: None,
            publication_date: None,
            publication_date_text: None,
            publisher_information: None,
            related_doc_info: None,
            released_to_osti_date: None,
            releasing_official_comments: None,
            report_period_end_date: None,
            report_period_start_date: None,
            report_types: None,
            report_type_other: None,
            sbiz_flag: None,
            sbiz_phase: None,
            sbiz_previous_contract_number: None,
            sbiz_release_date: None,
            site_ownership_code: None,
            site_unique_id: None,
            subject_category_code: None,
            subject_category_code_legacy: None,
            title: title.into(),
            description: None,
            identifiers: None,
            persons: None,
            organizations: None,
            related_identifiers: None,
            site_url: None,
        }
    }

    /// Add a person to this record
    pub fn add_person(&mut self, person: Person) {
        self.persons.get_or_insert_with(Vec::new).push(person);
    }

    /// Add an organization to this record
    pub fn add_organization(&mut self, organization: Organization) {
        self.organizations
            .get_or_insert_with(Vec::new)
            .push(organization);
    }

    /// Add an identifier to this record
    pub fn add_identifier(&mut self, identifier: Identifier) {
        self.identifiers
            .get_or_insert_with(Vec::new)
            .push(identifier);
    }

    /// Add a related identifier to this record
    pub fn add_related_identifier(&mut self, related: RelatedIdentifier) {
        self.related_identifiers
            .get_or_insert_with(Vec::new)
            .push(related);
    }

    /// Add a geolocation to this record
    pub fn add_geolocation(&mut self, geolocation: Geolocation) {
        self.geolocations
            .get_or_insert_with(Vec::new)
            .push(geolocation);
    }
}

/// A record as returned by the service, with the administrative read-only
/// fields the API sets during processing.
///
/// Dereferences to the underlying [`Record`] for the bibliographic fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    /// The submitted bibliographic metadata
    #[serde(flatten)]
    pub record: Record,

    /// Revision number of this version of the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,

    /// Account that first added the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<i64>,

    /// Account that made this revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_by: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_metadata_added: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_metadata_updated: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_submitted_to_osti_first: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_submitted_to_osti_last: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_released: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity_flag: Option<String>,

    /// Whether the record is hidden from public search
    #[serde(default)]
    pub hidden_flag: bool,

    /// Media sets attached to the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaInfo>>,

    /// Back-end processing history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_logs: Option<Vec<AuditLog>>,
}

impl std::ops::Deref for RecordResponse {
    type Target = Record;

    fn deref(&self) -> &Record {
        &self.record
    }
}

impl std::ops::DerefMut for RecordResponse {
    fn deref_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}
