//! Record identifiers

use serde::{Deserialize, Serialize};

/// The particular type of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierType {
    /// Authorization revision number
    #[serde(rename = "AUTH_REV")]
    AuthRevisionNumber,
    /// Funding award DOI
    #[serde(rename = "AWARD_DOI")]
    AwardDoi,
    /// DOE contract number
    #[serde(rename = "CN_DOE")]
    DoeContractNumber,
    /// Non-DOE contract number
    #[serde(rename = "CN_NONDOE")]
    ContractNumber,
    /// CODEN serial code
    #[serde(rename = "CODEN")]
    Coden,
    /// DOE docket number
    #[serde(rename = "DOE_DOCKET")]
    DoeDocket,
    /// Energy Data Base number (legacy)
    #[serde(rename = "EDB")]
    Edb,
    /// ETDE reference number
    #[serde(rename = "ETDE_RN")]
    EtdeReferenceNumber,
    /// INIS reference number
    #[serde(rename = "INIS_RN")]
    InisReferenceNumber,
    /// ISBN
    #[serde(rename = "ISBN")]
    Isbn,
    /// ISSN
    #[serde(rename = "ISSN")]
    Issn,
    /// Legacy identifier
    #[serde(rename = "LEGACY")]
    Legacy,
    /// Nuclear Science Abstracts number (legacy)
    #[serde(rename = "NSA")]
    Nsa,
    /// OpenNet accession number
    #[serde(rename = "OPN_ACC")]
    OpennetAccessionNumber,
    /// Other identifier
    #[serde(rename = "OTHER_ID")]
    OtherIdentifier,
    /// Patent number
    #[serde(rename = "PATENT")]
    Patent,
    /// R&D project identifier
    #[serde(rename = "PROJ_ID")]
    RdProjectIdentifier,
    /// Proposal number
    #[serde(rename = "PROP_REV")]
    ProposalNumber,
    /// Reference number
    #[serde(rename = "REF")]
    ReferenceNumber,
    /// Related transaction number
    #[serde(rename = "REL_TRN")]
    RelTrn,
    /// Report number
    #[serde(rename = "RN")]
    ReportNumber,
    /// Transaction number
    #[serde(rename = "TRN")]
    Trn,
    /// TVI number
    #[serde(rename = "TVI")]
    Tvi,
    /// User-assigned version number
    #[serde(rename = "USER_VER")]
    UserVersionNumber,
    /// Work authorization number
    #[serde(rename = "WORK_AUTH")]
    WorkAuthorizationNumber,
    /// Work proposal number
    #[serde(rename = "WORK_PROP")]
    WorkProposalNumber,
}

/// An identifying number associated with a record: DOE contract numbers,
/// report numbers, ISSN, ISBN, and the like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier type
    #[serde(rename = "type")]
    pub kind: IdentifierType,
    /// The identifier value itself
    pub value: String,
}

impl Identifier {
    /// Create an identifier of the given type
    pub fn new(kind: IdentifierType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
