//! Identifiers relating a record to other works

use serde::{Deserialize, Serialize};

/// The type of a related identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelatedIdentifierType {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "URN")]
    Urn,
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "PURL")]
    Purl,
    #[serde(rename = "PMID")]
    PubmedId,
    #[serde(rename = "LSID")]
    Lsid,
    #[serde(rename = "LISSIN")]
    Lissn,
    #[serde(rename = "ISTC")]
    Istc,
    #[serde(rename = "ISSN")]
    Issn,
    #[serde(rename = "ISGN")]
    Isgn,
    #[serde(rename = "ISBN")]
    Isbn,
    #[serde(rename = "Handle")]
    Handle,
    #[serde(rename = "EISSN")]
    Eissn,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "DOI")]
    Doi,
    #[serde(rename = "bibcode")]
    Bibcode,
    #[serde(rename = "arXiv")]
    Arxiv,
    #[serde(rename = "ARK")]
    Ark,
    #[serde(rename = "CSTR")]
    Cstr,
    #[serde(rename = "RRID")]
    Rrid,
}

/// Relationship of a related identifier to its record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    BasedOnData,
    Cites,
    Collects,
    Compiles,
    Continues,
    Describes,
    Documents,
    Finances,
    HasComment,
    HasDerivation,
    HasExpression,
    HasFormat,
    HasManifestation,
    HasManuscript,
    HasMetadata,
    HasPart,
    HasPreprint,
    HasRelatedMaterial,
    HasReply,
    HasReview,
    HasVersion,
    IsBasedOn,
    IsBasisFor,
    IsCitedBy,
    IsCollectedBy,
    IsCommentOn,
    IsCompiledBy,
    IsContinuedBy,
    IsDataBasisFor,
    IsDerivedFrom,
    IsDescribedBy,
    IsDocumentedBy,
    IsExpressionOf,
    IsFinancedBy,
    IsIdenticalTo,
    IsManifestationOf,
    IsManuscriptOf,
    IsMetadataFor,
    IsNewVersionOf,
    IsObsoletedBy,
    IsOriginalFormOf,
    IsPartOf,
    IsPreprintOf,
    IsPreviousVersionOf,
    IsPublishedIn,
    IsReferencedBy,
    IsRelatedMaterial,
    IsReplyTo,
    IsRequiredBy,
    IsReviewedBy,
    IsReviewOf,
    IsSourceOf,
    IsSupplementedBy,
    IsSupplementTo,
    IsTranslationOf,
    IsVariantFormOf,
    IsVersionOf,
    Obsoletes,
    References,
    Requires,
    Reviews,
}

/// A pointer from this record to a related work, qualified by the nature
/// of the relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedIdentifier {
    /// Identifier type
    #[serde(rename = "type")]
    pub kind: RelatedIdentifierType,
    /// How the identified work relates to this record
    pub relation: Relation,
    /// The identifier value itself
    pub value: String,
}

impl RelatedIdentifier {
    /// Create a related identifier
    pub fn new(kind: RelatedIdentifierType, relation: Relation, value: impl Into<String>) -> Self {
        Self {
            kind,
            relation,
            value: value.into(),
        }
    }
}
