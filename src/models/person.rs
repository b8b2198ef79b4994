//! Persons associated with a record

use super::affiliation::Affiliation;
use serde::{Deserialize, Serialize};

/// Role a person plays on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    /// Author of the product
    #[serde(rename = "AUTHOR")]
    Author,
    /// Contributor (see [`PersonContribution`])
    #[serde(rename = "CONTRIBUTING")]
    Contributing,
    /// General contact
    #[serde(rename = "CONTACT")]
    Contact,
    /// Protected contact email
    #[serde(rename = "PROT_CE")]
    ProtectedEmail,
    /// Protected releasing official
    #[serde(rename = "PROT_RO")]
    ProtectedReleaser,
    /// Releasing official
    #[serde(rename = "RELEASE")]
    Release,
    /// Small-business official
    #[serde(rename = "SBIZ_BO")]
    BusinessOfficial,
    /// Small-business principal investigator
    #[serde(rename = "SBIZ_PI")]
    PrincipalInvestigator,
}

/// Nature of a contributing person's involvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonContribution {
    DataCollector,
    DataCurator,
    DataManager,
    Distributor,
    Editor,
    Producer,
    ProjectLeader,
    ProjectManager,
    ProjectMember,
    RelatedPerson,
    Researcher,
    RightsHolder,
    Supervisor,
    WorkPackageLeader,
    Other,
}

/// A person related to a record: authors, contributors, contacts, and
/// various administrative roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Role of this person
    #[serde(rename = "type")]
    pub kind: PersonType,

    /// Given name
    pub first_name: String,

    /// Middle name or initial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Family name
    pub last_name: String,

    /// ORCID identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,

    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Vec<String>>,

    /// Organizations this person is affiliated with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliations: Option<Vec<Affiliation>>,

    /// Kind of contribution, for Contributing persons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_type: Option<PersonContribution>,
}

impl Person {
    /// Create a person with the minimum required fields
    pub fn new(
        kind: PersonType,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            orcid: None,
            phone: None,
            email: None,
            affiliations: None,
            contributor_type: None,
        }
    }

    /// Add a contact email address
    pub fn add_email(&mut self, address: impl Into<String>) {
        self.email.get_or_insert_with(Vec::new).push(address.into());
    }

    /// Add an affiliation
    pub fn add_affiliation(&mut self, affiliation: Affiliation) {
        self.affiliations
            .get_or_insert_with(Vec::new)
            .push(affiliation);
    }
}
