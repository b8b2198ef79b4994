//! Organizations associated with a record

use super::identifier::Identifier;
use super::ror::deserialize_opt_ror;
use serde::{Deserialize, Serialize};

/// Role an organization plays on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Authoring organization
    #[serde(rename = "AUTHOR")]
    Author,
    /// Contributor (see [`OrganizationContribution`])
    #[serde(rename = "CONTRIBUTING")]
    Contributing,
    /// Research organization
    #[serde(rename = "RESEARCHING")]
    Researching,
    /// Sponsoring organization
    #[serde(rename = "SPONSOR")]
    Sponsor,
    /// PAMS thesis/dissertation institution
    #[serde(rename = "PAMS_TD_INST")]
    PamsTdInstitution,
}

/// Nature of a contributing organization's involvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganizationContribution {
    DataCollector,
    DataCurator,
    DataManager,
    Distributor,
    Editor,
    HostingInstitution,
    Producer,
    ProjectLeader,
    ProjectManager,
    ProjectMember,
    RegistrationAgency,
    RegistrationAuthority,
    Researcher,
    ResearchGroup,
    RightsHolder,
    Sponsor,
    Supervisor,
    WorkPackageLeader,
    Other,
}

/// An organization related to a record: authors, sponsors, research
/// institutions, and contributors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Role of this organization
    #[serde(rename = "type")]
    pub kind: OrganizationType,

    /// Organization name
    pub name: String,

    /// Kind of contribution, for Contributing organizations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_type: Option<OrganizationContribution>,

    /// Identifiers such as contract or award numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<Identifier>>,

    /// Research Organization Registry identifier
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_ror",
        default
    )]
    pub ror_id: Option<String>,
}

impl Organization {
    /// Create an organization with the minimum required fields
    pub fn new(kind: OrganizationType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            contributor_type: None,
            identifiers: None,
            ror_id: None,
        }
    }

    /// Add an identifier to this organization
    pub fn add(&mut self, identifier: Identifier) {
        self.identifiers
            .get_or_insert_with(Vec::new)
            .push(identifier);
    }
}
