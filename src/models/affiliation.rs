//! Person affiliations

use super::ror::{deserialize_opt_ror, find_ror_value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An organization a person is affiliated with.
///
/// May carry one or both of `name` and `ror_id`; the ROR ID is validated
/// against the ror.org format on construction and decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Research Organization Registry identifier
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_ror",
        default
    )]
    pub ror_id: Option<String>,
}

impl Affiliation {
    /// Affiliation with a name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ror_id: None,
        }
    }

    /// Attach a ROR ID, validating its format
    pub fn with_ror_id(mut self, ror_id: impl Into<String>) -> Result<Self> {
        let ror_id = ror_id.into();
        find_ror_value(&ror_id)?;
        self.ror_id = Some(ror_id);
        Ok(self)
    }
}
