//! ROR identifier validation
//!
//! Research Organization Registry identifiers may arrive bare
//! (`05gvnxz63`), or as a full `https://ror.org/...` URL. Validation
//! accepts any of those shapes and extracts the bare identifier.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static ROR_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:https?://)?ror\.org/)?(0[a-hj-km-np-tv-z0-9]{6}[0-9]{2})$")
        .expect("ROR pattern is valid")
});

/// Match against valid ROR ID patterns, returning the bare ID value
pub fn find_ror_value(value: &str) -> Result<&str> {
    ROR_ID_PATTERN
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::schema("Invalid ROR ID value."))
}

/// Serde helper validating an optional `ror_id` field during decode
pub(crate) fn deserialize_opt_ror<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    if let Some(ref ror) = value {
        find_ror_value(ror).map_err(serde::de::Error::custom)?;
    }
    Ok(value)
}
