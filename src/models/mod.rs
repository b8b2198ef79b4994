//! Domain models
//!
//! Typed representations of everything the service sends or accepts:
//! records and their child components, media sets, revision history, and
//! audit events. Closed string sets are Rust enums, so membership is
//! enforced during deserialization; a body that does not satisfy a model's
//! schema surfaces as [`crate::Error::Schema`].

mod affiliation;
mod auditlog;
mod geolocation;
mod identifier;
mod media;
mod organization;
mod person;
mod record;
mod related_identifier;
mod revision;
mod ror;

pub use affiliation::Affiliation;
pub use auditlog::AuditLog;
pub use geolocation::{Geolocation, GeolocationType, Point};
pub use identifier::{Identifier, IdentifierType};
pub use media::{MediaFile, MediaInfo, UrlType};
pub use organization::{Organization, OrganizationContribution, OrganizationType};
pub use person::{Person, PersonContribution, PersonType};
pub use record::{
    AccessLimitation, JournalType, PamsPublicationStatus, ProductType, Record, RecordResponse,
    WorkflowStatus,
};
pub use related_identifier::{RelatedIdentifier, RelatedIdentifierType, Relation};
pub use revision::{DataPointer, Difference, Revision, RevisionComparison};
pub use ror::find_ror_value;

#[cfg(test)]
mod tests;
