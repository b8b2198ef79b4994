//! Tests for the domain models

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Record Tests
// ============================================================================

#[test]
fn test_record_decode_minimal() {
    let record: Record = serde_json::from_value(json!({
        "title": "Electron microscope data for photons",
        "product_type": "TR"
    }))
    .unwrap();

    assert_eq!(record.title, "Electron microscope data for photons");
    assert_eq!(record.product_type, ProductType::TechnicalReport);
    // server omissions pick up the documented defaults
    assert_eq!(record.country_publication_code, "US");
    assert_eq!(record.languages, vec!["English".to_string()]);
    assert!(record.doi.is_none());
}

#[test]
fn test_record_unknown_product_type_rejected() {
    let result: Result<Record, _> = serde_json::from_value(json!({
        "title": "A title",
        "product_type": "ZZ"
    }));
    assert!(result.is_err());
}

#[test]
fn test_record_unknown_access_limitation_rejected() {
    let result: Result<Record, _> = serde_json::from_value(json!({
        "title": "A title",
        "product_type": "TR",
        "access_limitations": ["UNL", "NOT_A_LIMITATION"]
    }));
    assert!(result.is_err());
}

#[test]
fn test_record_serialize_skips_absent_fields() {
    let record = Record::new(ProductType::Dataset, "Sample document title");
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["title"], "Sample document title");
    assert_eq!(object["product_type"], "DA");
    assert_eq!(object["country_publication_code"], "US");
    assert!(!object.contains_key("doi"));
    assert!(!object.contains_key("osti_id"));
    assert!(!object.contains_key("persons"));
}

#[test]
fn test_record_add_children() {
    let mut record = Record::new(ProductType::TechnicalReport, "Sample document title");

    record.add_person(Person::new(PersonType::Author, "Ada", "Lovelace"));
    record.add_organization(Organization::new(OrganizationType::Sponsor, "DOE"));
    record.add_identifier(Identifier::new(IdentifierType::DoeContractNumber, "SC0001234"));
    record.add_related_identifier(RelatedIdentifier::new(
        RelatedIdentifierType::Doi,
        Relation::IsPartOf,
        "10.5555/12345678",
    ));

    assert_eq!(record.persons.as_ref().unwrap().len(), 1);
    assert_eq!(record.organizations.as_ref().unwrap().len(), 1);
    assert_eq!(record.identifiers.as_ref().unwrap().len(), 1);
    assert_eq!(record.related_identifiers.as_ref().unwrap().len(), 1);
}

#[test]
fn test_record_response_flattens_record_fields() {
    let response: RecordResponse = serde_json::from_value(json!({
        "osti_id": 2300069,
        "title": "Sample document title",
        "product_type": "TR",
        "revision": 3,
        "workflow_status": "SA",
        "date_metadata_added": "2023-03-03T12:00:00Z",
        "hidden_flag": false
    }))
    .unwrap();

    // deref reaches the bibliographic fields
    assert_eq!(response.title, "Sample document title");
    assert_eq!(response.osti_id, Some(2_300_069));
    assert_eq!(response.revision, Some(3));
    assert_eq!(response.record.workflow_status, Some(WorkflowStatus::Saved));
    assert!(!response.hidden_flag);
}

// ============================================================================
// Person / Organization Tests
// ============================================================================

#[test]
fn test_person_wire_format() {
    let person: Person = serde_json::from_value(json!({
        "type": "AUTHOR",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "contributor_type": "Researcher"
    }))
    .unwrap();

    assert_eq!(person.kind, PersonType::Author);
    assert_eq!(person.contributor_type, Some(PersonContribution::Researcher));

    let value = serde_json::to_value(&person).unwrap();
    assert_eq!(value["type"], "AUTHOR");
    assert!(value.get("orcid").is_none());
}

#[test]
fn test_person_unknown_type_rejected() {
    let result: Result<Person, _> = serde_json::from_value(json!({
        "type": "SINGER",
        "first_name": "Ada",
        "last_name": "Lovelace"
    }));
    assert!(result.is_err());
}

#[test]
fn test_person_add_helpers() {
    let mut person = Person::new(PersonType::Contact, "Grace", "Hopper");
    person.add_email("grace@example.gov");
    person.add_affiliation(Affiliation::named("Navy"));

    assert_eq!(person.email.as_ref().unwrap().len(), 1);
    assert_eq!(
        person.affiliations.as_ref().unwrap()[0].name.as_deref(),
        Some("Navy")
    );
}

#[test]
fn test_organization_decode_with_identifiers() {
    let organization: Organization = serde_json::from_value(json!({
        "type": "SPONSOR",
        "name": "Office of Science",
        "identifiers": [{"type": "CN_DOE", "value": "SC0001234"}]
    }))
    .unwrap();

    assert_eq!(organization.kind, OrganizationType::Sponsor);
    assert_eq!(
        organization.identifiers.as_ref().unwrap()[0].kind,
        IdentifierType::DoeContractNumber
    );
}

#[test]
fn test_organization_invalid_ror_rejected_on_decode() {
    let result: Result<Organization, _> = serde_json::from_value(json!({
        "type": "AUTHOR",
        "name": "Someplace",
        "ror_id": "not-a-ror"
    }));
    assert!(result.is_err());
}

#[test]
fn test_affiliation_ror_accepted_and_validated() {
    let affiliation: Affiliation = serde_json::from_value(json!({
        "name": "Lawrence Livermore National Laboratory",
        "ror_id": "https://ror.org/041nk4h53"
    }))
    .unwrap();
    assert_eq!(affiliation.ror_id.as_deref(), Some("https://ror.org/041nk4h53"));

    let built = Affiliation::named("LLNL").with_ror_id("041nk4h53").unwrap();
    assert_eq!(built.ror_id.as_deref(), Some("041nk4h53"));

    assert!(Affiliation::named("LLNL").with_ror_id("bogus").is_err());
}

// ============================================================================
// Geolocation Tests
// ============================================================================

#[test]
fn test_point_range_validation() {
    assert!(Point::new(45.0, -120.0).is_ok());
    assert!(Point::new(90.0, 180.0).is_ok());
    assert!(Point::new(90.5, 0.0).is_err());
    assert!(Point::new(0.0, -180.5).is_err());
}

#[test]
fn test_point_decode_enforces_ranges() {
    let ok: Result<Point, _> =
        serde_json::from_value(json!({"latitude": 45.0, "longitude": -120.0}));
    assert!(ok.is_ok());

    let bad: Result<Point, _> =
        serde_json::from_value(json!({"latitude": 91.0, "longitude": 0.0}));
    assert!(bad.is_err());
}

#[test]
fn test_geolocation_decode() {
    let geolocation: Geolocation = serde_json::from_value(json!({
        "type": "BOX",
        "label": "survey area",
        "points": [
            {"latitude": 46.0, "longitude": -121.0},
            {"latitude": 45.0, "longitude": -120.0}
        ]
    }))
    .unwrap();

    assert_eq!(geolocation.kind, Some(GeolocationType::Box));
    assert_eq!(geolocation.points.len(), 2);
    assert_eq!(geolocation.points[0].latitude(), 46.0);
}

// ============================================================================
// Revision / Media Tests
// ============================================================================

#[test]
fn test_revision_decode() {
    let revision: Revision = serde_json::from_value(json!({
        "osti_id": 2300069,
        "revision": 2,
        "date_valid_start": "2023-03-03T00:00:00Z",
        "workflow_status": "R"
    }))
    .unwrap();

    assert_eq!(revision.revision, 2);
    assert_eq!(revision.workflow_status, WorkflowStatus::Released);
    assert!(revision.date_valid_end.is_none());
}

#[test]
fn test_revision_comparison_decode() {
    let comparison: RevisionComparison = serde_json::from_value(json!({
        "left_only": [{"pointer": "/doi", "value": "10.5555/1"}],
        "right_only": [],
        "differences": [{"pointer": "/title", "left": "Old", "right": "New"}]
    }))
    .unwrap();

    assert_eq!(comparison.left_only.len(), 1);
    assert_eq!(comparison.differences[0].right, "New");
}

#[test]
fn test_media_file_url_type_wire_values() {
    let file: MediaFile = serde_json::from_value(json!({
        "media_file_id": 1900082,
        "url_type": "L",
        "url": "/data/file.pdf",
        "status": "DONE"
    }))
    .unwrap();

    assert_eq!(file.url_type, Some(UrlType::LocallyHosted));

    let bad: Result<MediaFile, _> = serde_json::from_value(json!({"url_type": "Z"}));
    assert!(bad.is_err());
}

#[test]
fn test_media_info_decode() {
    let info: MediaInfo = serde_json::from_value(json!({
        "media_id": 1900082,
        "osti_id": 2300069,
        "status": "C",
        "files": [{"media_file_id": 1, "url_type": "O", "url": "https://example.com/doc"}]
    }))
    .unwrap();

    assert_eq!(info.media_id, Some(1_900_082));
    assert_eq!(info.files.as_ref().unwrap().len(), 1);
}

#[test]
fn test_audit_log_decode() {
    let log: AuditLog = serde_json::from_value(json!({
        "messages": ["DOI minted"],
        "status": "SUCCESS",
        "type": "DOI",
        "audit_date": "2023-03-04T09:30:00Z"
    }))
    .unwrap();

    assert_eq!(log.kind, "DOI");
    assert_eq!(log.messages, vec!["DOI minted".to_string()]);
}
