//! Response classification
//!
//! The single decision point turning an HTTP outcome into either a
//! passed-through response or a typed fault. Callers decode the body only
//! after a response has passed through [`validate`].
//!
//! Bad-request bodies are decoded strictly against the service's error
//! envelope; when that decode fails the raw body text becomes the fault
//! message as-is. No other status consults the body beyond plain text.

use crate::error::{Error, ErrorDetail, Result};
use crate::http::RawResponse;
use serde::Deserialize;
use tracing::warn;

/// Generic fault messages per status class
pub(crate) const UNAUTHORIZED_MESSAGE: &str = "No user account information supplied.";
pub(crate) const FORBIDDEN_MESSAGE: &str = "User account failed login or authentication.";
pub(crate) const NOT_FOUND_MESSAGE: &str = "Record is not on file.";
pub(crate) const CONFLICT_MESSAGE: &str =
    "Conflict, URL or file is already associated with this record.";
pub(crate) const SERVER_MESSAGE: &str =
    "Service is not available or an unknown connection error occurred.";

/// Strict shape of the service's error body
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorDetail>,
}

/// Classify a response: pass 2xx through unchanged, raise a fault otherwise.
///
/// The returned response is the same snapshot that was passed in; on the
/// fault path the response is consumed and only the classified [`Error`]
/// survives.
pub fn validate(response: RawResponse) -> Result<RawResponse> {
    match response.status() {
        200 | 201 | 204 => Ok(response),
        400 => Err(bad_request_fault(response.text())),
        401 => Err(Error::unauthorized(UNAUTHORIZED_MESSAGE)),
        403 => Err(Error::forbidden(text_or(response.text(), FORBIDDEN_MESSAGE))),
        404 => Err(Error::not_found(text_or(response.text(), NOT_FOUND_MESSAGE))),
        409 => Err(Error::conflict(CONFLICT_MESSAGE)),
        status => {
            warn!("unclassified response status {status}, treating as server fault");
            Err(Error::server(SERVER_MESSAGE))
        }
    }
}

/// Build a bad-request fault from the response body.
///
/// One guarded decode attempt of the error envelope; anything that does not
/// match the envelope shape falls back to the verbatim body text.
fn bad_request_fault(text: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => {
            let message = envelope
                .errors
                .iter()
                .filter_map(|e| e.detail.as_deref())
                .collect::<Vec<_>>()
                .join(", ");
            Error::bad_request(message, envelope.errors)
        }
        Err(_) => Error::bad_request(text, Vec::new()),
    }
}

fn text_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use test_case::test_case;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse::from_parts(status, HeaderMap::new(), body.as_bytes().to_vec())
    }

    #[test_case(200; "ok")]
    #[test_case(201; "created")]
    #[test_case(204; "no content")]
    fn test_success_passes_through_unchanged(status: u16) {
        let passed = validate(response(status, "body")).unwrap();
        assert_eq!(passed.status(), status);
        assert_eq!(passed.text(), "body");
    }

    #[test]
    fn test_bad_request_with_structured_errors() {
        let body = r#"{"errors":[{"status":400,"detail":"title is required","source":{"pointer":"/title"}}]}"#;
        let err = validate(response(400, body)).unwrap_err();

        match &err {
            Error::BadRequest { message, errors } => {
                assert_eq!(message, "title is required");
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].detail.as_deref(), Some("title is required"));
                assert_eq!(errors[0].status, Some(400));
                assert_eq!(errors[0].source.get("pointer").map(String::as_str), Some("/title"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_request_joins_details_in_order() {
        let body = r#"{"errors":[
            {"status":400,"detail":"title is required","source":{"pointer":"/title"}},
            {"status":400,"detail":"product_type is required","source":{"pointer":"/product_type"}}
        ]}"#;
        let err = validate(response(400, body)).unwrap_err();

        match err {
            Error::BadRequest { message, errors } => {
                assert_eq!(message, "title is required, product_type is required");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_request_with_unstructured_body() {
        let err = validate(response(400, "oops")).unwrap_err();

        match err {
            Error::BadRequest { message, errors } => {
                assert_eq!(message, "oops");
                assert!(errors.is_empty());
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_request_json_without_errors_key_is_verbatim() {
        let body = r#"{"message":"malformed"}"#;
        let err = validate(response(400, body)).unwrap_err();

        match err {
            Error::BadRequest { message, errors } => {
                assert_eq!(message, body);
                assert!(errors.is_empty());
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized_fixed_message() {
        let err = validate(response(401, "ignored body")).unwrap_err();
        assert!(matches!(err, Error::Unauthorized { .. }));
        assert_eq!(err.to_string(), UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn test_forbidden_prefers_body_text() {
        let err = validate(response(403, "account disabled")).unwrap_err();
        assert_eq!(err.to_string(), "account disabled");

        let err = validate(response(403, "")).unwrap_err();
        assert_eq!(err.to_string(), FORBIDDEN_MESSAGE);
    }

    #[test]
    fn test_not_found_prefers_body_text() {
        let err = validate(response(404, "gone")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "gone");

        let err = validate(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_conflict_ignores_body() {
        let err = validate(response(409, "server detail that is not used")).unwrap_err();
        assert!(matches!(err, Error::Conflict { .. }));
        assert_eq!(err.to_string(), CONFLICT_MESSAGE);
    }

    #[test_case(500)]
    #[test_case(502)]
    #[test_case(503)]
    #[test_case(418; "unknown status")]
    fn test_everything_else_is_a_server_fault(status: u16) {
        let err = validate(response(status, "")).unwrap_err();
        assert!(matches!(err, Error::Server { .. }));
        assert_eq!(err.to_string(), SERVER_MESSAGE);
    }
}
