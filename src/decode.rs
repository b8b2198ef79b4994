//! Response body decoding
//!
//! The service answers some operations with a JSON array and others with a
//! bare object; a bare object is treated as a one-element result. Each
//! element must independently satisfy the target model schema, and a
//! mismatch is a schema fault distinct from the HTTP-status faults.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a body that may be a single object or an array of objects
pub fn decode_one_or_many<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::schema(format!("body is not JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| Error::schema(format!("invalid element: {e}")))
        })
        .collect()
}

/// Decode a body expected to contain exactly one object.
///
/// Operations that answer with a one-element array yield that element.
pub fn decode_first<T: DeserializeOwned>(text: &str) -> Result<T> {
    decode_one_or_many(text)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::schema("empty response, expected one element"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_decode_array() {
        let items: Vec<Item> = decode_one_or_many(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_decode_single_object_as_one_element() {
        let items: Vec<Item> = decode_one_or_many(r#"{"id":7}"#).unwrap();
        assert_eq!(items, vec![Item { id: 7 }]);
    }

    #[test]
    fn test_decode_first_from_array() {
        let item: Item = decode_first(r#"[{"id":3},{"id":4}]"#).unwrap();
        assert_eq!(item, Item { id: 3 });
    }

    #[test]
    fn test_decode_empty_array_is_schema_fault() {
        let result: Result<Item> = decode_first("[]");
        assert!(matches!(result, Err(Error::Schema { .. })));
    }

    #[test]
    fn test_decode_non_json_is_schema_fault() {
        let result: Result<Vec<Item>> = decode_one_or_many("not json");
        assert!(matches!(result, Err(Error::Schema { .. })));
    }

    #[test]
    fn test_decode_schema_mismatch_is_schema_fault() {
        let result: Result<Vec<Item>> = decode_one_or_many(r#"[{"id":"not a number"}]"#);
        assert!(matches!(result, Err(Error::Schema { .. })));
    }
}
