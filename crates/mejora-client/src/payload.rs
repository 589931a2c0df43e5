//! Lenient payload decoding.
//!
//! The API wraps some responses as `{"data": ...}` and returns bare arrays
//! elsewhere. List decoding never fails: anything that is not an array is an
//! empty list, and elements that do not match the record type are skipped.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Strip a `{"data": ...}` envelope if present.
#[must_use]
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode a list payload into records, treating malformed input as empty.
#[must_use]
pub fn records_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = unwrap_data(value) else {
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::debug!(index, %error, "skipping malformed record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn bare_array_decodes() {
        let rows: Vec<Row> = records_from_value(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn data_envelope_is_unwrapped() {
        let rows: Vec<Row> = records_from_value(json!({"success": true, "data": [{"id": 3}]}));
        assert_eq!(rows, vec![Row { id: 3 }]);
    }

    #[test]
    fn non_arrays_are_empty() {
        for value in [json!(null), json!("x"), json!({"id": 1}), json!({"data": {}})] {
            assert!(records_from_value::<Row>(value).is_empty());
        }
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let rows: Vec<Row> = records_from_value(json!([{"id": 1}, {"id": "x"}, 5, {"id": 4}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 4 }]);
    }
}
