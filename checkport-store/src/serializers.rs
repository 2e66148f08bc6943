//! JSON and CSV serializers.
//!
//! The JSON serializer is a pretty-printed passthrough. The CSV serializer
//! is deliberately generic: it flattens whatever it is given through a JSON
//! tree and never recurses into nested structures.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;

// ============================================================================
// JSON
// ============================================================================

/// Serializes any value as pretty-printed JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(data)?)
}

// ============================================================================
// CSV
// ============================================================================

/// Serializes any value as CSV.
///
/// - A sequence uses the keys of its **first** element as the header.
///   Keys that only appear in later elements are dropped and non-object
///   elements are skipped. An empty sequence produces no output.
/// - A single mapping produces its own keys as header plus one row.
/// - Any other root produces no output.
///
/// Every cell is quoted with embedded quotes doubled. Nested arrays and
/// objects are written as compact JSON text.
pub fn to_csv<T: Serialize + ?Sized>(data: &T) -> Result<String, StoreError> {
    let tree = serde_json::to_value(data)?;
    Ok(flatten_tree(&tree))
}

/// Flattens an already-built JSON tree. See [`to_csv`].
pub fn flatten_tree(tree: &Value) -> String {
    match tree {
        Value::Array(items) => {
            let Some(Value::Object(first)) = items.first() else {
                return String::new();
            };
            let headers: Vec<&str> = first.keys().map(String::as_str).collect();

            let mut out = header_line(&headers);
            for item in items {
                if let Value::Object(row) = item {
                    out.push_str(&row_line(&headers, row));
                }
            }
            out
        }
        Value::Object(single) => {
            let headers: Vec<&str> = single.keys().map(String::as_str).collect();
            let mut out = header_line(&headers);
            out.push_str(&row_line(&headers, single));
            out
        }
        _ => String::new(),
    }
}

/// Quotes a CSV field, doubling embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn header_line(headers: &[&str]) -> String {
    let mut line = headers
        .iter()
        .map(|h| quote_field(h))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn row_line(headers: &[&str], row: &Map<String, Value>) -> String {
    let mut line = headers
        .iter()
        .map(|h| quote_field(&cell_text(row.get(*h))))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Scalar text of a cell; nested structures become literal JSON.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(nested @ (Value::Array(_) | Value::Object(_))) => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_from_first_element_only() {
        let data = json!([
            { "a": 1, "b": 2 },
            { "a": 3, "b": 4, "c": 5 },
            { "a": 6, "b": 7, "d": 8 }
        ]);
        let csv = to_csv(&data).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], r#""a","b""#);
        assert_eq!(lines[1], r#""1","2""#);
        assert_eq!(lines[2], r#""3","4""#);
        assert_eq!(lines[3], r#""6","7""#);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_sequence_has_no_rows() {
        assert_eq!(to_csv(&json!([])).unwrap(), "");
        let empty: Vec<u8> = Vec::new();
        assert_eq!(to_csv(&empty).unwrap(), "");
    }

    #[test]
    fn test_missing_keys_become_empty_cells() {
        let csv = to_csv(&json!([{ "a": 1, "b": 2 }, { "b": 3 }])).unwrap();
        assert_eq!(csv, "\"a\",\"b\"\n\"1\",\"2\"\n\"\",\"3\"\n");
    }

    #[test]
    fn test_single_object() {
        let csv = to_csv(&json!({ "name": "x", "count": 2, "ok": true, "none": null })).unwrap();
        assert_eq!(csv, "\"name\",\"count\",\"ok\",\"none\"\n\"x\",\"2\",\"true\",\"\"\n");
    }

    #[test]
    fn test_nested_values_are_literal_text() {
        let csv = to_csv(&json!([{ "tags": ["a", "b"], "type": { "http": { "port": 80 } } }])).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], r#""[""a"",""b""]","{""http"":{""port"":80}}""#);
    }

    #[test]
    fn test_quotes_are_doubled() {
        let csv = to_csv(&json!({ "msg": "say \"hi\", then leave" })).unwrap();
        assert!(csv.ends_with("\"say \"\"hi\"\", then leave\"\n"));
    }

    #[test]
    fn test_scalar_root_is_empty() {
        assert_eq!(to_csv(&json!("text")).unwrap(), "");
        assert_eq!(to_csv(&json!([1, 2, 3])).unwrap(), "");
    }

    #[test]
    fn test_pretty_json_passthrough() {
        let json = to_pretty_json(&json!({ "a": [1] })).unwrap();
        assert_eq!(json, "{\n  \"a\": [\n    1\n  ]\n}");
    }
}
