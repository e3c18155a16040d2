//! Schema-agnostic field lookup over nested JSON records.
//!
//! Peptide records arrive from four origin databases that nest the same
//! logical fields at different depths. `locate` performs a depth-first,
//! document-order walk and returns the first value whose containing
//! mapping carries the requested key. The walk uses an explicit stack:
//! upstream data is uncurated and may nest arbitrarily deep, so the
//! traversal must not depend on call-stack depth.

use serde_json::Value;

/// Find the first value stored under `field` anywhere in `record`.
///
/// Visit order: at each mapping the key is checked before descending into
/// its values; list items are visited in order. Null-valued hits are
/// treated as absent and the walk continues, matching the behaviour the
/// origin scrapers rely on.
pub fn locate<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    let mut stack: Vec<&Value> = vec![record];

    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                if let Some(v) = map.get(field) {
                    if !v.is_null() {
                        return Some(v);
                    }
                }
                // Reverse push so values are visited in map order.
                for v in map.values().rev() {
                    stack.push(v);
                }
            }
            Value::Array(items) => {
                for v in items.iter().rev() {
                    stack.push(v);
                }
            }
            _ => {}
        }
    }

    None
}

/// Locate a string-valued field. Non-string values are treated as absent.
pub fn locate_str<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    locate(record, field).and_then(Value::as_str)
}

/// Locate a numeric field, accepting either a JSON number or a string
/// that parses as one. Source records are inconsistent about which they use.
pub fn locate_f64(record: &Value, field: &str) -> Option<f64> {
    match locate(record, field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a single JSON value to f64 (number or numeric string).
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locate_top_level() {
        let rec = json!({"Sequence": "KWKLFKK"});
        assert_eq!(locate_str(&rec, "Sequence"), Some("KWKLFKK"));
    }

    #[test]
    fn test_locate_nested_in_map_and_list() {
        let rec = json!({
            "meta": {"source": "DRAMP"},
            "sections": [
                {"title": "General"},
                {"title": "Activity", "data": {"Hemolysis": 12.5}}
            ]
        });
        assert_eq!(locate_f64(&rec, "Hemolysis"), Some(12.5));
    }

    #[test]
    fn test_locate_first_match_wins() {
        // Both branches carry "ID"; depth-first document order must pick
        // the one inside the first branch.
        let rec = json!({
            "a": {"ID": "first"},
            "b": {"ID": "second"}
        });
        assert_eq!(locate_str(&rec, "ID"), Some("first"));
    }

    #[test]
    fn test_null_value_is_absent() {
        let rec = json!({
            "outer": {"Sequence": null},
            "inner": {"Sequence": "GIGK"}
        });
        assert_eq!(locate_str(&rec, "Sequence"), Some("GIGK"));

        let only_null = json!({"Sequence": null});
        assert!(locate(&only_null, "Sequence").is_none());
    }

    #[test]
    fn test_missing_field() {
        let rec = json!({"a": [1, 2, {"b": "c"}]});
        assert!(locate(&rec, "Sequence").is_none());
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut rec = json!({"Sequence": "AAA"});
        for _ in 0..2_000 {
            rec = json!({ "wrap": [rec] });
        }
        assert_eq!(locate_str(&rec, "Sequence"), Some("AAA"));
    }

    #[test]
    fn test_numeric_string_coercion() {
        let rec = json!({"HC50": "128.0"});
        assert_eq!(locate_f64(&rec, "HC50"), Some(128.0));
        let rec = json!({"HC50": true});
        assert_eq!(locate_f64(&rec, "HC50"), None);
    }
}
