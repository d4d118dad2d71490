//! Lenient numeric coercion of JSON scalars.
//!
//! Alpha Vantage reports every figure as a string and uses `"None"` for
//! missing line items. Anything that does not parse as a finite number is
//! treated as absent.

use serde_json::{Map, Value};

/// Look up `key` in a JSON object and coerce it to a number.
///
/// Returns `None` when the key is missing or the value cannot be read as a
/// finite `f64`. Never fails.
pub fn coerce(document: &Map<String, Value>, key: &str) -> Option<f64> {
    document.get(key).and_then(coerce_value)
}

/// Coerce a single JSON value to a finite `f64`.
pub fn coerce_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }?;

    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("item".to_string(), value);
        map
    }

    #[rstest]
    #[case(json!("123000000"), Some(123_000_000.0))]
    #[case(json!("15.2"), Some(15.2))]
    #[case(json!(" -4.5 "), Some(-4.5))]
    #[case(json!("1e9"), Some(1e9))]
    #[case(json!(42), Some(42.0))]
    #[case(json!(0.25), Some(0.25))]
    #[case(json!("0"), Some(0.0))]
    #[case(json!("None"), None)]
    #[case(json!("N/A"), None)]
    #[case(json!(""), None)]
    #[case(json!("NaN"), None)]
    #[case(json!("inf"), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    #[case(json!(["1"]), None)]
    #[case(json!({"v": 1}), None)]
    fn test_coerce_values(#[case] value: Value, #[case] expected: Option<f64>) {
        assert_eq!(coerce(&doc(value), "item"), expected);
    }

    #[test]
    fn test_missing_key_is_absent() {
        assert_eq!(coerce(&doc(json!("1")), "other"), None);
    }

    #[test]
    fn test_zero_is_not_absent() {
        assert_eq!(coerce_value(&json!("0")), Some(0.0));
        assert_ne!(coerce_value(&json!("0")), coerce_value(&json!("None")));
    }
}
