//! Serde integration for `Value`.
//!
//! Encoded records can be rendered with any serde data format, and parsed
//! back into a `Value` that `from_value` can decode.
//!
//! # Example
//!
//! ```rust,ignore
//! let value = codable::to_value(&person)?;
//! let json = serde_json::to_string(&value)?;
//! let parsed: codable::Value = serde_json::from_str(&json)?;
//! let person: Person = codable::from_value(&parsed)?;
//! ```

mod de;
mod ser;

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_json_round_trip() {
        let value = Value::from_fields(vec![
            ("some_name", "Alice".into()),
            ("number", 7i64.into()),
            ("ratio", 0.5f64.into()),
            ("flags", vec![true, false].into()),
        ]);

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["some_name"], "Alice");
        assert_eq!(json["number"], 7);
        assert_eq!(json["flags"][1], false);

        let parsed: Value = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_json_rejects_null() {
        let result: Result<Value, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }
}
