use std::collections::HashMap;
use std::fmt;

use crate::error::ConversionError;

/// Dynamic value held by keyed containers, similar to `serde_json::Value`.
///
/// Encoded records are `Value::Struct` maps keyed by wire key.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Binary(Vec<u8>),
    Double(f64),
    /// A record, keyed by wire key.
    Struct(HashMap<String, Value>),
    Array(Vec<Value>),
}

impl Value {
    /// Build a struct value from `(wire_key, value)` pairs.
    pub fn from_fields(fields: Vec<(&str, Value)>) -> Self {
        Value::Struct(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Look up a wire key. `None` for missing keys and non-struct values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Struct(fields) => fields.get(key),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Binary(_) => "binary",
            Value::Double(_) => "double",
            Value::Struct(_) => "struct",
            Value::Array(_) => "array",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
            Value::Binary(v) => write!(f, "<binary {} bytes>", v.len()),
            Value::Double(v) => write!(f, "{}", v),
            Value::Struct(fields) => {
                // sorted so the rendering is stable across runs
                let mut keys: Vec<&String> = fields.keys().collect();
                keys.sort();
                f.write_str("{ ")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, fields[key])?;
                }
                f.write_str(" }")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Member types stored as-is in one variant.
macro_rules! impl_exact {
    ($($ty:ty => $variant:ident, $expected:literal;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = ConversionError;
                fn try_from(v: Value) -> Result<Self, Self::Error> {
                    match v {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(ConversionError::mismatch($expected, &other)),
                    }
                }
            }
        )*
    };
}

impl_exact! {
    i64 => Integer, "integer";
    String => String, "string";
    Vec<u8> => Binary, "binary";
}

/// Integer widths narrower than `i64`; decoding checks the range.
macro_rules! impl_narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Integer(i64::from(v))
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = ConversionError;
                fn try_from(v: Value) -> Result<Self, Self::Error> {
                    let wide = i64::try_from(v)?;
                    <$ty>::try_from(wide).map_err(|_| ConversionError::OutOfRange(wide))
                }
            }
        )*
    };
}

impl_narrow_integer!(i8, i16, i32, u8, u16, u32);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl TryFrom<Value> for bool {
    type Error = ConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Boolean(b) => Ok(b),
            Value::Integer(i) => Ok(i != 0),
            other => Err(ConversionError::mismatch("boolean", &other)),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl TryFrom<Value> for f64 {
    type Error = ConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Double(d) => Ok(d),
            Value::Integer(i) => Ok(i as f64),
            other => Err(ConversionError::mismatch("double", &other)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = ConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        f64::try_from(v).map(|d| d as f32)
    }
}

/// Homogeneous arrays; a single bad element fails the whole decode.
macro_rules! impl_array {
    ($($ty:ty),*) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(v: Vec<$ty>) -> Self {
                    Value::Array(v.into_iter().map(Value::from).collect())
                }
            }

            impl TryFrom<Value> for Vec<$ty> {
                type Error = ConversionError;
                fn try_from(v: Value) -> Result<Self, Self::Error> {
                    match v {
                        Value::Array(items) => items.into_iter().map(<$ty>::try_from).collect(),
                        other => Err(ConversionError::mismatch("array", &other)),
                    }
                }
            }
        )*
    };
}

impl_array!(i64, f64, bool, String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(7u8), Value::Integer(7));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(0.5f32), Value::Double(0.5));
        assert_eq!(Value::from(vec![1u8, 2]), Value::Binary(vec![1, 2]));
        assert_eq!(
            Value::from(vec![true, false]),
            Value::Array(vec![Value::Boolean(true), Value::Boolean(false)])
        );
    }

    #[test]
    fn test_narrow_integer_range() {
        assert_eq!(i8::try_from(Value::Integer(-5)), Ok(-5));
        assert_eq!(
            u8::try_from(Value::Integer(300)),
            Err(ConversionError::OutOfRange(300))
        );
        assert_eq!(
            u32::try_from(Value::Boolean(true)).unwrap_err().to_string(),
            "expected integer, got boolean"
        );
    }

    #[test]
    fn test_widening_decodes() {
        assert_eq!(f64::try_from(Value::Integer(3)), Ok(3.0));
        assert_eq!(bool::try_from(Value::Integer(0)), Ok(false));
    }

    #[test]
    fn test_array_element_mismatch() {
        let mixed = Value::Array(vec!["a".into(), Value::Integer(1)]);
        assert_eq!(
            Vec::<String>::try_from(mixed).unwrap_err().to_string(),
            "expected string, got integer"
        );
        assert_eq!(
            Vec::<i64>::try_from(Value::Integer(1)),
            Err(ConversionError::Mismatch {
                expected: "array",
                actual: "integer",
            })
        );
    }

    #[test]
    fn test_struct_builder() {
        let val = Value::from_fields(vec![("name", "Alice".into()), ("age", 13i64.into())]);
        assert_eq!(val.get("name"), Some(&Value::String("Alice".into())));
        assert_eq!(val.get("age"), Some(&Value::Integer(13)));
        assert_eq!(val.get("missing"), None);
        assert_eq!(Value::Integer(1).get("name"), None);
    }

    #[test]
    fn test_display_is_sorted() {
        let val = Value::from_fields(vec![
            ("b", 2i64.into()),
            ("a", "x".into()),
            ("c", Value::Array(vec![1i64.into(), 2i64.into()])),
        ]);
        assert_eq!(val.to_string(), "{ a: \"x\", b: 2, c: [1, 2] }");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::Double(0.1), Value::Double(0.1));
        assert_ne!(Value::Integer(1), Value::Boolean(true));
    }
}
