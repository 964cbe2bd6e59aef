//! `Serialize` for `Value`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Binary(v) => serializer.serialize_bytes(v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Struct(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
            Value::Array(arr) => {
                let mut state = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    state.serialize_element(v)?;
                }
                state.end()
            }
        }
    }
}
