//! Traits implemented by the code `codable_block!` generates.

use crate::container::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::value::Value;

/// Trait for records that can be written into a keyed container.
///
/// The generated implementation walks the record's key mapping in order,
/// reading stored members directly and computed members through their
/// getter.
///
/// # Example
///
/// ```rust,ignore
/// codable::codable_block! {
///     struct Person {
///         name: String,
///         age: i64,
///     }
/// }
///
/// let person = Person { name: "Alice".into(), age: 30 };
/// let value = codable::to_value(&person).unwrap();
/// ```
pub trait Encodable {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError>;
}

/// Trait for records that can be rebuilt from a keyed container.
///
/// # Example
///
/// ```rust,ignore
/// let person: Person = codable::from_value(&value).unwrap();
/// ```
pub trait Decodable: Sized {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError>;
}

/// Encode a record into a `Value::Struct` keyed by wire key.
pub fn to_value<T: Encodable + ?Sized>(record: &T) -> Result<Value, EncodeError> {
    let mut encoder = Encoder::new();
    record.encode(&mut encoder)?;
    Ok(encoder.into_value())
}

/// Decode a record from a `Value::Struct` keyed by wire key.
pub fn from_value<T: Decodable>(value: &Value) -> Result<T, DecodeError> {
    T::decode(&Decoder::new(value))
}
