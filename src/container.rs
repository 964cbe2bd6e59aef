//! Keyed containers the generated conformances read from and write into.

use std::collections::HashMap;
use std::fmt::Display;
use std::marker::PhantomData;

use crate::error::{DecodeError, EncodeError};
use crate::keys::CodingKey;
use crate::value::Value;

/// Collects the fields of a record being encoded.
#[derive(Debug, Default)]
pub struct Encoder {
    fields: HashMap<String, Value>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a container that writes under the wire keys of `K`.
    pub fn container<K: CodingKey>(&mut self) -> KeyedEncodingContainer<'_, K> {
        KeyedEncodingContainer {
            fields: &mut self.fields,
            _keys: PhantomData,
        }
    }

    /// Finish encoding, yielding a `Value::Struct`.
    pub fn into_value(self) -> Value {
        Value::Struct(self.fields)
    }
}

/// Write side of a keyed container.
pub struct KeyedEncodingContainer<'a, K: CodingKey> {
    fields: &'a mut HashMap<String, Value>,
    _keys: PhantomData<K>,
}

impl<K: CodingKey> KeyedEncodingContainer<'_, K> {
    /// Write `value` under the wire key of `key`.
    pub fn encode<T: Into<Value>>(&mut self, value: T, key: K) -> Result<(), EncodeError> {
        let wire_key = key.string_value();
        if self.fields.contains_key(wire_key) {
            return Err(EncodeError::DuplicateKey(wire_key.to_string()));
        }
        self.fields.insert(wire_key.to_string(), value.into());
        Ok(())
    }

    /// Write `value` only when it is `Some`.
    pub fn encode_if_present<T: Into<Value>>(
        &mut self,
        value: Option<T>,
        key: K,
    ) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.encode(v, key),
            None => Ok(()),
        }
    }
}

/// Read side of an encoded record.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    value: &'a Value,
}

impl<'a> Decoder<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Open a container scoped by the wire keys of `K`.
    pub fn container<K: CodingKey>(&self) -> Result<KeyedDecodingContainer<'a, K>, DecodeError> {
        match self.value {
            Value::Struct(fields) => Ok(KeyedDecodingContainer {
                fields,
                _keys: PhantomData,
            }),
            other => Err(DecodeError::ExpectedStruct {
                actual: other.type_name(),
            }),
        }
    }
}

/// Keyed read access to the fields of a record.
pub struct KeyedDecodingContainer<'a, K: CodingKey> {
    fields: &'a HashMap<String, Value>,
    _keys: PhantomData<K>,
}

impl<K: CodingKey> KeyedDecodingContainer<'_, K> {
    /// Whether the encoded record carries `key`.
    pub fn contains(&self, key: K) -> bool {
        self.fields.contains_key(key.string_value())
    }

    /// Keys of `K` present in the encoded record, in declaration order.
    pub fn all_keys(&self) -> Vec<K> {
        K::ALL.iter().copied().filter(|k| self.contains(*k)).collect()
    }

    /// Decode the value stored under `key`.
    pub fn decode<T>(&self, key: K) -> Result<T, DecodeError>
    where
        T: TryFrom<Value>,
        T::Error: Display,
    {
        self.decode_if_present(key)?
            .ok_or_else(|| DecodeError::MissingKey {
                key: key.string_value().to_string(),
            })
    }

    /// Decode the value stored under `key`, or `None` when the key is absent.
    pub fn decode_if_present<T>(&self, key: K) -> Result<Option<T>, DecodeError>
    where
        T: TryFrom<Value>,
        T::Error: Display,
    {
        let wire_key = key.string_value();
        match self.fields.get(wire_key) {
            Some(v) => T::try_from(v.clone())
                .map(Some)
                .map_err(|e| DecodeError::TypeMismatch {
                    key: wire_key.to_string(),
                    message: e.to_string(),
                }),
            None => Ok(None),
        }
    }
}
