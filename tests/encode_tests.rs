//! Encoding generated records into keyed containers.

use codable::{codable_block, to_value, EncodeError, Encodable, Encoder, Value};
use pretty_assertions::assert_eq;

codable_block! {
    struct Message {
        #[codable_key("msg_id")]
        id: i64,
        body: String,
        payload: Vec<u8>,
        score: f64,
        #[uncodable_key]
        retries: u32,
    }
}

codable_block! {
    struct Clash {
        #[codable_key("id")]
        first: i64,
        #[codable_key("id")]
        second: i64,
    }
}

codable_block! {
    struct Counter {
        hits: i64 = 0,
        #[codable_key("double")]
        double: i64 {
            get {
                self.hits * 2
            }
        }
        #[uncodable_key]
        label: String { format!("{} hits", self.hits) }
    }
}

#[test]
fn test_encode_uses_wire_keys() {
    let message = Message {
        id: 12,
        body: "hi".into(),
        payload: vec![0x01, 0xff],
        score: 2.5,
        retries: 3,
    };
    let value = to_value(&message).unwrap();
    assert_eq!(
        value,
        Value::from_fields(vec![
            ("msg_id", 12i64.into()),
            ("body", "hi".into()),
            ("payload", Value::Binary(vec![0x01, 0xff])),
            ("score", 2.5f64.into()),
        ])
    );
}

#[test]
fn test_duplicate_wire_key_fails() {
    let clash = Clash { first: 1, second: 2 };
    let err = to_value(&clash).unwrap_err();
    assert!(matches!(err, EncodeError::DuplicateKey(ref key) if key == "id"));
    assert_eq!(err.to_string(), "duplicate key 'id' in keyed container");
}

#[test]
fn test_computed_getter_is_encoded() {
    let counter = Counter { hits: 4 };
    assert_eq!(counter.label(), "4 hits");

    let value = to_value(&counter).unwrap();
    assert_eq!(
        value,
        Value::from_fields(vec![("hits", 4i64.into()), ("double", 8i64.into())])
    );
}

#[test]
fn test_encoder_direct() {
    let counter = Counter { hits: 1 };
    let mut encoder = Encoder::new();
    counter.encode(&mut encoder).unwrap();
    assert_eq!(encoder.into_value().get("double"), Some(&Value::Integer(2)));
}
