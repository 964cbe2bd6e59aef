//! Decoding generated records: the custom routine, the memberwise path and errors.

use codable::{codable_block, from_value, to_value, CodingKey, DecodeError, Value};

codable_block! {
    #[derive(Debug, PartialEq)]
    struct Tagged {
        tags: Vec<String>,
        number: i64,
        #[codable_key("total")]
        total: i64 {
            self.number * 2
        }
    }
}

codable_block! {
    #[derive(Debug, PartialEq)]
    struct Listed {
        tags: Vec<String>,
        number: i64,
    }
}

codable_block! {
    #[derive(Debug, PartialEq)]
    struct Small {
        level: u8,
        ratio: f32,
        #[codable_key("on")]
        enabled: bool,
    }
}

codable_block! {
    #[derive(Debug, PartialEq)]
    struct Person {
        #[codable_key("full_name")]
        name: String,
        age: i64,
        #[codable_key("greeting")]
        greeting: String {
            format!("hello {}", self.name)
        }
    }
}

#[test]
fn test_routine_drops_compound_members() {
    let keys: Vec<&str> = TaggedCodingKeys::ALL.iter().map(|k| k.string_value()).collect();
    assert_eq!(keys, vec!["number", "total"]);

    let tagged = Tagged {
        tags: vec!["a".into()],
        number: 4,
    };
    let value = to_value(&tagged).unwrap();
    assert_eq!(value.get("tags"), None);
    assert_eq!(value.get("total"), Some(&Value::Integer(8)));

    let decoded: Tagged = from_value(&value).unwrap();
    assert_eq!(
        decoded,
        Tagged {
            tags: Vec::new(),
            number: 4,
        }
    );
}

#[test]
fn test_memberwise_keeps_compound_members() {
    let listed = Listed {
        tags: vec!["a".into(), "b".into()],
        number: 1,
    };
    let value = to_value(&listed).unwrap();
    assert_eq!(
        value.get("tags"),
        Some(&Value::Array(vec!["a".into(), "b".into()]))
    );
    assert_eq!(from_value::<Listed>(&value).unwrap(), listed);
}

#[test]
fn test_small_scalar_members() {
    let small = Small {
        level: 3,
        ratio: 0.5,
        enabled: true,
    };
    let value = to_value(&small).unwrap();
    assert_eq!(value.get("on"), Some(&Value::Boolean(true)));
    assert_eq!(from_value::<Small>(&value).unwrap(), small);

    let out_of_range = Value::from_fields(vec![
        ("level", 256i64.into()),
        ("ratio", 1i64.into()),
        ("on", false.into()),
    ]);
    let err = from_value::<Small>(&out_of_range).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { ref key, .. } if key == "level"));
    assert_eq!(
        err.to_string(),
        "type mismatch for key 'level': integer 256 out of range"
    );
}

#[test]
fn test_missing_key() {
    let value = Value::from_fields(vec![("age", 30i64.into())]);
    let err = from_value::<Person>(&value).unwrap_err();
    assert!(matches!(err, DecodeError::MissingKey { ref key } if key == "full_name"));
    assert_eq!(err.to_string(), "missing required key 'full_name'");
}

#[test]
fn test_type_mismatch() {
    let value = Value::from_fields(vec![
        ("full_name", "Alice".into()),
        ("age", "thirty".into()),
    ]);
    let err = from_value::<Person>(&value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch for key 'age': expected integer, got string"
    );
}

#[test]
fn test_expected_struct() {
    let err = from_value::<Person>(&Value::Array(vec![])).unwrap_err();
    assert!(matches!(err, DecodeError::ExpectedStruct { actual: "array" }));
}

#[test]
fn test_computed_value_ignored_on_decode() {
    let value = Value::from_fields(vec![
        ("full_name", "Alice".into()),
        ("age", 30i64.into()),
        ("greeting", "stale".into()),
    ]);
    let person: Person = from_value(&value).unwrap();
    assert_eq!(person.greeting(), "hello Alice");
}
