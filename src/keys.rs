//! Key enumerations mapping record members to wire keys.

use std::fmt;

/// An enumeration of the wire keys a record is encoded under.
///
/// Implemented by the `<Record>CodingKeys` enum that `codable_block!`
/// generates. `ALL` lists the keys in member declaration order.
pub trait CodingKey: Copy + Eq + fmt::Debug + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// The wire key this variant is written under.
    fn string_value(&self) -> &'static str;

    /// Look up the variant carrying the given wire key.
    fn from_string_value(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.string_value() == value)
    }
}

/// A record whose members are mapped to wire keys by `CodingKeys`.
pub trait Codable {
    type CodingKeys: CodingKey;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum TestKeys {
        Name,
        Flag,
    }

    impl CodingKey for TestKeys {
        const ALL: &'static [Self] = &[TestKeys::Name, TestKeys::Flag];

        fn string_value(&self) -> &'static str {
            match self {
                TestKeys::Name => "name",
                TestKeys::Flag => "myFavouriteBool",
            }
        }
    }

    #[test]
    fn test_from_string_value() {
        assert_eq!(TestKeys::from_string_value("name"), Some(TestKeys::Name));
        assert_eq!(
            TestKeys::from_string_value("myFavouriteBool"),
            Some(TestKeys::Flag)
        );
        assert_eq!(TestKeys::from_string_value("flag"), None);
    }
}
