//! Codable: keyed-container serialization with generated key mappings.
//!
//! `codable_block!` wraps a record declaration and generates the boilerplate
//! of a serialization key mapping: an ordered enumeration from member name to
//! wire key, plus a custom decode routine whenever a computed member has been
//! pulled into the mapping.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use codable::codable_block;
//!
//! codable_block! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Show {
//!         #[codable_key("show_name")]
//!         pub name: String,
//!         pub seasons: i64,
//!         #[uncodable_key]
//!         pub views: i64,
//!         #[codable_key("label")]
//!         pub label: String {
//!             format!("{} ({})", self.name, self.seasons)
//!         }
//!     }
//! }
//!
//! let show = Show { name: "Dark".into(), seasons: 3, views: 10 };
//! let value = codable::to_value(&show).unwrap();
//! assert_eq!(value.get("show_name"), Some(&"Dark".into()));
//! assert_eq!(value.get("label"), Some(&"Dark (3)".into()));
//!
//! let decoded: Show = codable::from_value(&value).unwrap();
//! assert_eq!(decoded.views, 0);
//! ```

pub mod container;
pub mod error;
pub mod keys;
pub mod traits;
pub mod value;

#[cfg(feature = "serde")]
pub mod serde;

pub use container::{Decoder, Encoder, KeyedDecodingContainer, KeyedEncodingContainer};
pub use error::{ConversionError, DecodeError, EncodeError, Error};
pub use keys::{Codable, CodingKey};
pub use traits::{from_value, to_value, Decodable, Encodable};
pub use value::Value;

// Re-export the block macro when the feature is enabled
#[cfg(feature = "derive")]
pub use codable_macros::codable_block;
