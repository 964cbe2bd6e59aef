//! The `codable_block!` macro.
//!
//! Wraps a record declaration and generates its serialization key mapping:
//! a `<Record>CodingKeys` enumeration from member name to wire key, the
//! `Encodable` conformance, and a `Decodable` conformance that skips computed
//! members whenever one of them has been pulled into the mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use codable::codable_block;
//!
//! codable_block! {
//!     pub struct Entity {
//!         #[codable_key("some_name")]
//!         pub some_name: String,
//!         pub number: i64,
//!         #[uncodable_key]
//!         pub count: i64,
//!     }
//! }
//!
//! let entity = Entity { some_name: "x".into(), number: 1, count: 2 };
//! let value = codable::to_value(&entity).unwrap();
//! ```

mod decode;
mod descriptor;
mod diagnostic;
mod directive;
mod encode;
mod expand;
mod keys;
mod record;
mod scan;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use crate::record::Record;

/// Declare a record and generate its key mapping.
///
/// # Member forms
///
/// - `name: Type` / `name: Type = expr` - stored member.
/// - `name: Type { body }` or `name: Type { get { body } }` - computed member,
///   emitted as a `&self` getter. Left out of the key mapping unless renamed.
/// - `name: Type = expr { will_set { .. } did_set { .. } }` - stored member
///   with observers, emitted with a `set_<name>` setter.
/// - `fn` and `const` items are moved into an inherent `impl`.
///
/// # Directives
///
/// Only the first attribute of a member is consulted.
///
/// - `#[codable_key("key")]` - encode under `key`; includes computed members.
/// - `#[uncodable_key]` - leave the member out of the key mapping.
///
/// A record with no codable members gets no key mapping and a warning.
#[proc_macro]
pub fn codable_block(input: TokenStream) -> TokenStream {
    let record = parse_macro_input!(input as Record);

    expand::expand(&record).into()
}
