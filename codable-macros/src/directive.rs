//! Member directives and their resolution.

use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Token};

use crate::scan::RawMember;

/// `#[codable_key("wire_key")]`: rename a member, or pull a computed member
/// into the key mapping.
pub const RENAME: &str = "codable_key";
/// `#[uncodable_key]`: remove a member from the key mapping.
pub const EXCLUDE: &str = "uncodable_key";

/// The directive found in a member's first attribute slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Carries the literal key, or `None` when the argument is not a string literal.
    Rename(Option<String>),
    Exclude,
    /// Any other attribute occupying the first slot.
    Other,
}

impl Directive {
    pub fn from_attr(attr: &Attribute) -> Self {
        if attr.path().is_ident(RENAME) {
            Directive::Rename(rename_payload(attr))
        } else if attr.path().is_ident(EXCLUDE) {
            Directive::Exclude
        } else {
            Directive::Other
        }
    }
}

/// Only the first attribute is consulted; doc comments are not attributes here.
pub fn first_directive(attrs: &[Attribute]) -> Option<Directive> {
    attrs
        .iter()
        .find(|attr| !attr.path().is_ident("doc"))
        .map(Directive::from_attr)
}

/// Drop directive markers so they do not reach the compiler.
pub fn strip(attrs: &[Attribute]) -> Vec<&Attribute> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident(RENAME) && !attr.path().is_ident(EXCLUDE))
        .collect()
}

fn rename_payload(attr: &Attribute) -> Option<String> {
    let Meta::List(list) = &attr.meta else {
        return None;
    };
    let args = list
        .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)
        .ok()?;
    match args.first()? {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some(lit.value()),
        _ => None,
    }
}

/// Inclusion decision and optional rename for one member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub included: bool,
    pub rename_to: Option<String>,
}

pub fn resolve(member: &RawMember) -> Resolution {
    match &member.first_directive {
        Some(Directive::Exclude) => Resolution {
            included: false,
            rename_to: None,
        },
        Some(Directive::Rename(Some(key))) => Resolution {
            included: true,
            rename_to: (*key != member.source_name()).then(|| key.clone()),
        },
        // Stored members default in, computed members default out.
        None | Some(Directive::Rename(None)) | Some(Directive::Other) => Resolution {
            included: !member.has_computed_body,
            rename_to: None,
        },
    }
}
