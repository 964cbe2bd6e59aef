//! Member scanning: flat facts about each member of a record.

use syn::ext::IdentExt;
use syn::{Ident, PathArguments, Type, TypePath};

use crate::directive::{self, Directive};
use crate::record::{Member, RecordItem};

/// What the classification pass knows about one declared member.
#[derive(Clone, Debug)]
pub struct RawMember {
    pub name: Ident,
    /// Present only when the declared type is a single bare type name.
    pub declared_type: Option<Ident>,
    /// A getter body backs the member. Observer-only blocks do not count.
    pub has_computed_body: bool,
    pub first_directive: Option<Directive>,
}

impl RawMember {
    pub fn source_name(&self) -> String {
        self.name.unraw().to_string()
    }
}

impl From<&Member> for RawMember {
    fn from(member: &Member) -> Self {
        RawMember {
            name: member.ident.clone(),
            declared_type: bare_type_name(&member.ty),
            has_computed_body: member.is_computed(),
            first_directive: directive::first_directive(&member.attrs),
        }
    }
}

/// Members in declaration order; methods and constants are skipped.
pub fn scan(items: &[RecordItem]) -> Vec<RawMember> {
    items
        .iter()
        .filter_map(|item| match item {
            RecordItem::Member(member) => Some(RawMember::from(member)),
            RecordItem::Item(_) => None,
        })
        .collect()
}

fn bare_type_name(ty: &Type) -> Option<Ident> {
    match ty {
        Type::Path(TypePath { qself: None, path })
            if path.leading_colon.is_none() && path.segments.len() == 1 =>
        {
            let segment = path.segments.first()?;
            match segment.arguments {
                PathArguments::None => Some(segment.ident.clone()),
                _ => None,
            }
        }
        Type::Group(group) => bare_type_name(&group.elem),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use syn::parse_quote;

    #[test]
    fn test_bare_type_names() {
        let bare: Type = parse_quote!(String);
        assert_eq!(bare_type_name(&bare).unwrap(), "String");

        let compound: [Type; 5] = [
            parse_quote!(Vec<u8>),
            parse_quote!(Option<i64>),
            parse_quote!(std::string::String),
            parse_quote!([u8; 4]),
            parse_quote!((i64, i64)),
        ];
        for ty in &compound {
            assert!(bare_type_name(ty).is_none());
        }
    }

    #[test]
    fn test_scan_keeps_declaration_order() {
        let record: Record = parse_quote! {
            struct Entity {
                #[codable_key("some_name")]
                some_name: String,
                number: i64,
                fn helper(&self) -> i64 { self.number }
                tt: String { String::new() }
                ttt: String = String::new() { did_set { } }
                tags: Vec<String>,
            }
        };

        let members = scan(&record.items);
        let names: Vec<String> = members.iter().map(RawMember::source_name).collect();
        assert_eq!(names, vec!["some_name", "number", "tt", "ttt", "tags"]);

        assert_eq!(
            members[0].first_directive,
            Some(Directive::Rename(Some("some_name".into())))
        );
        assert!(!members[1].has_computed_body);
        assert!(members[2].has_computed_body);
        assert!(!members[3].has_computed_body);
        assert!(members[4].declared_type.is_none());
    }
}
