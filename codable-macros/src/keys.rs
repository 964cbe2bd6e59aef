//! Key mapping synthesis.

use std::collections::HashMap;

use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::Ident;

use crate::descriptor::MemberDescriptor;
use crate::diagnostic::{Diagnostic, DiagnosticSink, Mistake};
use crate::record::Record;

/// One case of the key enumeration.
#[derive(Clone, Debug)]
pub struct KeyCase {
    pub ident: Ident,
    /// Explicit wire key, only when it differs from the member name.
    pub raw_value: Option<String>,
}

impl KeyCase {
    pub fn source_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    pub fn wire_key(&self) -> String {
        self.raw_value.clone().unwrap_or_else(|| self.source_name())
    }

    pub fn variant(&self) -> Ident {
        variant_ident(&self.ident)
    }
}

fn variant_name(member: &Ident) -> String {
    member.unraw().to_string().to_case(Case::Pascal)
}

/// Pascal-case enum variant for a member. Only valid for members of a
/// mapping that passed [`KeyMapping::check_variants`].
pub fn variant_ident(member: &Ident) -> Ident {
    format_ident!("{}", variant_name(member), span = member.span())
}

/// Ordered mapping from member name to wire key. Never empty.
#[derive(Clone, Debug)]
pub struct KeyMapping {
    pub cases: Vec<KeyCase>,
}

impl KeyMapping {
    /// Build the mapping from the included descriptors, or report that no
    /// member qualified.
    pub fn synthesize(
        descriptors: &[MemberDescriptor],
        site: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Self> {
        let cases: Vec<KeyCase> = descriptors
            .iter()
            .filter(|d| d.included)
            .map(|d| {
                let source_name = d.source_name();
                KeyCase {
                    ident: d.ident.clone(),
                    raw_value: (d.wire_key != source_name).then(|| d.wire_key.clone()),
                }
            })
            .collect();

        if cases.is_empty() {
            sink.diagnose(Diagnostic {
                mistake: Mistake::Empty,
                span: site,
            });
            return None;
        }

        Some(KeyMapping { cases })
    }

    /// Every case needs its own variant, and the variant must be a plain
    /// identifier: `some_name` and `someName` collide, `__` and `self_` have
    /// no usable Pascal-case form.
    pub fn check_variants(&self) -> syn::Result<()> {
        let mut seen: HashMap<String, &Ident> = HashMap::new();
        for case in &self.cases {
            let name = variant_name(&case.ident);
            if syn::parse_str::<Ident>(&name).is_err() {
                return Err(syn::Error::new(
                    case.ident.span(),
                    format!(
                        "member `{}` has no usable key variant name (`{}`)",
                        case.source_name(),
                        name
                    ),
                ));
            }
            if let Some(previous) = seen.insert(name.clone(), &case.ident) {
                return Err(syn::Error::new(
                    case.ident.span(),
                    format!(
                        "members `{}` and `{}` both map to key variant `{}`",
                        previous.unraw(),
                        case.source_name(),
                        name
                    ),
                ));
            }
        }
        Ok(())
    }

    /// The `<Record>CodingKeys` enum and the `Codable` association.
    pub fn to_tokens(&self, record: &Record) -> TokenStream {
        let name = &record.ident;
        let vis = &record.vis;
        let keys = record.keys_ident();
        let variants: Vec<Ident> = self.cases.iter().map(KeyCase::variant).collect();
        let wire_keys = self.cases.iter().map(KeyCase::wire_key);

        quote! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            #vis enum #keys {
                #(#variants),*
            }

            impl ::codable::CodingKey for #keys {
                const ALL: &'static [Self] = &[#(Self::#variants),*];

                fn string_value(&self) -> &'static str {
                    match self {
                        #(Self::#variants => #wire_keys,)*
                    }
                }
            }

            impl ::codable::Codable for #name {
                type CodingKeys = #keys;
            }
        }
    }
}
