//! Decode routine synthesis and the memberwise `Decodable` conformance.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::descriptor::MemberDescriptor;
use crate::keys::{variant_ident, KeyMapping};
use crate::record::Record;

/// One `member = decode(Type, key)` step of the routine. The wire key is
/// reached through the key variant.
#[derive(Clone, Debug)]
pub struct Assignment {
    pub ident: Ident,
    pub declared_type: Ident,
}

/// Custom decode routine that skips computed members.
#[derive(Clone, Debug)]
pub struct DecodeRoutine {
    pub assignments: Vec<Assignment>,
}

impl DecodeRoutine {
    /// Only needed once a computed member is part of the key mapping; the
    /// memberwise decode would otherwise try to assign to it.
    pub fn synthesize(descriptors: &[MemberDescriptor]) -> Option<Self> {
        if !descriptors.iter().any(|d| d.included && d.is_computed) {
            return None;
        }

        let assignments = descriptors
            .iter()
            .filter(|d| d.included && !d.is_computed)
            .filter_map(|d| {
                Some(Assignment {
                    ident: d.ident.clone(),
                    declared_type: d.declared_type.clone()?,
                })
            })
            .collect();

        Some(DecodeRoutine { assignments })
    }

    pub fn to_tokens(&self, record: &Record) -> TokenStream {
        let name = &record.ident;
        let keys = record.keys_ident();
        let values = container_ident();
        let decodes = self.assignments.iter().map(|a| {
            let ident = &a.ident;
            let ty = &a.declared_type;
            let variant = variant_ident(ident);
            quote! {
                let #ident = #values.decode::<#ty>(#keys::#variant)?;
            }
        });
        let assigned: Vec<&Ident> = self.assignments.iter().map(|a| &a.ident).collect();
        let construct = construct(record, &assigned);

        quote! {
            impl ::codable::Decodable for #name {
                #[allow(unused_variables)]
                fn decode(decoder: &::codable::Decoder<'_>) -> ::std::result::Result<Self, ::codable::DecodeError> {
                    let #values = decoder.container::<#keys>()?;
                    #(#decodes)*
                    Ok(#construct)
                }
            }
        }
    }
}

/// Memberwise decode used when no custom routine is needed: every key is
/// decoded into the field of the same name.
pub fn memberwise_decodable(record: &Record, mapping: &KeyMapping) -> TokenStream {
    let name = &record.ident;
    let keys = record.keys_ident();
    let values = container_ident();
    let decodes = mapping.cases.iter().map(|case| {
        let ident = &case.ident;
        let variant = case.variant();
        quote! {
            let #ident = #values.decode(#keys::#variant)?;
        }
    });
    let assigned: Vec<&Ident> = mapping.cases.iter().map(|c| &c.ident).collect();
    let construct = construct(record, &assigned);

    quote! {
        impl ::codable::Decodable for #name {
            fn decode(decoder: &::codable::Decoder<'_>) -> ::std::result::Result<Self, ::codable::DecodeError> {
                let #values = decoder.container::<#keys>()?;
                #(#decodes)*
                Ok(#construct)
            }
        }
    }
}

/// Container binding that member names cannot shadow.
fn container_ident() -> Ident {
    Ident::new("values", Span::mixed_site())
}

/// `Self { .. }` with decoded fields moved in and every other stored field
/// taken from its initializer.
fn construct(record: &Record, assigned: &[&Ident]) -> TokenStream {
    let fields = record.members().filter(|m| !m.is_computed()).map(|m| {
        let ident = &m.ident;
        if assigned.contains(&ident) {
            quote! { #ident }
        } else {
            let init = m.initializer_tokens();
            quote! { #ident: #init }
        }
    });

    quote! { Self { #(#fields),* } }
}
