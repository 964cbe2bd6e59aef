//! Memberwise `Encodable` conformance.
//!
//! Encoding only reads members, so computed members in the key mapping are
//! written through their getter and no custom routine is ever needed.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::descriptor::MemberDescriptor;
use crate::keys::variant_ident;
use crate::record::Record;

pub fn memberwise_encodable(record: &Record, descriptors: &[MemberDescriptor]) -> TokenStream {
    let name = &record.ident;
    let keys = record.keys_ident();
    let values = Ident::new("values", Span::mixed_site());

    let writes = descriptors.iter().filter(|d| d.included).map(|d| {
        let ident = &d.ident;
        let variant = variant_ident(ident);
        let read = if d.is_computed {
            quote! { self.#ident() }
        } else {
            quote! { ::core::clone::Clone::clone(&self.#ident) }
        };
        quote! {
            #values.encode(#read, #keys::#variant)?;
        }
    });

    quote! {
        impl ::codable::Encodable for #name {
            fn encode(&self, encoder: &mut ::codable::Encoder) -> ::std::result::Result<(), ::codable::EncodeError> {
                let mut #values = encoder.container::<#keys>();
                #(#writes)*
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_reads_getter_for_computed() {
        let record: Record = parse_quote! {
            struct Entity {
                number: i64,
                #[codable_key("label")]
                label: String { self.number.to_string() }
            }
        };
        let descriptors = [
            MemberDescriptor {
                ident: Ident::new("number", Span::call_site()),
                wire_key: "number".into(),
                included: true,
                is_computed: false,
                declared_type: Some(parse_quote!(i64)),
            },
            MemberDescriptor {
                ident: Ident::new("label", Span::call_site()),
                wire_key: "label".into(),
                included: true,
                is_computed: true,
                declared_type: Some(parse_quote!(String)),
            },
        ];

        let tokens = memberwise_encodable(&record, &descriptors);
        let _: syn::ItemImpl = syn::parse2(tokens.clone()).unwrap();

        let rendered = tokens.to_string();
        assert!(rendered.contains("self . label ()"));
        assert!(rendered.contains("& self . number"));
    }
}
