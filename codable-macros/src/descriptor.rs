//! Member descriptors: scanner facts merged with directive resolution.

use syn::ext::IdentExt;
use syn::Ident;

use crate::directive::resolve;
use crate::scan::RawMember;

#[derive(Clone, Debug)]
pub struct MemberDescriptor {
    pub ident: Ident,
    pub wire_key: String,
    pub included: bool,
    pub is_computed: bool,
    pub declared_type: Option<Ident>,
}

impl MemberDescriptor {
    pub fn source_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Build one descriptor per surviving member, in declaration order.
///
/// Once an included computed member forces a typed decode routine, stored
/// members without a bare type name cannot be decoded and are dropped.
pub fn build(members: Vec<RawMember>) -> Vec<MemberDescriptor> {
    let resolved: Vec<_> = members
        .into_iter()
        .map(|member| {
            let resolution = resolve(&member);
            (member, resolution)
        })
        .collect();

    let needs_typed_decode = resolved
        .iter()
        .any(|(member, resolution)| resolution.included && member.has_computed_body);

    resolved
        .into_iter()
        .filter(|(member, _)| {
            !needs_typed_decode || member.has_computed_body || member.declared_type.is_some()
        })
        .map(|(member, resolution)| MemberDescriptor {
            wire_key: resolution
                .rename_to
                .unwrap_or_else(|| member.source_name()),
            ident: member.name,
            included: resolution.included,
            is_computed: member.has_computed_body,
            declared_type: member.declared_type,
        })
        .collect()
}
