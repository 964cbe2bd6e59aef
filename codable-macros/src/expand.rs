//! The classification and synthesis pass, and its expansion for one record.

use proc_macro2::{Span, TokenStream};
use quote::quote;

use crate::decode::{memberwise_decodable, DecodeRoutine};
use crate::descriptor::{self, MemberDescriptor};
use crate::diagnostic::{DiagnosticSink, Diagnostics};
use crate::encode::memberwise_encodable;
use crate::keys::KeyMapping;
use crate::record::Record;
use crate::scan::{self, RawMember};

/// Everything synthesized for a record with at least one codable member.
pub struct Artifacts {
    pub descriptors: Vec<MemberDescriptor>,
    pub key_mapping: KeyMapping,
    pub decode_routine: Option<DecodeRoutine>,
}

/// Classify `members` and synthesize the key mapping and, when a computed
/// member is included, the decode routine. Reports to `sink` and returns
/// `None` when no member qualifies.
pub fn synthesize(
    members: Vec<RawMember>,
    site: Span,
    sink: &mut dyn DiagnosticSink,
) -> Option<Artifacts> {
    let descriptors = descriptor::build(members);
    let key_mapping = KeyMapping::synthesize(&descriptors, site, sink)?;
    let decode_routine = DecodeRoutine::synthesize(&descriptors);

    Some(Artifacts {
        descriptors,
        key_mapping,
        decode_routine,
    })
}

impl Artifacts {
    pub fn to_tokens(&self, record: &Record) -> TokenStream {
        let keys = self.key_mapping.to_tokens(record);
        let encodable = memberwise_encodable(record, &self.descriptors);
        let decodable = match &self.decode_routine {
            Some(routine) => routine.to_tokens(record),
            None => memberwise_decodable(record, &self.key_mapping),
        };

        quote! {
            #keys
            #encodable
            #decodable
        }
    }
}

pub fn expand(record: &Record) -> TokenStream {
    let mut diagnostics = Diagnostics::default();
    let members = scan::scan(&record.items);
    let artifacts = synthesize(members, record.ident.span(), &mut diagnostics);

    let declaration = record.declaration();
    let accessors = record.accessors();
    let generated = match artifacts {
        Some(artifacts) => match artifacts.key_mapping.check_variants() {
            Ok(()) => artifacts.to_tokens(record),
            Err(err) => err.to_compile_error(),
        },
        None => TokenStream::new(),
    };
    let warnings = diagnostics.to_tokens();

    quote! {
        #declaration
        #accessors
        #generated
        #warnings
    }
}
