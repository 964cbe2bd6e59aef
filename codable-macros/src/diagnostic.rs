//! Diagnostics raised while expanding a record.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote_spanned};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mistake {
    /// No member made it into the key mapping.
    Empty,
}

impl Mistake {
    pub fn id(self) -> &'static str {
        match self {
            Mistake::Empty => "empty",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Mistake::Empty => "no codable members found",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Mistake::Empty => Severity::Warning,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Diagnostic {
    pub mistake: Mistake,
    pub span: Span,
}

pub trait DiagnosticSink {
    fn diagnose(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics for one expansion.
#[derive(Default)]
pub struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl DiagnosticSink for Diagnostics {
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.reported.push(diagnostic);
    }
}

impl Diagnostics {
    #[cfg(test)]
    pub fn reported(&self) -> &[Diagnostic] {
        &self.reported
    }

    /// Render the collected diagnostics as items.
    ///
    /// Stable proc macros cannot emit warnings directly, so each warning is
    /// the use of a deprecated constant carrying the message, spanned at
    /// the reported site.
    pub fn to_tokens(&self) -> TokenStream {
        self.reported
            .iter()
            .map(|diagnostic| {
                let mistake = diagnostic.mistake;
                let message = mistake.message();
                let marker = format_ident!("codable_block_{}", mistake.id(), span = diagnostic.span);
                match mistake.severity() {
                    Severity::Warning => quote_spanned! {diagnostic.span=>
                        const _: () = {
                            #[deprecated(note = #message)]
                            #[allow(non_upper_case_globals)]
                            const #marker: () = ();
                            let _ = #marker;
                        };
                    },
                }
            })
            .collect()
    }
}
