//! The record dialect accepted by `codable_block!`.
//!
//! A record is written like a struct with named members, extended with:
//!
//! - `name: Type = expr` for a stored member with an initial value,
//! - `name: Type { ... }` for a computed member (a getter body, or `get { ... }`),
//! - `name: Type { will_set { ... } did_set { ... } }` for a stored member
//!   with change observers,
//! - methods and associated constants, which land in an inherent `impl`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, token, Attribute, Block, Expr, Ident, ImplItem, Result, Stmt, Token, Type, Visibility};

use crate::directive;

mod kw {
    syn::custom_keyword!(get);
    syn::custom_keyword!(will_set);
    syn::custom_keyword!(did_set);
}

pub struct Record {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub items: Vec<RecordItem>,
}

pub enum RecordItem {
    Member(Member),
    /// A method or associated constant declared in the record body.
    Item(ImplItem),
}

pub struct Member {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub ty: Type,
    pub initializer: Option<Expr>,
    pub accessor: Option<Accessor>,
}

pub enum Accessor {
    Getter(Vec<Stmt>),
    Observers {
        will_set: Option<Block>,
        did_set: Option<Block>,
    },
}

impl Record {
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.items.iter().filter_map(|item| match item {
            RecordItem::Member(member) => Some(member),
            RecordItem::Item(_) => None,
        })
    }

    pub fn keys_ident(&self) -> Ident {
        format_ident!("{}CodingKeys", self.ident)
    }

    /// The struct declaration: every stored member becomes a field.
    pub fn declaration(&self) -> TokenStream {
        let attrs = &self.attrs;
        let vis = &self.vis;
        let name = &self.ident;
        let fields = self.members().filter(|m| !m.is_computed()).map(|m| {
            let attrs = directive::strip(&m.attrs);
            let vis = &m.vis;
            let ident = &m.ident;
            let ty = &m.ty;
            quote! { #(#attrs)* #vis #ident: #ty }
        });

        quote! {
            #(#attrs)*
            #vis struct #name {
                #(#fields),*
            }
        }
    }

    /// Getters for computed members, setters for observed members and the
    /// methods declared in the record body.
    pub fn accessors(&self) -> TokenStream {
        let name = &self.ident;
        let accessors: Vec<_> = self
            .items
            .iter()
            .filter_map(|item| match item {
                RecordItem::Member(member) => member.accessor_tokens(),
                RecordItem::Item(item) => Some(quote! { #item }),
            })
            .collect();

        if accessors.is_empty() {
            return TokenStream::new();
        }

        quote! {
            impl #name {
                #(#accessors)*
            }
        }
    }
}

impl Member {
    pub fn is_computed(&self) -> bool {
        matches!(self.accessor, Some(Accessor::Getter(_)))
    }

    /// Member name as it appears on the wire by default.
    pub fn source_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Expression a decoder uses for a field it does not read from the container.
    pub fn initializer_tokens(&self) -> TokenStream {
        match &self.initializer {
            Some(expr) => quote! { #expr },
            None => quote! { ::core::default::Default::default() },
        }
    }

    fn accessor_tokens(&self) -> Option<TokenStream> {
        let vis = &self.vis;
        let ident = &self.ident;
        let ty = &self.ty;

        match self.accessor.as_ref()? {
            Accessor::Getter(stmts) => {
                let attrs = directive::strip(&self.attrs);
                Some(quote! {
                    #(#attrs)*
                    #vis fn #ident(&self) -> #ty {
                        #(#stmts)*
                    }
                })
            }
            Accessor::Observers { will_set, did_set } => {
                let setter = format_ident!("set_{}", self.source_name(), span = ident.span());
                Some(quote! {
                    #[allow(unused_variables)]
                    #vis fn #setter(&mut self, new_value: #ty) {
                        #will_set
                        let old_value = ::core::mem::replace(&mut self.#ident, new_value);
                        #did_set
                    }
                })
            }
        }
    }
}

impl Parse for Record {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;

        if input.peek(Token![<]) {
            return Err(input.error("codable_block! does not support generic records"));
        }
        if !input.peek(token::Brace) {
            return Err(input.error("codable_block! expects a record with named members"));
        }

        let content;
        braced!(content in input);
        let mut items = Vec::new();
        while !content.is_empty() {
            items.push(content.parse()?);
        }

        if !input.is_empty() {
            return Err(input.error("codable_block! expects a single record"));
        }

        Ok(Record {
            attrs,
            vis,
            ident,
            items,
        })
    }
}

impl Parse for RecordItem {
    fn parse(input: ParseStream) -> Result<Self> {
        let ahead = input.fork();
        ahead.call(Attribute::parse_outer)?;
        ahead.parse::<Visibility>()?;
        if ahead.peek(Token![fn])
            || ahead.peek(Token![const])
            || ahead.peek(Token![async])
            || ahead.peek(Token![unsafe])
        {
            return input.parse().map(RecordItem::Item);
        }

        input.parse().map(RecordItem::Member)
    }
}

impl Parse for Member {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let initializer = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(Expr::parse_without_eager_brace(input)?)
        } else {
            None
        };

        let accessor = if input.peek(token::Brace) {
            Some(input.parse::<Accessor>()?)
        } else {
            None
        };

        if let (Some(Accessor::Getter(_)), Some(expr)) = (&accessor, &initializer) {
            return Err(syn::Error::new_spanned(
                expr,
                "computed member cannot have an initial value",
            ));
        }

        // A trailing comma is optional after an accessor block.
        if accessor.is_some() {
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        } else if !input.is_empty() {
            input.parse::<Token![,]>()?;
        }

        Ok(Member {
            attrs,
            vis,
            ident,
            ty,
            initializer,
            accessor,
        })
    }
}

impl Parse for Accessor {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        braced!(content in input);

        if (content.peek(kw::will_set) || content.peek(kw::did_set)) && content.peek2(token::Brace) {
            let mut will_set = None;
            let mut did_set = None;
            while !content.is_empty() {
                if content.peek(kw::will_set) && will_set.is_none() {
                    content.parse::<kw::will_set>()?;
                    will_set = Some(content.parse::<Block>()?);
                } else if content.peek(kw::did_set) && did_set.is_none() {
                    content.parse::<kw::did_set>()?;
                    did_set = Some(content.parse::<Block>()?);
                } else {
                    return Err(content.error("expected a single `will_set` or `did_set` observer"));
                }
            }
            return Ok(Accessor::Observers { will_set, did_set });
        }

        if content.peek(kw::get) && content.peek2(token::Brace) {
            content.parse::<kw::get>()?;
            let block: Block = content.parse()?;
            if !content.is_empty() {
                return Err(content.error("unexpected tokens after `get` accessor"));
            }
            return Ok(Accessor::Getter(block.stmts));
        }

        content.call(Block::parse_within).map(Accessor::Getter)
    }
}
