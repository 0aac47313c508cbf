// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Serialization key enumeration.
//!
//! # Generated Code
//!
//! For a `Recipe` with `codingMembers = ["age: i64"]`:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! pub enum RecipeCodingKey {
//!     Age,
//!     Id,
//!     PublicIdentifier,
//!     Name,
//!     CreatedAt,
//!     UpdatedAt,
//!     DeletedAt,
//! }
//!
//! impl RecipeCodingKey {
//!     pub const ALL: &'static [Self] = &[/* every variant */];
//!     pub const fn as_str(&self) -> &'static str { /* "age", "id", ... */ }
//!     pub fn from_key(key: &str) -> Option<Self> { /* inverse of as_str */ }
//! }
//!
//! impl model_core::CodingKey for RecipeCodingKey { /* delegates */ }
//! impl model_core::Model for Recipe { type CodingKey = RecipeCodingKey; /* ... */ }
//! ```
//!
//! Variant names are the PascalCase field names; wire names are the field
//! names themselves.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::model::parse::{FieldSpec, ModelSchema};

/// Name of the key enumeration for `schema`.
pub fn key_enum(schema: &ModelSchema) -> Ident {
    schema.ident_with("CodingKey")
}

/// Generates the key enumeration and `impl Model`.
pub fn generate(schema: &ModelSchema) -> TokenStream {
    let vis = &schema.vis;
    let ident = &schema.ident;
    let key_enum = key_enum(schema);
    let type_name = schema.name_str();

    let variants: Vec<Ident> = schema.coding_fields.iter().map(FieldSpec::key_variant).collect();
    let names: Vec<String> = schema.coding_fields.iter().map(FieldSpec::name).collect();
    let variant_docs = names.iter().map(|name| format!(" Key of `{}`.", name));

    let enum_doc = format!(" Serialization keys of [`{}`], in encoding order.", type_name);

    quote! {
        #[doc = #enum_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #key_enum {
            #(
                #[doc = #variant_docs]
                #variants,
            )*
        }

        impl #key_enum {
            /// Every key, in encoding order.
            pub const ALL: &'static [Self] = &[#(Self::#variants),*];

            /// Wire names of every key, in encoding order.
            pub const NAMES: &'static [&'static str] = &[#(#names),*];

            /// Wire name of the key.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            /// Look a key up by its wire name.
            #[must_use]
            pub fn from_key(key: &str) -> ::core::option::Option<Self> {
                match key {
                    #(#names => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None
                }
            }
        }

        impl ::model_core::CodingKey for #key_enum {
            const ALL: &'static [Self] = #key_enum::ALL;

            fn as_str(&self) -> &'static str {
                #key_enum::as_str(self)
            }

            fn from_key(key: &str) -> ::core::option::Option<Self> {
                #key_enum::from_key(key)
            }
        }

        impl ::model_core::Model for #ident {
            type CodingKey = #key_enum;

            const TYPE_NAME: &'static str = #type_name;

            fn id(&self) -> &str {
                #ident::id(self)
            }
        }
    }
}
