// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hash contribution.
//!
//! Feeds every coding field into the hasher in schema order, so two values
//! that are `==` hash the same within a process. Floating point fields have
//! no `Hash` impl and contribute their bit pattern instead.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::parse::{ModelSchema, TypeKind};

/// Generates `impl Hash` over every coding field.
pub fn generate(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let receiver = quote!(self);
    let contributions = schema.coding_fields.iter().map(|field| {
        let value = field.access(&receiver);
        let hashed = match (field.kind, field.nullable) {
            (TypeKind::Floating, false) => quote! { #value.to_bits() },
            (TypeKind::Floating, true) => quote! { #value.map(|value| value.to_bits()) },
            _ => value
        };
        quote! { ::core::hash::Hash::hash(&#hashed, state); }
    });

    quote! {
        impl ::core::hash::Hash for #ident {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                #(#contributions)*
            }
        }
    }
}
