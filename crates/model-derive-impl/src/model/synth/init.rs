// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Default-value and full-argument constructors.
//!
//! Both constructors assign every writable coding field, default the struct
//! fields outside the schema, then run the extra initializations. The
//! read-only `id` gets neither a value nor a parameter.
//!
//! # Zero Values
//!
//! | Field | `Default::default()` |
//! |-------|----------------------|
//! | Nullable | `None` |
//! | `String` | `String::new()` |
//! | Integer | `0` |
//! | Float | `0.0` |
//! | Other `T` | `T::default()` |

use proc_macro2::TokenStream;
use quote::quote;

use crate::{model::parse::ModelSchema, utils::fields::construct};

/// Generates `impl Default` with per-kind zero values.
pub fn default_init(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let assigns: Vec<TokenStream> = schema
        .writable_fields()
        .map(|field| {
            let field_ident = &field.ident;
            let value = if field.nullable {
                quote! { ::core::option::Option::None }
            } else {
                field.kind.zero_value(&field.ty)
            };
            quote! { #field_ident: #value }
        })
        .collect();
    let construct = construct(schema, &assigns);

    quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                #construct
            }
        }
    }
}

/// Generates the inherent `new(...)` taking one argument per writable field.
///
/// Nullable fields take `Option<T>`; pass `None` to leave them empty.
pub fn memberwise_init(schema: &ModelSchema) -> TokenStream {
    let vis = &schema.vis;
    let ident = &schema.ident;
    let params = schema.writable_fields().map(|field| {
        let field_ident = &field.ident;
        let ty = field.field_type();
        quote! { #field_ident: #ty }
    });
    let assigns: Vec<TokenStream> = schema
        .writable_fields()
        .map(|field| {
            let field_ident = &field.ident;
            quote! { #field_ident }
        })
        .collect();
    let construct = construct(schema, &assigns);
    let doc = format!(" Create a [`{}`] from every stored schema field.", ident);

    quote! {
        impl #ident {
            #[doc = #doc]
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            #vis fn new(#(#params),*) -> Self {
                #construct
            }
        }
    }
}
