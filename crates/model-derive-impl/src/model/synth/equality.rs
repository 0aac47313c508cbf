// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shallow and full equality.
//!
//! Both comparisons conjoin per-field `==` checks left to right. They differ
//! only in the fields they visit:
//!
//! | Comparison | Fields |
//! |------------|--------|
//! | `properties_equal` | `comparable_fields` (user list + `name`) |
//! | `PartialEq::eq` | every coding field, the read-only `id` included |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, ext::IdentExt};

use crate::{
    model::parse::{ModelSchema, TypeKind},
    utils::fields::conjoin
};

/// Generates `impl PropertiesEqual` over the comparable fields.
pub fn properties_equal(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let checks = schema
        .comparable_fields
        .iter()
        .map(|field| comparable_check(schema, field));
    let body = conjoin(checks);

    quote! {
        impl ::model_core::PropertiesEqual for #ident {
            fn properties_equal(&self, other: &Self) -> bool {
                #body
            }
        }
    }
}

/// Generates `impl PartialEq` over every coding field.
///
/// `Eq` is added only when every declared field is text or an integer. The
/// implicit fields are always `Eq`; any other declared type may hold a float
/// (`Vec<f64>`, `Option<f32>`), so it leaves `Eq` to the user.
pub fn full_equality(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let lhs = quote!(self);
    let rhs = quote!(other);
    let checks = schema.coding_fields.iter().map(|field| {
        let left = field.access(&lhs);
        let right = field.access(&rhs);
        quote! { #left == #right }
    });
    let body = conjoin(checks);

    let eq = if schema
        .declared_fields()
        .iter()
        .all(|field| matches!(field.kind, TypeKind::Text | TypeKind::Integer))
    {
        quote! { impl ::core::cmp::Eq for #ident {} }
    } else {
        TokenStream::new()
    };

    quote! {
        impl ::core::cmp::PartialEq for #ident {
            fn eq(&self, other: &Self) -> bool {
                #body
            }
        }

        #eq
    }
}

fn comparable_check(schema: &ModelSchema, field: &Ident) -> TokenStream {
    let lhs = quote!(self);
    let rhs = quote!(other);
    match schema.coding_field(&field.unraw().to_string()) {
        Some(spec) => {
            let left = spec.access(&lhs);
            let right = spec.access(&rhs);
            quote! { #left == #right }
        }
        None => quote! { self.#field == other.#field }
    }
}
