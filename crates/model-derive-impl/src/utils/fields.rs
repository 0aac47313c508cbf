// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field assignment utilities shared by the initializer generators.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::parse::ModelSchema;

/// Build the struct from schema field assignments.
///
/// `assigns` covers the writable coding fields. Struct fields outside the
/// schema are filled with `Default::default()`, then the extra
/// initializations run on the finished value:
///
/// ```rust,ignore
/// {
///     let mut __model = Recipe { age, public_identifier, ..., status: Default::default() };
///     __model.status = 0;
///     __model
/// }
/// ```
///
/// Without extra initializations the struct literal is returned directly.
pub fn construct(schema: &ModelSchema, assigns: &[TokenStream]) -> TokenStream {
    let ident = &schema.ident;
    let extras = schema
        .extra_fields
        .iter()
        .map(|field| quote! { #field: ::core::default::Default::default() });
    let literal = quote! {
        #ident {
            #(#assigns,)*
            #(#extras,)*
        }
    };

    if schema.initializations.is_empty() {
        return literal;
    }

    let statements = schema.initializations.iter().map(|assignment| {
        let field = &assignment.field;
        let value = &assignment.value;
        quote! { __model.#field = #value; }
    });

    quote! {
        {
            let mut __model = #literal;
            #(#statements)*
            __model
        }
    }
}

/// Join boolean checks with `&&`, left to right.
///
/// An empty list is `true`.
pub fn conjoin(checks: impl IntoIterator<Item = TokenStream>) -> TokenStream {
    checks
        .into_iter()
        .reduce(|acc, check| quote! { #acc && #check })
        .unwrap_or_else(|| quote! { true })
}
