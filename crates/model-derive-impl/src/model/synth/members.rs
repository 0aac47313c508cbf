// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Required field declarations.
//!
//! Every model stores the same five lifecycle fields and exposes its
//! identity as a read-only view of `public_identifier`:
//!
//! ```rust,ignore
//! pub struct Recipe {
//!     pub age: i64,                              // user declared
//!     pub public_identifier: String,             // added
//!     pub name: String,                          // added
//!     pub created_at: Timestamp,                 // added
//!     pub updated_at: Timestamp,                 // added
//!     pub deleted_at: Option<Timestamp>,         // added
//! }
//!
//! impl Recipe {
//!     pub fn id(&self) -> &str { &self.public_identifier }
//! }
//! ```

use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Field, FieldMutability, Ident};

use super::Fragment;
use crate::model::parse::{FieldSpec, IDENTITY, ModelSchema, implicit_fields};

/// Generates the implicit stored fields and the identity accessor.
pub fn generate(schema: &ModelSchema) -> Fragment {
    let fields = implicit_fields()
        .iter()
        .filter(|spec| !spec.read_only)
        .map(|spec| stored_field(schema, spec))
        .collect();

    let ident = &schema.ident;
    let identity = format_ident!("{}", IDENTITY);
    let accessors = quote! {
        impl #ident {
            /// Identity of the record.
            ///
            /// Derived from `public_identifier`; it is serialized but never
            /// decoded.
            #[must_use]
            pub fn #identity(&self) -> &str {
                &self.public_identifier
            }
        }
    };

    Fragment::RequiredFields {
        fields,
        accessors
    }
}

fn stored_field(schema: &ModelSchema, spec: &FieldSpec) -> Field {
    let doc = format!(" Implicit `{}` field added by `#[model]`.", spec.name());
    Field {
        attrs:       vec![syn::parse_quote!(#[doc = #doc])],
        vis:         schema.vis.clone(),
        mutability:  FieldMutability::None,
        ident:       Some(Ident::new(&spec.name(), Span::call_site())),
        colon_token: Some(Default::default()),
        ty:          spec.field_type()
    }
}
