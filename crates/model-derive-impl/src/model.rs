// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[model(...)]` expansion.
//!
//! # Architecture
//!
//! ```text
//! model.rs (entry point)
//! │
//! ├── parse            Directive → ModelSchema
//! │   ├── directive.rs labeled arguments
//! │   ├── field.rs     "name: Type?" descriptors, implicit fields
//! │   ├── init.rs      extra initialization statements
//! │   ├── schema.rs    validation and normalization
//! │   └── error.rs     SchemaError
//! │
//! └── synth            ModelSchema → Vec<Fragment>
//!     ├── members.rs   stored implicit fields, id()
//!     ├── equality.rs  PropertiesEqual, PartialEq, Eq
//!     ├── hash.rs      Hash
//!     ├── keys.rs      {Model}CodingKey, Model
//!     ├── decode.rs    Deserialize
//!     ├── encode.rs    Serialize
//!     └── init.rs      Default, new(...)
//! ```
//!
//! Expansion either emits the struct with every fragment, or the untouched
//! struct followed by one compile error. Nothing is generated from an
//! invalid directive.

pub mod parse;
pub mod synth;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Fields, Item, parse_macro_input};

use self::{
    parse::ModelSchema,
    synth::{Fragment, synthesize}
};

/// Main entry point for the `#[model]` attribute.
pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);
    expand_item(args.into(), item).into()
}

/// Expand one annotated item.
///
/// On failure the item is re-emitted as written so that later diagnostics
/// about it stay meaningful, followed by the schema error.
pub fn expand_item(args: TokenStream2, item: Item) -> TokenStream2 {
    match ModelSchema::from_directive(args, &item) {
        Ok(schema) => splice(item, synthesize(&schema)),
        Err(err) => {
            let errors = err.into_darling().write_errors();
            quote! {
                #item
                #errors
            }
        }
    }
}

/// Add the required fields to the struct body and emit the remaining
/// fragments after it.
fn splice(mut item: Item, fragments: Vec<Fragment>) -> TokenStream2 {
    if let Item::Struct(strukt) = &mut item
        && let Fields::Named(named) = &mut strukt.fields
    {
        for fragment in &fragments {
            if let Fragment::RequiredFields {
                fields, ..
            } = fragment
            {
                named.named.extend(fields.iter().cloned());
            }
        }
    }

    quote! {
        #item
        #(#fragments)*
    }
}
