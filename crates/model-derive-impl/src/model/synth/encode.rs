// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Encoding procedure.
//!
//! Generates `impl Serialize` writing every coding field as a struct field,
//! the read-only `id` included. Nullable fields are written only when they
//! hold a value; otherwise the key is skipped.

use proc_macro2::TokenStream;
use quote::quote;

use super::keys::key_enum;
use crate::model::parse::ModelSchema;

/// Generates `impl Serialize` for the model.
pub fn generate(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let key_enum = key_enum(schema);
    let type_name = schema.name_str();
    let receiver = quote!(self);

    let required_count = schema.coding_fields.iter().filter(|f| !f.nullable).count();
    let present_counts = schema
        .coding_fields
        .iter()
        .filter(|f| f.nullable)
        .map(|field| {
            let value = field.access(&receiver);
            quote! { + usize::from(#value.is_some()) }
        });

    let writes = schema.coding_fields.iter().map(|field| {
        let value = field.access(&receiver);
        let variant = field.key_variant();
        let key = quote! { #key_enum::#variant.as_str() };

        if field.nullable {
            quote! {
                match &#value {
                    ::core::option::Option::Some(value) => {
                        ::model_core::serde::ser::SerializeStruct::serialize_field(
                            &mut state, #key, value
                        )?;
                    }
                    ::core::option::Option::None => {
                        ::model_core::serde::ser::SerializeStruct::skip_field(&mut state, #key)?;
                    }
                }
            }
        } else {
            quote! {
                ::model_core::serde::ser::SerializeStruct::serialize_field(
                    &mut state, #key, &#value
                )?;
            }
        }
    });

    quote! {
        impl ::model_core::serde::Serialize for #ident {
            fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
            where
                __S: ::model_core::serde::Serializer
            {
                let mut state = serializer.serialize_struct(
                    #type_name,
                    #required_count #(#present_counts)*
                )?;
                #(#writes)*
                ::model_core::serde::ser::SerializeStruct::end(state)
            }
        }
    }
}
