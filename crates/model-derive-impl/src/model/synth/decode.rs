// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decoding constructor.
//!
//! Generates `impl Deserialize` reading the model as a keyed map. Only
//! `visit_map` is implemented, so sequence input (a JSON array, a tuple-style
//! binary format) fails with `invalid_type`:
//!
//! | Field | Behaviour |
//! |-------|-----------|
//! | Required | Must be present, otherwise `missing_field` |
//! | Nullable | Decoded if present; absent or `null` gives `None` |
//! | Read-only (`id`) | Never decoded; an incoming value is skipped |
//! | Unknown key | Skipped |
//! | Repeated key | `duplicate_field` |
//!
//! After every field is read, struct fields outside the schema are
//! defaulted and the extra initializations run.
//!
//! `id` is derived from `public_identifier` and has no storage to decode
//! into; the encoder still writes it.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::keys::key_enum;
use crate::{model::parse::ModelSchema, utils::fields::construct};

/// Generates `impl Deserialize` for the model.
pub fn generate(schema: &ModelSchema) -> TokenStream {
    let ident = &schema.ident;
    let key_enum = key_enum(schema);
    let type_name = schema.name_str();
    let expecting = format!("struct {}", type_name);

    let mut slots = Vec::new();
    let mut arms = Vec::new();
    let mut finals = Vec::new();
    let mut assigns = Vec::new();

    for field in schema.writable_fields() {
        let field_ident = &field.ident;
        let slot = format_ident!("__{}", field.ident);
        let name = field.name();
        let variant = field.key_variant();
        let stored = field.field_type();

        slots.push(quote! {
            let mut #slot: ::core::option::Option<#stored> = ::core::option::Option::None;
        });

        arms.push(quote! {
            ::core::option::Option::Some(#key_enum::#variant) => {
                if #slot.is_some() {
                    return ::core::result::Result::Err(
                        <__A::Error as ::model_core::serde::de::Error>::duplicate_field(#name)
                    );
                }
                #slot = ::core::option::Option::Some(map.next_value()?);
            }
        });

        finals.push(if field.nullable {
            quote! {
                let #slot = #slot.flatten();
            }
        } else {
            quote! {
                let #slot = match #slot {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => {
                        return ::core::result::Result::Err(
                            <__A::Error as ::model_core::serde::de::Error>::missing_field(#name)
                        );
                    }
                };
            }
        });

        assigns.push(quote! { #field_ident: #slot });
    }

    let construct = construct(schema, &assigns);

    quote! {
        impl<'de> ::model_core::serde::Deserialize<'de> for #ident {
            fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: ::model_core::serde::Deserializer<'de>
            {
                struct __Visitor;

                impl<'de> ::model_core::serde::de::Visitor<'de> for __Visitor {
                    type Value = #ident;

                    fn expecting(
                        &self,
                        formatter: &mut ::core::fmt::Formatter<'_>
                    ) -> ::core::fmt::Result {
                        formatter.write_str(#expecting)
                    }

                    fn visit_map<__A>(
                        self,
                        mut map: __A
                    ) -> ::core::result::Result<#ident, __A::Error>
                    where
                        __A: ::model_core::serde::de::MapAccess<'de>
                    {
                        #(#slots)*

                        while let ::core::option::Option::Some(key) =
                            map.next_key::<::std::string::String>()?
                        {
                            match #key_enum::from_key(&key) {
                                #(#arms)*
                                _ => {
                                    let _ = map.next_value::<::model_core::serde::de::IgnoredAny>()?;
                                }
                            }
                        }

                        #(#finals)*

                        ::core::result::Result::Ok(#construct)
                    }
                }

                deserializer.deserialize_struct(#type_name, #key_enum::NAMES, __Visitor)
            }
        }
    }
}
