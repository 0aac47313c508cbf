// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for fragment synthesis.
//!
//! Generated code is checked structurally: fragments are rendered to token
//! strings and compared against `quote!` snippets, so spacing never matters.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Item;

use super::{Fragment, synthesize};
use crate::model::parse::ModelSchema;

fn recipe_schema() -> ModelSchema {
    let item: Item = syn::parse_quote! {
        pub struct Recipe {
            pub age: i64,
            pub status: i32,
        }
    };
    ModelSchema::from_directive(
        quote! {
            comparableMembers = ["age"],
            codingMembers = ["age: i64"],
            uselessInitializations = "status = 0"
        },
        &item
    )
    .unwrap()
}

fn schema_for(item: Item, args: TokenStream) -> ModelSchema {
    ModelSchema::from_directive(args, &item).unwrap()
}

fn render(fragment: &Fragment) -> String {
    fragment.to_token_stream().to_string()
}

fn find<'a>(fragments: &'a [Fragment], name: &str) -> &'a Fragment {
    fragments
        .iter()
        .find(|fragment| fragment.name() == name)
        .unwrap()
}

fn contains(haystack: &str, needle: TokenStream) -> bool {
    haystack.contains(&needle.to_string())
}

#[test]
fn nine_fragments_in_emission_order() {
    let fragments = synthesize(&recipe_schema());
    let names: Vec<&str> = fragments.iter().map(Fragment::name).collect();
    assert_eq!(
        names,
        [
            "required_fields",
            "properties_equal",
            "full_equality",
            "hash",
            "coding_keys",
            "decode",
            "encode",
            "default_init",
            "memberwise_init"
        ]
    );
}

#[test]
fn synthesis_is_deterministic() {
    let first: Vec<String> = synthesize(&recipe_schema()).iter().map(render).collect();
    let second: Vec<String> = synthesize(&recipe_schema()).iter().map(render).collect();
    assert_eq!(first, second);
}

#[test]
fn required_fields_are_stored_implicit_fields() {
    let fragments = synthesize(&recipe_schema());
    let Fragment::RequiredFields {
        fields, ..
    } = &fragments[0]
    else {
        panic!("first fragment must be required_fields");
    };

    let names: Vec<String> = fields
        .iter()
        .map(|f| f.ident.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "public_identifier",
            "name",
            "created_at",
            "updated_at",
            "deleted_at"
        ]
    );
    let deleted_at = &fields[4].ty;
    assert_eq!(
        quote!(#deleted_at).to_string(),
        quote!(::core::option::Option<::model_core::Timestamp>).to_string()
    );
}

#[test]
fn required_fields_render_only_the_accessor() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(&fragments[0]);
    assert!(contains(&rendered, quote!(&self.public_identifier)));
    assert!(!rendered.contains("created_at"));
}

#[test]
fn properties_equal_compares_age_and_name() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "properties_equal"));
    assert!(contains(
        &rendered,
        quote!(self.age == other.age && self.name == other.name)
    ));
    assert!(!rendered.contains("created_at"));
}

#[test]
fn full_equality_compares_every_coding_field() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "full_equality"));
    assert!(contains(
        &rendered,
        quote! {
            self.age == other.age
                && self.id() == other.id()
                && self.public_identifier == other.public_identifier
                && self.name == other.name
                && self.created_at == other.created_at
                && self.updated_at == other.updated_at
                && self.deleted_at == other.deleted_at
        }
    ));
    assert!(contains(&rendered, quote!(impl ::core::cmp::Eq for Recipe {})));
}

#[test]
fn floating_field_suppresses_eq() {
    let schema = schema_for(
        syn::parse_quote! {
            struct Sample {
                weight: f64,
            }
        },
        quote! {
            comparableMembers = [],
            codingMembers = ["weight: f64"],
            uselessInitializations = ""
        }
    );
    let fragments = synthesize(&schema);
    let equality = render(find(&fragments, "full_equality"));
    assert!(!equality.contains("Eq for"));
    let hash = render(find(&fragments, "hash"));
    assert!(contains(&hash, quote!(&self.weight.to_bits())));
}

#[test]
fn nested_float_suppresses_eq() {
    let schema = schema_for(
        syn::parse_quote! {
            struct Series {
                samples: Vec<f64>,
            }
        },
        quote! {
            comparableMembers = [],
            codingMembers = ["samples: Vec<f64>"],
            uselessInitializations = ""
        }
    );
    let fragments = synthesize(&schema);
    let equality = render(find(&fragments, "full_equality"));
    assert!(contains(&equality, quote!(impl ::core::cmp::PartialEq for Series)));
    assert!(!equality.contains("Eq for Series {}"));
}

#[test]
fn shallow_equality_with_empty_list_compares_name() {
    let schema = schema_for(
        syn::parse_quote! {
            struct Bare {}
        },
        quote! {
            comparableMembers = [],
            codingMembers = [],
            uselessInitializations = ""
        }
    );
    let fragments = synthesize(&schema);
    let rendered = render(find(&fragments, "properties_equal"));
    assert!(contains(&rendered, quote!({ self.name == other.name })));
}

#[test]
fn duplicate_name_is_compared_twice() {
    let schema = schema_for(
        syn::parse_quote! {
            struct Tag {}
        },
        quote! {
            comparableMembers = ["name"],
            codingMembers = [],
            uselessInitializations = ""
        }
    );
    let fragments = synthesize(&schema);
    let rendered = render(find(&fragments, "properties_equal"));
    assert!(contains(
        &rendered,
        quote!(self.name == other.name && self.name == other.name)
    ));
}

#[test]
fn coding_keys_follow_schema_order() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "coding_keys"));
    assert!(contains(
        &rendered,
        quote! {
            pub const NAMES: &'static [&'static str] = &[
                "age",
                "id",
                "public_identifier",
                "name",
                "created_at",
                "updated_at",
                "deleted_at"
            ];
        }
    ));
    assert!(contains(&rendered, quote!(Self::PublicIdentifier => "public_identifier",)));
    assert!(contains(&rendered, quote!(impl ::model_core::Model for Recipe)));
}

#[test]
fn decode_never_assigns_identity() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "decode"));
    assert!(rendered.contains("__public_identifier"));
    assert!(rendered.contains("__age"));
    assert!(!rendered.contains("__id "));
    assert!(!contains(&rendered, quote!(RecipeCodingKey::Id)));
}

#[test]
fn decode_runs_extra_initialization() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "decode"));
    assert!(contains(&rendered, quote!(__model.status = 0;)));
}

#[test]
fn encode_writes_identity_and_skips_absent_nullable() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "encode"));
    assert!(contains(
        &rendered,
        quote!(&mut state, RecipeCodingKey::Id.as_str(), &self.id())
    ));
    assert!(contains(
        &rendered,
        quote!(6usize + usize::from(self.deleted_at.is_some()))
    ));
    assert!(rendered.contains("skip_field"));
}

#[test]
fn default_uses_zero_values() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "default_init"));
    assert!(contains(&rendered, quote!(age: 0,)));
    assert!(contains(
        &rendered,
        quote!(public_identifier: ::std::string::String::new(),)
    ));
    assert!(contains(&rendered, quote!(deleted_at: ::core::option::Option::None,)));
    assert!(contains(
        &rendered,
        quote!(status: ::core::default::Default::default(),)
    ));
    assert!(contains(&rendered, quote!(__model.status = 0;)));
}

#[test]
fn default_of_other_type_goes_through_default() {
    let schema = schema_for(
        syn::parse_quote! {
            struct Tagged {
                tags: Vec<String>,
            }
        },
        quote! {
            comparableMembers = [],
            codingMembers = ["tags: Vec<String>"],
            uselessInitializations = ""
        }
    );
    let fragments = synthesize(&schema);
    let rendered = render(find(&fragments, "default_init"));
    assert!(contains(
        &rendered,
        quote!(tags: <Vec<String> as ::core::default::Default>::default(),)
    ));
    assert!(!rendered.contains("__model"));
}

#[test]
fn memberwise_init_takes_writable_fields() {
    let fragments = synthesize(&recipe_schema());
    let rendered = render(find(&fragments, "memberwise_init"));
    assert!(contains(
        &rendered,
        quote! {
            pub fn new(
                age: i64,
                public_identifier: ::std::string::String,
                name: ::std::string::String,
                created_at: ::model_core::Timestamp,
                updated_at: ::model_core::Timestamp,
                deleted_at: ::core::option::Option<::model_core::Timestamp>
            ) -> Self
        }
    ));
    assert!(!contains(&rendered, quote!(id:)));
}
