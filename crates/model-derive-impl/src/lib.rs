// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedural macro behind `model-derive`.
//!
//! This crate is an implementation detail. Depend on `model-derive`, which
//! re-exports the [`model`](macro@model) attribute together with the runtime
//! traits the generated code implements.
//!
//! # Pipeline
//!
//! ```text
//! #[model(...)] struct ──► ModelSchema ──► Vec<Fragment> ──► struct + impls
//!                          (validate)      (synthesize)      (splice)
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod model;
mod utils;

use proc_macro::TokenStream;

/// Attribute macro turning a plain struct into a persisted record model.
///
/// # Overview
///
/// One directive declares which fields are serialized, which take part in
/// shallow equality and what extra setup every constructor runs. From it the
/// macro generates storage for the lifecycle fields every record carries,
/// equality, hashing, a key enumeration and `serde` support.
///
/// # Arguments
///
/// All three are required, each exactly once, in any order:
///
/// | Argument | Value | Meaning |
/// |----------|-------|---------|
/// | `comparableMembers` | `["field", ...]` | Fields compared by `properties_equal`; `name` is always added |
/// | `codingMembers` | `["field: Type", ...]` | Serialized fields; a trailing `?` makes a field `Option<Type>` |
/// | `uselessInitializations` | `"field = expr; ..."` | Assignments run at the end of every constructor |
///
/// # Implicit Fields
///
/// Every model gets these coding fields after the declared ones:
///
/// | Field | Type | |
/// |-------|------|-|
/// | `id` | `&str` | Accessor over `public_identifier`; encoded, never decoded |
/// | `public_identifier` | `String` | Stored |
/// | `name` | `String` | Stored |
/// | `created_at` | `Timestamp` | Stored |
/// | `updated_at` | `Timestamp` | Stored |
/// | `deleted_at` | `Option<Timestamp>` | Stored |
///
/// Declaring any of them on the struct is an error.
///
/// # Generated Items
///
/// For a struct named `Recipe`:
///
/// - `impl PropertiesEqual for Recipe`
/// - `impl PartialEq for Recipe` (plus `Eq` when every coding member is
///   `String` or an integer)
/// - `impl Hash for Recipe`
/// - `enum RecipeCodingKey` and `impl Model for Recipe`
/// - `impl Deserialize for Recipe` / `impl Serialize for Recipe`; decoding
///   reads a keyed map and rejects sequence input
/// - `impl Default for Recipe`
/// - `Recipe::new(...)` with one argument per stored coding field
///
/// A coding member that is not `String`, an integer or a float must implement `PartialEq`, `Hash`,
/// `Default`, `Serialize` and `Deserialize`.
///
/// Struct fields that are not coding members are set to
/// `Default::default()` by every constructor.
///
/// # Example
///
/// ```rust,ignore
/// use model_derive::model;
///
/// #[model(
///     comparableMembers = ["age"],
///     codingMembers = ["age: i64", "nickname: String?"],
///     uselessInitializations = "status = 1"
/// )]
/// #[derive(Debug, Clone)]
/// pub struct Recipe {
///     pub age: i64,
///     pub nickname: Option<String>,
///     pub status: i32,
/// }
///
/// let recipe = Recipe::default();
/// assert_eq!(recipe.status, 1);
/// assert_eq!(recipe.id(), "");
/// ```
///
/// # Errors
///
/// Invalid directives are compile errors pointing at the offending argument:
/// a wrong argument count, a missing, unknown or repeated label, a value of
/// the wrong shape, a malformed field descriptor, a member the struct does
/// not declare or an implicit field declared by hand. The attribute only
/// applies to non-generic structs with named fields.
#[proc_macro_attribute]
pub fn model(args: TokenStream, input: TokenStream) -> TokenStream {
    model::expand(args, input)
}
