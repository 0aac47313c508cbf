// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Directive parsing and validation for `#[model(...)]`.
//!
//! # Parsing Strategy
//!
//! The directive takes exactly three labeled arguments, in any order:
//!
//! ```rust,ignore
//! #[model(
//!     comparableMembers = ["age"],
//!     codingMembers = ["age: i64", "nickname: String?"],
//!     uselessInitializations = "status = 0"
//! )]
//! pub struct Recipe { /* ... */ }
//! ```
//!
//! Arguments are tokenized loosely first ([`directive`]), then labels are
//! checked, then values are decoded, then the result is cross-checked
//! against the struct's own fields. darling's `FromMeta` is not used for the
//! arguments because label problems must surface as their own diagnostics
//! rather than darling's generic "unknown field" errors; darling still
//! carries the final error to the compiler.
//!
//! # Module Structure
//!
//! - [`directive`] - Argument tokenization and labels
//! - [`field`] - Coding member descriptors, type kinds, implicit fields
//! - [`init`] - Extra initialization statements
//! - [`schema`] - The validated [`ModelSchema`]
//! - [`error`] - [`SchemaError`] taxonomy
//!
//! # Data Structures
//!
//! ```text
//! ModelSchema
//! ├── ident: Ident                  (struct name, e.g. "Recipe")
//! ├── vis: Visibility
//! ├── comparable_fields: Vec<Ident> (user list + "name")
//! ├── coding_fields: Vec<FieldSpec> (user fields + 6 implicit)
//! │   └── FieldSpec
//! │       ├── ident: Ident
//! │       ├── ty: Type          (bare, no `?`)
//! │       ├── kind: TypeKind    (Text | Integer | Floating | Other)
//! │       ├── nullable: bool
//! │       └── read_only: bool   (only `id`)
//! ├── initializations: Vec<InitAssignment>
//! └── extra_fields: Vec<Ident>      (struct fields outside the schema)
//! ```

mod directive;
mod error;
mod field;
mod init;
mod schema;

pub use error::{SchemaError, SchemaErrorKind};
pub use field::{FieldSpec, IDENTITY, TypeKind, implicit_fields};
pub use init::InitAssignment;
pub use schema::ModelSchema;
