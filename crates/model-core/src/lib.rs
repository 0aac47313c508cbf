// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for model-derive.
//!
//! This crate provides the traits that `#[model(...)]` generated code
//! implements, plus the re-exports that generated code refers to. It can also
//! be used standalone for hand-written models.
//!
//! # Overview
//!
//! - [`Model`] - Implemented for every annotated struct
//! - [`PropertiesEqual`] - Shallow, business-value equality
//! - [`CodingKey`] - Serialization key enumeration
//! - [`Timestamp`] - Type of the implicit `created_at`/`updated_at`/`deleted_at` fields
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use model_core::prelude::*;
//!
//! fn same_content<M: Model>(a: &M, b: &M) -> bool {
//!     a.properties_equal(b)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod key;
pub mod prelude;

use std::hash::Hash;

/// Re-export chrono for generated code.
pub use chrono;
pub use key::CodingKey;
/// Re-export serde for generated code.
pub use serde;

/// Timestamp type of the implicit lifecycle fields.
///
/// `created_at`, `updated_at` and `deleted_at` are all stored as UTC
/// date-times. Its `Default` is the Unix epoch.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Shallow equality over a declared subset of fields.
///
/// Full equality (`PartialEq`) compares every serialized field, including
/// the identity and lifecycle timestamps. `properties_equal` compares only
/// the fields listed in `comparableMembers` plus `name`, which makes it
/// suitable for "same business content" checks between two records that
/// were stored at different times.
///
/// # Example
///
/// ```rust
/// use model_core::PropertiesEqual;
///
/// struct Tag {
///     label: String,
///     hits:  u32
/// }
///
/// impl PropertiesEqual for Tag {
///     fn properties_equal(&self, other: &Self) -> bool {
///         self.label == other.label
///     }
/// }
///
/// let a = Tag { label: "rust".into(), hits: 1 };
/// let b = Tag { label: "rust".into(), hits: 9 };
/// assert!(a.properties_equal(&b));
/// ```
pub trait PropertiesEqual {
    /// Returns `true` if every comparable field is equal in `self` and
    /// `other`.
    fn properties_equal(&self, other: &Self) -> bool;
}

/// Common interface of all generated models.
///
/// Binds the model to its key enumeration and exposes the derived identity.
/// The identity is a read-only view of `public_identifier`: it is written
/// when the model is serialized but never read back when it is decoded.
pub trait Model: PropertiesEqual + PartialEq + Hash + Default {
    /// Serialization key enumeration of this model.
    type CodingKey: CodingKey;

    /// Name of the model type (e.g. `"Recipe"`).
    const TYPE_NAME: &'static str;

    /// Derived identity of the record.
    fn id(&self) -> &str;

    /// All serialization keys in encoding order.
    fn coding_keys() -> &'static [Self::CodingKey] {
        <Self::CodingKey as CodingKey>::ALL
    }
}
