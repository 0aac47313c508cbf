// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # model-derive
//!
//! One crate, all features. Re-exports:
//! - the [`model`](macro@model) attribute from `model-derive-impl`
//! - all runtime types from `model-core` ([`Model`], [`PropertiesEqual`],
//!   [`CodingKey`], [`Timestamp`])

pub use model_core::*;
pub use model_derive_impl::model;
