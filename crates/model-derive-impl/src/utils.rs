// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for directive parsing and code generation.
//!
//! # Submodules
//!
//! - [`literals`] - Decoding of string and string-array literals
//! - [`fields`] - Struct construction and boolean conjunction helpers

pub mod fields;
pub mod literals;
