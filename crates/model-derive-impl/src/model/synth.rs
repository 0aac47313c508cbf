// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration synthesis.
//!
//! Turns a validated [`ModelSchema`] into the ordered list of generated
//! fragments. Synthesis is a pure function of the schema: it cannot fail and
//! produces identical tokens for identical input.
//!
//! # Emission Order
//!
//! | # | Fragment | Field selection |
//! |---|----------|-----------------|
//! | 1 | [`Fragment::RequiredFields`] | stored implicit fields + `id()` accessor |
//! | 2 | [`Fragment::PropertiesEqual`] | `comparable_fields` |
//! | 3 | [`Fragment::FullEquality`] | all coding fields |
//! | 4 | [`Fragment::Hash`] | all coding fields |
//! | 5 | [`Fragment::CodingKeys`] | all coding fields |
//! | 6 | [`Fragment::Decode`] | writable coding fields |
//! | 7 | [`Fragment::Encode`] | all coding fields |
//! | 8 | [`Fragment::DefaultInit`] | writable coding fields |
//! | 9 | [`Fragment::MemberwiseInit`] | writable coding fields |
//!
//! The fragments are only valid together: the encoder and decoder name keys
//! through the enumeration from fragment 5, and everything reads the fields
//! added by fragment 1.

mod decode;
mod encode;
mod equality;
mod hash;
mod init;
mod keys;
mod members;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Field;

use super::parse::ModelSchema;

/// One generated declaration block.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Stored implicit fields, spliced into the struct body, plus the
    /// identity accessor emitted after it.
    RequiredFields {
        /// Fields appended to the struct.
        fields:    Vec<Field>,
        /// `impl` block with the `id()` accessor.
        accessors: TokenStream
    },

    /// `impl PropertiesEqual`.
    PropertiesEqual(TokenStream),

    /// `impl PartialEq` (and `Eq` when possible).
    FullEquality(TokenStream),

    /// `impl Hash`.
    Hash(TokenStream),

    /// `{Model}CodingKey` enumeration and `impl Model`.
    CodingKeys(TokenStream),

    /// `impl Deserialize`.
    Decode(TokenStream),

    /// `impl Serialize`.
    Encode(TokenStream),

    /// `impl Default`.
    DefaultInit(TokenStream),

    /// Inherent `new(...)`.
    MemberwiseInit(TokenStream)
}

impl Fragment {
    /// Short name of the artifact, for diagnostics and tests.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequiredFields { .. } => "required_fields",
            Self::PropertiesEqual(_) => "properties_equal",
            Self::FullEquality(_) => "full_equality",
            Self::Hash(_) => "hash",
            Self::CodingKeys(_) => "coding_keys",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
            Self::DefaultInit(_) => "default_init",
            Self::MemberwiseInit(_) => "memberwise_init"
        }
    }
}

/// Emits the items that follow the struct.
///
/// For [`Fragment::RequiredFields`] only the accessors are items; the fields
/// are spliced into the struct by the caller.
impl ToTokens for Fragment {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::RequiredFields {
                accessors, ..
            } => accessors.to_tokens(tokens),
            Self::PropertiesEqual(item)
            | Self::FullEquality(item)
            | Self::Hash(item)
            | Self::CodingKeys(item)
            | Self::Decode(item)
            | Self::Encode(item)
            | Self::DefaultInit(item)
            | Self::MemberwiseInit(item) => item.to_tokens(tokens)
        }
    }
}

/// Synthesize every fragment for `schema`, in emission order.
pub fn synthesize(schema: &ModelSchema) -> Vec<Fragment> {
    vec![
        members::generate(schema),
        Fragment::PropertiesEqual(equality::properties_equal(schema)),
        Fragment::FullEquality(equality::full_equality(schema)),
        Fragment::Hash(hash::generate(schema)),
        Fragment::CodingKeys(keys::generate(schema)),
        Fragment::Decode(decode::generate(schema)),
        Fragment::Encode(encode::generate(schema)),
        Fragment::DefaultInit(init::default_init(schema)),
        Fragment::MemberwiseInit(init::memberwise_init(schema)),
    ]
}

#[cfg(test)]
mod tests;
