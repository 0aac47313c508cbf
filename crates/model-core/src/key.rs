// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Serialization key enumeration.

use std::fmt::Debug;

/// Enumeration of the keys a model is encoded with.
///
/// Generated as `{Model}CodingKey`, one variant per serialized field in
/// encoding order. Encoders look names up with [`as_str`](Self::as_str),
/// decoders go the other way with [`from_key`](Self::from_key).
pub trait CodingKey: Copy + Eq + Debug + 'static {
    /// Every key, in encoding order.
    const ALL: &'static [Self];

    /// Wire name of the key.
    fn as_str(&self) -> &'static str;

    /// Look a key up by its wire name.
    ///
    /// Returns `None` for names the model does not know.
    fn from_key(key: &str) -> Option<Self>;

    /// Number of keys.
    fn count() -> usize {
        Self::ALL.len()
    }
}
