// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::hash::{BuildHasher, RandomState};

use model_derive::model;

/// Floating point fields get `PartialEq` and `Hash` but no `Eq`.
#[model(
    comparableMembers = [],
    codingMembers = ["weight: f64", "tags: Vec<String>"],
    uselessInitializations = ""
)]
pub struct Sample {
    pub weight: f64,
    pub tags: Vec<String>,
}

fn main() {
    let sample = Sample::default();
    assert_eq!(sample.weight, 0.0);
    assert!(sample.tags.is_empty());
    assert!(sample == Sample::default());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&sample), state.hash_one(&Sample::default()));
}
