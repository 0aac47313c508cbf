// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use model_derive::{CodingKey, model};

#[model(comparableMembers = [], codingMembers = [], uselessInitializations = "")]
struct Tag {}

fn main() {
    let tag = Tag::default();
    let mut set = HashSet::new();
    set.insert(tag);
    assert_eq!(set.len(), 1);
    assert_eq!(TagCodingKey::count(), 6);
    assert_eq!(TagCodingKey::Id.as_str(), "id");
}
