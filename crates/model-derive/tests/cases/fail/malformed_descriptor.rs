// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_derive::model;

#[model(comparableMembers = [], codingMembers = ["age"], uselessInitializations = "")]
#[allow(dead_code)]
pub struct Recipe {
    pub age: i64,
}

fn main() {}
