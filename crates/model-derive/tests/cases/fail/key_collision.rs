// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_derive::model;

#[model(comparableMembers = [], codingMembers = ["field_1: i32", "field1: i32"], uselessInitializations = "")]
#[allow(dead_code)]
pub struct Grid {
    pub field_1: i32,
    pub field1: i32,
}

fn main() {}
