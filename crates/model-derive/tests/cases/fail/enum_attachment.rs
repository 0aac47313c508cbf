// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_derive::model;

#[model(comparableMembers = [], codingMembers = [], uselessInitializations = "")]
#[allow(dead_code)]
enum Status {
    Active,
}

fn main() {}
