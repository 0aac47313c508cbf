// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_derive::{Model, PropertiesEqual, model};

#[model(
    comparableMembers = ["age"],
    codingMembers = ["age: i64"],
    uselessInitializations = "status = 0"
)]
#[derive(Debug, Clone)]
pub struct Recipe {
    pub age: i64,
    pub status: i32,
}

fn main() {
    let recipe = Recipe::default();
    assert_eq!(recipe.age, 0);
    assert_eq!(recipe.status, 0);
    assert_eq!(recipe.id(), "");
    assert!(recipe.properties_equal(&recipe.clone()));
    assert_eq!(Recipe::TYPE_NAME, "Recipe");
    assert_eq!(Recipe::coding_keys().len(), 7);
}
