// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_derive::model;

/// Model with optional members.
#[model(
    comparableMembers = ["nickname"],
    codingMembers = ["nickname: String?", "score: u32?"],
    uselessInitializations = ""
)]
pub struct Profile {
    pub nickname: Option<String>,
    pub score: Option<u32>,
}

fn main() {
    let profile = Profile::new(
        Some("ada".into()),
        None,
        "p-1".into(),
        "Ada".into(),
        Default::default(),
        Default::default(),
        None
    );
    assert_eq!(profile.id(), "p-1");
    assert_eq!(profile.score, None);
}
