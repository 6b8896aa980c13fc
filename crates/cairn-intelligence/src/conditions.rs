// ABOUTME: Case-insensitive keyword matching over free-text weather descriptions
// ABOUTME: Shared by the risk accumulator, warning chips, and pack estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Weather condition keyword matching
//!
//! Report providers return free text ("Partly cloudy, afternoon
//! thunderstorms possible"), so matching is heuristic substring search over
//! a fixed keyword set. An empty condition string simply matches nothing.

/// Check whether a free-text condition mentions any of the given keywords
///
/// Keywords are expected lowercase; the condition is lowercased before the
/// substring search.
#[must_use]
pub fn condition_matches(condition: &str, keywords: &[&str]) -> bool {
    let lowered = condition.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
