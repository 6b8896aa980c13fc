// ABOUTME: Hiking risk analysis and derived trip metrics engine
// ABOUTME: Pure, total, synchronous estimators layered over report provider output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

#![deny(unsafe_code)]

//! # Cairn Intelligence
//!
//! The deterministic core of the Cairn trip planning platform: pure
//! functions that turn trip observations and a hiker profile into a risk
//! verdict, warning chips, a turnaround time, and pack estimates.
//!
//! Every function here is synchronous, side-effect free, and total over its
//! documented input domain; callers may invoke them on every keystroke of an
//! interactive what-if session without debouncing concerns. All I/O — report
//! generation, persistence, rendering — lives in the main crate.
//!
//! ## Modules
//!
//! - **risk**: weighted risk-factor accumulator and level mapping
//! - **warnings**: categorical hazard chips with independent thresholds
//! - **timeline**: pace model and "turn back by" clock-time estimation
//! - **pack**: pack weight and ultralight score estimation
//! - **whatif**: recomputation harness over perturbed inputs
//! - **`hiking_constants`**: every tuned threshold, in one place

/// Weather condition keyword matching shared by the estimators
pub mod conditions;

/// Hiking safety constants and threshold tables
pub mod hiking_constants;

/// Pack weight and ultralight score estimation
pub mod pack;

/// Risk factor accumulation and aggregate verdicts
pub mod risk;

/// Turnaround and timeline estimation
pub mod timeline;

/// Warning chip classification
pub mod warnings;

/// What-if recomputation harness
pub mod whatif;

pub use pack::{compute_ul_score, estimate_pack_weight};
pub use risk::compute_risk;
pub use timeline::{compute_turnaround, parse_clock};
pub use warnings::compute_warnings;
pub use whatif::{explore, WhatIfDeltas, WhatIfScenario};
