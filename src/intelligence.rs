// ABOUTME: Intelligence module re-exports from the cairn-intelligence crate
// ABOUTME: Preserves planner-local import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! # Intelligence Module
//!
//! Risk analysis and derived trip metrics for the Cairn planner.
//!
//! This module re-exports the `cairn-intelligence` crate so planner code and
//! integration tests can use `cairn_planner::intelligence::*` paths.

pub use cairn_intelligence::*;

// Re-export submodules for path-based access
// (e.g. `cairn_planner::intelligence::hiking_constants::pace`).
pub use cairn_intelligence::{
    conditions, hiking_constants, pack, risk, timeline, warnings, whatif,
};
