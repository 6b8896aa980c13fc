// ABOUTME: Core types for the Cairn trip planning platform
// ABOUTME: Foundation crate with domain models and unified error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

#![deny(unsafe_code)]

//! # Cairn Core
//!
//! Foundation crate providing shared types for the Cairn trip planning
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **models**: Domain models (`TripData`, `UserProfile`, `RiskAnalysis`, warning chips)

/// Unified error handling for provider, parser, and configuration boundaries
pub mod errors;

/// Core data models (`TripData`, `UserProfile`, risk and warning types)
pub mod models;

pub use errors::{AppError, AppResult};
pub use models::{
    ChipSeverity, Experience, Fitness, GroundingSource, ReportSections, RiskAnalysis, RiskColor,
    RiskFactor, RiskLevel, TripData, TripReport, UserProfile, WarningChip, WarningKind,
};
