// ABOUTME: Report provider integrations producing structured trip reports
// ABOUTME: Defines the provider seam, report-text parsing, and the synthetic offline provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! # Report Providers
//!
//! A report provider is the external collaborator that turns a trail name
//! into a structured [`cairn_core::models::TripReport`]. Real providers call
//! hosted generative models with web/maps grounding; the risk engine only
//! ever sees the already-resolved `TripData` they return and never awaits or
//! retries network operations itself.

/// Provider trait and request types
pub mod core;

/// Delimited report-text parsing into sections and trail data
pub mod sections;

/// Deterministic offline provider for development and testing
pub mod synthetic;

pub use self::core::{ReportProvider, ReportRequest};
pub use sections::{parse_sections, parse_trip_data};
pub use synthetic::SyntheticReportProvider;
