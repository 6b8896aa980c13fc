// ABOUTME: Main library entry point for the Cairn trip planning platform
// ABOUTME: Wires the risk engine, report providers, configuration, and logging together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

#![deny(unsafe_code)]

//! # Cairn Trip Planner
//!
//! A hiking trip-planning assistant core: an external report provider turns
//! a trail name into a structured trip report, and a deterministic local
//! risk engine layers a safety verdict, warning chips, timing, and packing
//! estimates on top of it.
//!
//! ## Architecture
//!
//! - **intelligence**: pure risk/derived-metrics engine (`cairn-intelligence`)
//! - **providers**: the report provider seam, text-section parsing, and a
//!   deterministic synthetic provider for offline use
//! - **models / errors**: shared domain types (`cairn-core`)
//! - **config / logging**: environment configuration and structured logging
//!
//! ## Example
//!
//! ```rust,no_run
//! use cairn_planner::intelligence::{compute_risk, compute_warnings};
//! use cairn_planner::providers::{ReportProvider, ReportRequest, SyntheticReportProvider};
//! use cairn_planner::models::{Experience, Fitness, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cairn_planner::errors::AppError> {
//!     let user = UserProfile {
//!         experience: Experience::Intermediate,
//!         fitness: Fitness::Medium,
//!     };
//!     let request = ReportRequest {
//!         trail_name: "Skyline Divide".into(),
//!         region: None,
//!         start_time: "08:00".into(),
//!         user,
//!     };
//!
//!     let provider = SyntheticReportProvider::new();
//!     let report = provider.generate_report(&request).await?;
//!
//!     let risk = compute_risk(&user, &report.trip, &request.start_time);
//!     let chips = compute_warnings(&report.trip, &request.start_time);
//!     println!("{}: {} chips", risk.level, chips.len());
//!     Ok(())
//! }
//! ```

/// Environment-based planner configuration
pub mod config;

/// Risk analysis and derived trip metrics (re-exported from `cairn-intelligence`)
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Report provider seam, parsing, and the synthetic provider
pub mod providers;

// Shared domain types and error handling from the foundation crate.
pub use cairn_core::errors;
pub use cairn_core::models;
