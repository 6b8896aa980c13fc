// ABOUTME: Report provider abstraction for structured trip report generation
// ABOUTME: Defines the ReportRequest input record and the async ReportProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Core report provider abstraction
//!
//! Implementations must populate every `TripData` field from real-world
//! lookups where possible. When a provider cannot produce a real distance or
//! elevation it supplies `0.0`; the risk engine detects this and flags it
//! via the Uncertainty factor rather than silently understating risk.

use async_trait::async_trait;
use cairn_core::errors::AppResult;
use cairn_core::models::{TripReport, UserProfile};
use serde::{Deserialize, Serialize};

/// One trip report request as collected from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Trail or route name as entered by the user
    pub trail_name: String,
    /// Optional region hint for disambiguation ("North Cascades, WA")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Planned trailhead start time, "HH:MM" 24-hour
    pub start_time: String,
    /// Hiker profile used for personalized report wording
    pub user: UserProfile,
}

/// Universal interface for trip report providers
#[async_trait]
pub trait ReportProvider: Send + Sync {
    /// Provider name (e.g., "synthetic")
    fn name(&self) -> &'static str;

    /// Generate a structured trip report for the requested trail
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying report source fails or returns a
    /// response that cannot be parsed into report sections
    async fn generate_report(&self, request: &ReportRequest) -> AppResult<TripReport>;
}
