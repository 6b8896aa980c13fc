// ABOUTME: Domain models for hiking trip analysis
// ABOUTME: Defines trip observations, hiker profiles, risk analysis, and warning chip types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Core data models shared across the Cairn platform
//!
//! `TripData` and `UserProfile` are immutable inputs supplied per report
//! request; `RiskAnalysis` and `WarningChip` values have no independent
//! identity and are always derived fresh from current inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Observations for a single planned hike, produced by a report provider
///
/// When a provider cannot determine real distance or elevation it supplies
/// `0.0`, which the risk engine detects and flags rather than silently
/// understating risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TripData {
    /// Round-trip distance in kilometers (>= 0)
    pub distance_km: f64,
    /// Total vertical gain in meters (>= 0)
    pub elevation_m: f64,
    /// Free-text weather condition description (matched by keyword, case-insensitive)
    pub weather_condition: String,
    /// Ambient temperature in Celsius
    pub temp_c: f64,
    /// Sunset time as "HH:MM" 24-hour, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_time: Option<String>,
    /// Relative elevation samples for display; never consumed by risk math
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_profile: Option<Vec<f64>>,
}

/// Hiker experience level, governing the distance-risk threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    /// New to hiking; comfortable up to ~5 km round trips
    Beginner,
    /// Regular day hiker; comfortable up to ~12 km round trips
    Intermediate,
    /// Experienced hiker; comfortable up to ~20 km round trips
    Advanced,
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Hiker fitness level, governing elevation threshold, pace, and pack math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fitness {
    /// Low fitness: ~3 km/h base pace, 300 m comfortable gain
    Low,
    /// Medium fitness: ~4 km/h base pace, 800 m comfortable gain
    Medium,
    /// High fitness: ~5 km/h base pace, 1500 m comfortable gain
    High,
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Hiker profile consumed by every risk threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Experience level (distance thresholds)
    pub experience: Experience,
    /// Fitness level (elevation thresholds, pace, pack weight)
    pub fitness: Fitness,
}

/// One itemized, human-readable contribution to the total risk score
///
/// Only positive-scoring factors are ever recorded; a rule that contributes
/// zero points never appends a factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Short factor name ("Distance", "Weather", ...)
    pub name: String,
    /// Points this factor contributed (always > 0)
    pub score: u32,
    /// Human-readable explanation for display
    pub description: String,
}

/// Aggregate risk classification, a monotonic step function of the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 3
    Low,
    /// Score 3 or 4
    Moderate,
    /// Score 5 or 6
    Elevated,
    /// Score 7 and above (no tier exists above High; scores are unbounded)
    High,
}

impl RiskLevel {
    /// Map a total risk score to its level
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Self::Low,
            3..=4 => Self::Moderate,
            5..=6 => Self::Elevated,
            _ => Self::High,
        }
    }

    /// Display-tier color token for this level
    ///
    /// The token is an opaque ordinal; the UI maps it to an actual palette.
    #[must_use]
    pub const fn color(self) -> RiskColor {
        match self {
            Self::Low => RiskColor::Green,
            Self::Moderate => RiskColor::Yellow,
            Self::Elevated => RiskColor::Orange,
            Self::High => RiskColor::Red,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Elevated => write!(f, "Elevated"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Ordinal display-color tier attached to a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    /// Low tier
    Green,
    /// Moderate tier
    Yellow,
    /// Elevated tier
    Orange,
    /// High tier
    Red,
}

/// Full risk verdict for a trip: level, score, and itemized factors
///
/// Factor order equals evaluation order: Distance, Elevation, Timing,
/// Weather, Temperature, Uncertainty. The persistence layer may serialize
/// this verbatim; every field is required on reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Aggregate classification derived from `score`
    pub level: RiskLevel,
    /// Total accumulated risk points (unbounded above)
    pub score: u32,
    /// Itemized contributions in evaluation order
    pub factors: Vec<RiskFactor>,
    /// Display-color tier matching `level`
    pub color: RiskColor,
}

/// Categorical hazard tag kinds
///
/// `Remote` is reserved for trailhead-remoteness tagging by callers; the
/// classifier currently emits no rule for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    /// High ambient temperature
    Heat,
    /// Storm or thunder conditions
    Storm,
    /// Afternoon start on a long route
    Late,
    /// Steep average grade
    Steep,
    /// Remote trailhead (reserved, no classifier rule)
    Remote,
    /// Freezing conditions
    Cold,
}

/// Chip severity tier, independent of the aggregate risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipSeverity {
    /// Advisory
    Yellow,
    /// Caution
    Orange,
    /// Danger
    Red,
}

/// One tactical hazard chip
///
/// Chips use thresholds independent of the risk accumulator; a trip can be
/// `Low` risk overall and still carry a red Storm chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningChip {
    /// Hazard category
    pub kind: WarningKind,
    /// Short display label
    pub label: String,
    /// Severity tier
    pub severity: ChipSeverity,
}

/// The four delimited text sections of a generated trip report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReportSections {
    /// One-paragraph trip summary
    pub summary: String,
    /// Safety notes and hazards prose
    pub safety: String,
    /// Machine-readable `key: value` trail data block
    pub data: String,
    /// Long-form report body (markdown)
    pub content: String,
}

/// A web/maps grounding citation attached to a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Source page title
    pub title: String,
    /// Source URL
    pub url: String,
}

/// A complete structured trip report as returned by a report provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    /// Parsed report text sections
    pub sections: ReportSections,
    /// Structured trail observations extracted from the data section
    pub trip: TripData,
    /// Grounding citations, when the provider supplies them
    pub sources: Vec<GroundingSource>,
}
