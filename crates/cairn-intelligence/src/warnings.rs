// ABOUTME: Categorical warning chip classifier for tactical single-hazard tags
// ABOUTME: Emits heat, cold, storm, late-start, and steepness chips independent of the risk score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Warning chip classification
//!
//! Chips are tactical, single-hazard tags with their own thresholds. They
//! are deliberately not derived from the cumulative risk score: a trip can
//! be `Low` risk overall and still carry a red Storm chip, and no invariant
//! ties the two systems together.

use cairn_core::models::{ChipSeverity, TripData, WarningChip, WarningKind};

use crate::conditions::condition_matches;
use crate::hiking_constants::{chip_thresholds, late_start, weather_keywords};
use crate::timeline::start_hour;

/// Classify a trip into zero or more warning chips
///
/// Rules are evaluated independently and in a fixed order; each kind can
/// appear at most once per call.
#[must_use]
pub fn compute_warnings(trip: &TripData, start_time: &str) -> Vec<WarningChip> {
    let mut chips = Vec::new();

    if trip.temp_c >= chip_thresholds::HEAT_RED_C {
        chips.push(WarningChip {
            kind: WarningKind::Heat,
            label: "Extreme Heat".into(),
            severity: ChipSeverity::Red,
        });
    } else if trip.temp_c >= chip_thresholds::HEAT_ORANGE_C {
        chips.push(WarningChip {
            kind: WarningKind::Heat,
            label: "High Heat".into(),
            severity: ChipSeverity::Orange,
        });
    }

    if trip.temp_c <= chip_thresholds::COLD_RED_C {
        chips.push(WarningChip {
            kind: WarningKind::Cold,
            label: "Freezing".into(),
            severity: ChipSeverity::Red,
        });
    }

    if condition_matches(&trip.weather_condition, weather_keywords::STORM) {
        chips.push(WarningChip {
            kind: WarningKind::Storm,
            label: "Storm Risk".into(),
            severity: ChipSeverity::Red,
        });
    }

    if let Some(hour) = start_hour(start_time) {
        if hour >= late_start::AFTERNOON_START_HOUR && trip.distance_km > late_start::LONG_ROUTE_KM
        {
            chips.push(WarningChip {
                kind: WarningKind::Late,
                label: "Late Start".into(),
                severity: ChipSeverity::Orange,
            });
        }
    }

    // Guard the division; a zero-distance trip has no meaningful grade.
    if trip.distance_km > 0.0
        && trip.elevation_m / trip.distance_km > chip_thresholds::STEEP_GRADE_M_PER_KM
    {
        chips.push(WarningChip {
            kind: WarningKind::Steep,
            label: "Steep Trail".into(),
            severity: ChipSeverity::Yellow,
        });
    }

    chips
}
