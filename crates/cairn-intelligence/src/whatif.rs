// ABOUTME: What-if recomputation harness for interactive exploration of perturbed trips
// ABOUTME: Applies named deltas to canonical inputs and re-runs every estimator on one snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! What-if exploration
//!
//! Answers "what if it were 5 degrees colder and I started 2 hours later?"
//! without a new round trip to the report provider. Each call builds one
//! hypothetical snapshot from the canonical inputs plus the current delta
//! set and recomputes every derived output from it; the canonical values are
//! never mutated and no state survives between calls.

use cairn_core::models::{Fitness, RiskAnalysis, TripData, UserProfile, WarningChip};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::pack::{compute_ul_score, estimate_pack_weight};
use crate::risk::compute_risk;
use crate::timeline::{compute_turnaround, parse_clock};
use crate::warnings::compute_warnings;

/// Named perturbations applied to the canonical trip and profile
///
/// The default delta set is the identity: exploring with it reproduces the
/// canonical outputs exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WhatIfDeltas {
    /// Temperature shift in Celsius
    pub temp_delta_c: f64,
    /// Distance shift in km; the resulting distance is floored at 1 km
    pub distance_delta_km: f64,
    /// Start-hour shift; the resulting hour is clamped to [0, 23]
    pub start_hour_delta: i32,
    /// Adjustment to the derived pack weight, applied before UL banding
    pub weight_delta_kg: f64,
    /// Replace the hiker's fitness level for this scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_override: Option<Fitness>,
    /// Replace the canonical weather string for this scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_override: Option<String>,
}

/// One fully recomputed hypothetical scenario
///
/// Every derived output is computed from the same hypothetical snapshot,
/// never from a mix of old and new delta values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    /// The perturbed trip observations
    pub trip: TripData,
    /// The (possibly fitness-overridden) profile in effect
    pub user: UserProfile,
    /// The perturbed start time as "HH:MM"
    pub start_time: String,
    /// Recomputed risk verdict
    pub risk: RiskAnalysis,
    /// Recomputed warning chips
    pub warnings: Vec<WarningChip>,
    /// Recomputed turnaround clock time
    pub turnaround: String,
    /// Recomputed pack weight including the weight delta (kg)
    pub pack_weight_kg: f64,
    /// Recomputed ultralight score for the adjusted weight
    pub ultralight_score: u32,
}

/// Shift a start time's hour, clamped to [0, 23], keeping the minutes
///
/// An unparseable start time is passed through unchanged; the deltaless
/// semantics of the downstream estimators then apply as-is.
fn shift_start_time(start_time: &str, hour_delta: i32) -> String {
    parse_clock(start_time).map_or_else(
        || start_time.to_owned(),
        |(hour, minute)| {
            #[allow(clippy::cast_possible_wrap)] // Safe: hour is 0..=23
            let shifted = (hour as i32 + hour_delta).clamp(0, 23);
            format!("{shifted:02}:{minute:02}")
        },
    )
}

/// Build the hypothetical snapshot and recompute every derived output
///
/// Pure and idempotent: re-invoking with the identical delta set reproduces
/// identical results with no residue from any prior delta set.
#[must_use]
pub fn explore(
    user: &UserProfile,
    trip: &TripData,
    start_time: &str,
    deltas: &WhatIfDeltas,
) -> WhatIfScenario {
    let hypo_trip = TripData {
        distance_km: (trip.distance_km + deltas.distance_delta_km).max(1.0),
        temp_c: trip.temp_c + deltas.temp_delta_c,
        weather_condition: deltas
            .weather_override
            .clone()
            .unwrap_or_else(|| trip.weather_condition.clone()),
        ..trip.clone()
    };
    let hypo_user = UserProfile {
        experience: user.experience,
        fitness: deltas.fitness_override.unwrap_or(user.fitness),
    };
    let hypo_start = shift_start_time(start_time, deltas.start_hour_delta);

    let pack_weight_kg =
        ((estimate_pack_weight(&hypo_trip) + deltas.weight_delta_kg).max(0.0) * 10.0).round()
            / 10.0;

    trace!(
        distance_km = hypo_trip.distance_km,
        temp_c = hypo_trip.temp_c,
        start = %hypo_start,
        "recomputing what-if scenario"
    );

    WhatIfScenario {
        risk: compute_risk(&hypo_user, &hypo_trip, &hypo_start),
        warnings: compute_warnings(&hypo_trip, &hypo_start),
        turnaround: compute_turnaround(&hypo_trip, &hypo_start, hypo_user.fitness),
        ultralight_score: compute_ul_score(pack_weight_kg, &hypo_trip),
        pack_weight_kg,
        trip: hypo_trip,
        user: hypo_user,
        start_time: hypo_start,
    }
}
