// ABOUTME: Hiking pace model and turnaround-time estimation
// ABOUTME: Computes the clock time by which a hiker should turn back toward the trailhead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Turnaround / timeline estimation
//!
//! Implements the classic safety-planning rule: estimate the round-trip
//! duration from distance, elevation, and fitness, then turn back once half
//! of it has elapsed.

use cairn_core::models::{Fitness, TripData};
use chrono::{NaiveTime, Timelike};
use tracing::debug;

use crate::hiking_constants::pace;

/// Parse an "HH:MM" 24-hour clock string into (hour, minute)
///
/// Accepts single-digit hours ("6:05"). Returns `None` for anything that is
/// not a valid clock time; callers degrade gracefully rather than fail.
#[must_use]
pub fn parse_clock(clock: &str) -> Option<(u32, u32)> {
    NaiveTime::parse_from_str(clock.trim(), "%H:%M")
        .ok()
        .map(|t| (t.hour(), t.minute()))
}

/// Hour component of a start time, if parseable
#[must_use]
pub fn start_hour(start_time: &str) -> Option<u32> {
    parse_clock(start_time).map(|(hour, _)| hour)
}

/// Estimated hiking speed after the elevation penalty, floored at 1 km/h
///
/// The penalty follows a Naismith-style adjustment: half a km/h off the base
/// pace for every 500 m of vertical gain.
#[must_use]
pub fn adjusted_speed_kmh(elevation_m: f64, fitness: Fitness) -> f64 {
    let base = match fitness {
        Fitness::Low => pace::LOW_FITNESS_KMH,
        Fitness::Medium => pace::MEDIUM_FITNESS_KMH,
        Fitness::High => pace::HIGH_FITNESS_KMH,
    };
    let penalty = pace::GAIN_PENALTY_KMH * (elevation_m / pace::GAIN_STEP_M);
    (base - penalty).max(pace::MIN_SPEED_KMH)
}

/// Estimated round-trip duration in hours, including the fixed 10% buffer
#[must_use]
pub fn estimated_duration_hours(trip: &TripData, fitness: Fitness) -> f64 {
    let speed = adjusted_speed_kmh(trip.elevation_m, fitness);
    (trip.distance_km / speed) * pace::TIME_BUFFER
}

/// Compute the "must turn around by" clock time for a trip
///
/// The turnaround point is the start time plus half the estimated round-trip
/// duration, with the hour wrapped modulo 24 (no date rollover tracking).
/// The result is formatted `H:MM`: minutes are zero-padded but the hour is
/// not, matching the established display behavior ("6:05" renders as
/// "6:05", not "06:05").
///
/// Unparseable start times fall back to midnight rather than failing.
#[must_use]
pub fn compute_turnaround(trip: &TripData, start_time: &str, fitness: Fitness) -> String {
    let (start_h, start_m) = parse_clock(start_time).unwrap_or_else(|| {
        debug!("unparseable start time {start_time:?}, assuming 0:00");
        (0, 0)
    });

    let half_duration_min = estimated_duration_hours(trip, fitness) / 2.0 * 60.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Safe: duration is non-negative and far below u64 range
    let total_min = u64::from(start_h * 60 + start_m) + half_duration_min.round() as u64;

    let hour = (total_min / 60) % 24;
    let minute = total_min % 60;
    format!("{hour}:{minute:02}")
}
