// ABOUTME: Hiking safety constants and threshold tables for trip risk analysis
// ABOUTME: Centralizes every tuned number used by the risk, warning, pace, and pack estimators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Hiking safety constants based on common trip-planning guidance
//!
//! These values are tuned for day hikes and mirror widely used rules of
//! thumb (Naismith-style pace adjustment, the "turn back by half time" rule,
//! ten-essentials pack weights). They are deliberately split into two
//! independent threshold systems: the cumulative risk accumulator and the
//! categorical warning chips are different mechanisms and are never unified.

/// Round-trip distance comfort limits by experience level
pub mod trail_limits {
    /// Comfortable round-trip distance for beginners (km)
    pub const BEGINNER_DISTANCE_KM: f64 = 5.0;

    /// Comfortable round-trip distance for intermediate hikers (km)
    pub const INTERMEDIATE_DISTANCE_KM: f64 = 12.0;

    /// Comfortable round-trip distance for advanced hikers (km)
    pub const ADVANCED_DISTANCE_KM: f64 = 20.0;

    /// Multiplier above the comfort limit that marks a significant overreach
    pub const OVERREACH_MULTIPLIER: f64 = 1.5;
}

/// Vertical gain comfort limits by fitness level
pub mod elevation_limits {
    /// Comfortable total gain at low fitness (m)
    pub const LOW_FITNESS_GAIN_M: f64 = 300.0;

    /// Comfortable total gain at medium fitness (m)
    pub const MEDIUM_FITNESS_GAIN_M: f64 = 800.0;

    /// Comfortable total gain at high fitness (m)
    pub const HIGH_FITNESS_GAIN_M: f64 = 1500.0;
}

/// Start-time thresholds for daylight planning
pub mod late_start {
    /// Start hour (24h) at or after which a start counts as an afternoon start
    pub const AFTERNOON_START_HOUR: u32 = 14;

    /// Distance above which an afternoon start risks finishing in the dark (km)
    pub const LONG_ROUTE_KM: f64 = 5.0;
}

/// Weather keyword sets matched case-insensitively against free-text conditions
pub mod weather_keywords {
    /// Conditions treated as outright hazardous
    pub const HAZARD: &[&str] = &["storm", "thunder", "snow", "blizzard"];

    /// Conditions that reduce visibility or traction
    pub const CAUTION: &[&str] = &["rain", "wind", "fog"];

    /// Subset that triggers the red Storm chip
    pub const STORM: &[&str] = &["storm", "thunder"];

    /// Wet/windy subset used by the cold-and-wet temperature rule
    pub const WET_OR_WINDY: &[&str] = &["rain", "wind"];
}

/// Temperature thresholds for the risk accumulator and pack estimator
pub mod temperature {
    /// Above this, extreme heat and dehydration risk (Celsius)
    pub const EXTREME_HEAT_C: f64 = 30.0;

    /// Above this, hot conditions needing extra water (Celsius)
    pub const HOT_C: f64 = 27.0;

    /// Below this, hypothermia risk (Celsius)
    pub const FREEZING_C: f64 = 0.0;

    /// Below this, cold enough to compound wet or windy conditions (Celsius)
    pub const COLD_C: f64 = 10.0;

    /// Above this, carried water is multiplied for heat (Celsius)
    pub const EXTRA_WATER_C: f64 = 25.0;
}

/// Point values for risk factors
pub mod risk_points {
    /// Contribution of a major finding
    pub const MAJOR: u32 = 2;

    /// Contribution of a minor finding
    pub const MINOR: u32 = 1;
}

/// Warning chip thresholds
///
/// Independent of the accumulator thresholds above; the chips are tactical
/// single-hazard tags while the score is a cumulative weighted verdict.
pub mod chip_thresholds {
    /// Red Heat chip at or above this (Celsius)
    pub const HEAT_RED_C: f64 = 30.0;

    /// Orange Heat chip at or above this (Celsius)
    pub const HEAT_ORANGE_C: f64 = 27.0;

    /// Red Cold chip at or below this (Celsius)
    pub const COLD_RED_C: f64 = 0.0;

    /// Yellow Steep chip above this average grade (meters gained per km)
    pub const STEEP_GRADE_M_PER_KM: f64 = 60.0;
}

/// Hiking pace model for the turnaround estimator
pub mod pace {
    /// Base speed at low fitness (km/h)
    pub const LOW_FITNESS_KMH: f64 = 3.0;

    /// Base speed at medium fitness (km/h)
    pub const MEDIUM_FITNESS_KMH: f64 = 4.0;

    /// Base speed at high fitness (km/h)
    pub const HIGH_FITNESS_KMH: f64 = 5.0;

    /// Speed penalty per step of vertical gain (km/h per `GAIN_STEP_M`)
    pub const GAIN_PENALTY_KMH: f64 = 0.5;

    /// Vertical gain step size for the penalty (m)
    pub const GAIN_STEP_M: f64 = 500.0;

    /// Floor on adjusted speed; never zero or negative (km/h)
    pub const MIN_SPEED_KMH: f64 = 1.0;

    /// Fixed buffer applied to the estimated duration (10%)
    pub const TIME_BUFFER: f64 = 1.1;
}

/// Pack weight model for the ten-essentials estimator
pub mod pack {
    /// Base pack weight: shelter layer, first aid, navigation, headlamp (kg)
    pub const BASE_KG: f64 = 3.5;

    /// Water carried per distance segment (kg per `WATER_SEGMENT_KM`)
    pub const WATER_KG_PER_SEGMENT: f64 = 0.5;

    /// Distance segment for water planning (km)
    pub const WATER_SEGMENT_KM: f64 = 5.0;

    /// Water multiplier in hot conditions
    pub const HEAT_WATER_MULTIPLIER: f64 = 1.5;

    /// Food carried per distance segment (kg per `FOOD_SEGMENT_KM`)
    pub const FOOD_KG_PER_SEGMENT: f64 = 0.5;

    /// Distance segment for food planning (km)
    pub const FOOD_SEGMENT_KM: f64 = 20.0;

    /// Baseline spare layers (kg)
    pub const BASE_LAYERS_KG: f64 = 0.5;

    /// Extra insulation below the cold threshold (kg)
    pub const COLD_LAYERS_KG: f64 = 1.0;

    /// Rain shell when rain is forecast (kg)
    pub const RAIN_SHELL_KG: f64 = 0.5;
}

/// Ultralight score bands, a coarse gamified readiness score
///
/// The score is a fixed discrete set, not a continuous function; never
/// interpolate between bands.
pub mod ultralight {
    /// Pack under 4 kg
    pub const SUB_4KG_SCORE: u32 = 98;

    /// Pack under 6 kg
    pub const SUB_6KG_SCORE: u32 = 85;

    /// Pack under 8 kg
    pub const SUB_8KG_SCORE: u32 = 65;

    /// Pack under 10 kg
    pub const SUB_10KG_SCORE: u32 = 45;

    /// Everything heavier
    pub const HEAVY_SCORE: u32 = 30;
}
