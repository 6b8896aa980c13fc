// ABOUTME: Pack weight estimation and gamified ultralight readiness scoring
// ABOUTME: Models base gear, water, food, and layers from distance, temperature, and forecast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Pack weight and ultralight score estimation
//!
//! A coarse ten-essentials model: fixed base gear plus water scaled by
//! distance and heat, food scaled by distance, and layers scaled by cold and
//! rain. The ultralight score maps the result onto a fixed discrete band
//! set; it is gamified by design and never interpolated.

use cairn_core::models::TripData;

use crate::conditions::condition_matches;
use crate::hiking_constants::{pack, temperature, ultralight};

/// Round to one decimal place, the display precision for pack weights
fn round_tenths(kg: f64) -> f64 {
    (kg * 10.0).round() / 10.0
}

/// Estimate the carried pack weight in kilograms, to one decimal place
#[must_use]
pub fn estimate_pack_weight(trip: &TripData) -> f64 {
    let mut water =
        (trip.distance_km / pack::WATER_SEGMENT_KM) * pack::WATER_KG_PER_SEGMENT;
    if trip.temp_c > temperature::EXTRA_WATER_C {
        water *= pack::HEAT_WATER_MULTIPLIER;
    }

    let food = (trip.distance_km / pack::FOOD_SEGMENT_KM) * pack::FOOD_KG_PER_SEGMENT;

    let mut layers = pack::BASE_LAYERS_KG;
    if trip.temp_c < temperature::COLD_C {
        layers += pack::COLD_LAYERS_KG;
    }
    if condition_matches(&trip.weather_condition, &["rain"]) {
        layers += pack::RAIN_SHELL_KG;
    }

    round_tenths(pack::BASE_KG + water + food + layers)
}

/// Map a pack weight onto the fixed ultralight score bands
///
/// Bands are strict upper bounds: a 4.0 kg pack is not under 4 kg and lands
/// in the 85 band. The trip argument is accepted for interface parity with
/// the other estimators; the banding currently depends on weight alone.
#[must_use]
pub fn compute_ul_score(weight_kg: f64, _trip: &TripData) -> u32 {
    if weight_kg < 4.0 {
        ultralight::SUB_4KG_SCORE
    } else if weight_kg < 6.0 {
        ultralight::SUB_6KG_SCORE
    } else if weight_kg < 8.0 {
        ultralight::SUB_8KG_SCORE
    } else if weight_kg < 10.0 {
        ultralight::SUB_10KG_SCORE
    } else {
        ultralight::HEAVY_SCORE
    }
}
