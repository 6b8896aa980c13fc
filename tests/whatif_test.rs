// ABOUTME: Integration tests for the what-if recomputation harness
// ABOUTME: Verifies snapshot consistency, clamping, and idempotence across delta sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

#![allow(clippy::unwrap_used)]

use cairn_planner::intelligence::{explore, WhatIfDeltas};
use cairn_planner::models::{Experience, Fitness, RiskLevel, TripData, UserProfile, WarningKind};

fn canonical_user() -> UserProfile {
    UserProfile {
        experience: Experience::Intermediate,
        fitness: Fitness::Medium,
    }
}

fn canonical_trip() -> TripData {
    TripData {
        distance_km: 10.0,
        elevation_m: 600.0,
        weather_condition: "Partly cloudy".into(),
        temp_c: 22.0,
        sunset_time: Some("20:00".into()),
        elevation_profile: Some(vec![0.0, 300.0, 600.0, 300.0, 0.0]),
    }
}

#[test]
fn test_colder_and_later_scenario() {
    // "What if it were 5C colder and I started 2 hours later?"
    let deltas = WhatIfDeltas {
        temp_delta_c: -5.0,
        start_hour_delta: 2,
        ..WhatIfDeltas::default()
    };

    let scenario = explore(&canonical_user(), &canonical_trip(), "13:00", &deltas);

    assert!((scenario.trip.temp_c - 17.0).abs() < f64::EPSILON);
    assert_eq!(scenario.start_time, "15:00");
    // 15:00 start on a 10 km route now trips both the timing factor and
    // the Late chip from the same snapshot.
    assert!(scenario.risk.factors.iter().any(|f| f.name == "Timing"));
    assert!(scenario.warnings.iter().any(|c| c.kind == WarningKind::Late));
}

#[test]
fn test_switching_delta_sets_leaves_no_residue() {
    let user = canonical_user();
    let trip = canonical_trip();

    let stormy = WhatIfDeltas {
        weather_override: Some("Severe thunderstorms".into()),
        ..WhatIfDeltas::default()
    };
    let hot = WhatIfDeltas {
        temp_delta_c: 10.0,
        ..WhatIfDeltas::default()
    };

    let stormy_before = explore(&user, &trip, "09:00", &stormy);
    let _hot = explore(&user, &trip, "09:00", &hot);
    let stormy_after = explore(&user, &trip, "09:00", &stormy);

    assert_eq!(stormy_before, stormy_after);
    // The hot scenario's temperature must not leak into the storm scenario.
    assert!((stormy_after.trip.temp_c - 22.0).abs() < f64::EPSILON);
}

#[test]
fn test_elevation_profile_passes_through_untouched() {
    // The profile is display-only; perturbation never alters it.
    let scenario = explore(
        &canonical_user(),
        &canonical_trip(),
        "09:00",
        &WhatIfDeltas {
            distance_delta_km: 8.0,
            ..WhatIfDeltas::default()
        },
    );
    assert_eq!(
        scenario.trip.elevation_profile,
        canonical_trip().elevation_profile
    );
    assert_eq!(scenario.trip.sunset_time, canonical_trip().sunset_time);
}

#[test]
fn test_worst_case_compound_scenario_escalates_to_high() {
    let deltas = WhatIfDeltas {
        temp_delta_c: -25.0,     // 22 -> -3: freezing
        distance_delta_km: 10.0, // 10 -> 20: significantly over 12 km limit
        start_hour_delta: 7,     // 09:00 -> 16:00
        weather_override: Some("Blizzard conditions".into()),
        ..WhatIfDeltas::default()
    };

    let scenario = explore(&canonical_user(), &canonical_trip(), "09:00", &deltas);

    // Distance +2, timing +2, weather +2, temperature +2 = 8 or more.
    assert!(scenario.risk.score >= 8);
    assert_eq!(scenario.risk.level, RiskLevel::High);
    assert!(scenario.warnings.iter().any(|c| c.kind == WarningKind::Cold));
    assert!(scenario.warnings.iter().any(|c| c.kind == WarningKind::Late));
}

#[test]
fn test_scenario_serializes_for_ui_consumption() {
    let scenario = explore(
        &canonical_user(),
        &canonical_trip(),
        "09:00",
        &WhatIfDeltas::default(),
    );
    let json = serde_json::to_value(&scenario).unwrap();
    assert!(json.get("risk").is_some());
    assert!(json.get("warnings").is_some());
    assert!(json.get("turnaround").is_some());
    assert!(json.get("pack_weight_kg").is_some());
    assert!(json.get("ultralight_score").is_some());
}
