// ABOUTME: Weighted risk-factor accumulator producing the aggregate trip safety verdict
// ABOUTME: Scores distance, elevation, timing, weather, temperature, and data quality in fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Risk factor accumulation
//!
//! Pure, total, deterministic scoring: every rule either contributes
//! positive points with an itemized [`RiskFactor`] or contributes nothing.
//! There is no error path; missing trail data surfaces as the Uncertainty
//! factor instead of a failure.

use cairn_core::models::{
    Experience, Fitness, RiskAnalysis, RiskFactor, RiskLevel, TripData, UserProfile,
};
use tracing::trace;

use crate::conditions::condition_matches;
use crate::hiking_constants::{
    elevation_limits, late_start, risk_points, temperature, trail_limits, weather_keywords,
};
use crate::timeline::start_hour;

/// Distance comfort limit for an experience level (km)
#[must_use]
pub const fn distance_limit_km(experience: Experience) -> f64 {
    match experience {
        Experience::Beginner => trail_limits::BEGINNER_DISTANCE_KM,
        Experience::Intermediate => trail_limits::INTERMEDIATE_DISTANCE_KM,
        Experience::Advanced => trail_limits::ADVANCED_DISTANCE_KM,
    }
}

/// Elevation gain comfort limit for a fitness level (m)
#[must_use]
pub const fn elevation_limit_m(fitness: Fitness) -> f64 {
    match fitness {
        Fitness::Low => elevation_limits::LOW_FITNESS_GAIN_M,
        Fitness::Medium => elevation_limits::MEDIUM_FITNESS_GAIN_M,
        Fitness::High => elevation_limits::HIGH_FITNESS_GAIN_M,
    }
}

/// Accumulator recording only positive-scoring findings
struct FactorList {
    score: u32,
    factors: Vec<RiskFactor>,
}

impl FactorList {
    const fn new() -> Self {
        Self {
            score: 0,
            factors: Vec::new(),
        }
    }

    fn add(&mut self, name: &str, points: u32, description: &str) {
        self.score += points;
        self.factors.push(RiskFactor {
            name: name.into(),
            score: points,
            description: description.into(),
        });
    }
}

/// Compute the aggregate risk verdict for a trip
///
/// Rules fire in a fixed order (Distance, Elevation, Timing, Weather,
/// Temperature, Uncertainty) so the factor list is stable across calls with
/// identical inputs. The total score is unbounded above; multiple major
/// findings can stack well past the High threshold, which remains the top
/// tier.
#[must_use]
pub fn compute_risk(user: &UserProfile, trip: &TripData, start_time: &str) -> RiskAnalysis {
    let mut findings = FactorList::new();

    // 1. Distance vs. experience.
    let dist_limit = distance_limit_km(user.experience);
    if trip.distance_km > dist_limit * trail_limits::OVERREACH_MULTIPLIER {
        findings.add(
            "Distance",
            risk_points::MAJOR,
            "Distance is significantly longer than recommended for your experience level",
        );
    } else if trip.distance_km > dist_limit {
        findings.add(
            "Distance",
            risk_points::MINOR,
            "Distance is at the upper end of your comfort range",
        );
    }

    // 2. Elevation vs. fitness.
    let elev_limit = elevation_limit_m(user.fitness);
    if trip.elevation_m > elev_limit * trail_limits::OVERREACH_MULTIPLIER {
        findings.add(
            "Elevation",
            risk_points::MAJOR,
            "Very steep climb for your fitness level",
        );
    } else if trip.elevation_m > elev_limit {
        findings.add(
            "Elevation",
            risk_points::MINOR,
            "Significant elevation gain for your fitness level",
        );
    }

    // 3. Timing. An unparseable start time contributes no timing factor.
    if let Some(hour) = start_hour(start_time) {
        if hour >= late_start::AFTERNOON_START_HOUR {
            if trip.distance_km > late_start::LONG_ROUTE_KM {
                findings.add(
                    "Timing",
                    risk_points::MAJOR,
                    "Late start on a long route brings a risk of hiking in the dark",
                );
            } else {
                findings.add("Timing", risk_points::MINOR, "Late start; watch sunset times");
            }
        }
    }

    // 4. Weather keywords; the two branches are mutually exclusive, hazard wins.
    if condition_matches(&trip.weather_condition, weather_keywords::HAZARD) {
        findings.add(
            "Weather",
            risk_points::MAJOR,
            "Hazardous weather conditions forecast",
        );
    } else if condition_matches(&trip.weather_condition, weather_keywords::CAUTION) {
        findings.add(
            "Weather",
            risk_points::MINOR,
            "Conditions may reduce visibility or traction",
        );
    }

    // 5. Temperature ladder, independent of rule 4. First matching branch
    //    wins: extreme heat, then hot, then freezing, then cold-and-wet.
    if trip.temp_c > temperature::EXTREME_HEAT_C {
        findings.add(
            "Temperature",
            risk_points::MAJOR,
            "Extreme heat; dehydration risk",
        );
    } else if trip.temp_c > temperature::HOT_C {
        findings.add(
            "Temperature",
            risk_points::MINOR,
            "Hot conditions; extra water required",
        );
    } else if trip.temp_c < temperature::FREEZING_C {
        findings.add(
            "Temperature",
            risk_points::MAJOR,
            "Freezing temperatures; hypothermia risk",
        );
    } else if trip.temp_c < temperature::COLD_C
        && condition_matches(&trip.weather_condition, weather_keywords::WET_OR_WINDY)
    {
        findings.add(
            "Temperature",
            risk_points::MINOR,
            "Cold combined with wet or windy conditions",
        );
    }

    // 6. Missing data. Providers supply 0 when a real value is unknown.
    if trip.distance_km == 0.0 || trip.elevation_m == 0.0 {
        findings.add(
            "Uncertainty",
            risk_points::MINOR,
            "Missing key trail data; verify distance and elevation locally",
        );
    }

    let level = RiskLevel::from_score(findings.score);
    trace!(
        score = findings.score,
        level = %level,
        factors = findings.factors.len(),
        "risk accumulation complete"
    );

    RiskAnalysis {
        level,
        score: findings.score,
        color: level.color(),
        factors: findings.factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(experience: Experience, fitness: Fitness) -> UserProfile {
        UserProfile {
            experience,
            fitness,
        }
    }

    fn clear_trip(distance_km: f64, elevation_m: f64) -> TripData {
        TripData {
            distance_km,
            elevation_m,
            weather_condition: "Clear".into(),
            temp_c: 18.0,
            ..TripData::default()
        }
    }

    #[test]
    fn test_benign_trip_scores_zero() {
        let analysis = compute_risk(
            &user(Experience::Advanced, Fitness::High),
            &clear_trip(10.0, 400.0),
            "08:00",
        );
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.level, RiskLevel::Low);
        assert!(analysis.factors.is_empty());
    }

    #[test]
    fn test_distance_boundaries_for_each_experience_level() {
        for (experience, limit) in [
            (Experience::Beginner, 5.0),
            (Experience::Intermediate, 12.0),
            (Experience::Advanced, 20.0),
        ] {
            let at_limit = compute_risk(
                &user(experience, Fitness::High),
                &clear_trip(limit, 100.0),
                "08:00",
            );
            assert_eq!(at_limit.score, 0, "{experience}: at-limit is not over");

            let over = compute_risk(
                &user(experience, Fitness::High),
                &clear_trip(limit + 0.1, 100.0),
                "08:00",
            );
            assert_eq!(over.score, 1, "{experience}: just over is minor");

            let far_over = compute_risk(
                &user(experience, Fitness::High),
                &clear_trip(limit * 1.5 + 0.1, 100.0),
                "08:00",
            );
            assert_eq!(far_over.score, 2, "{experience}: 1.5x over is major");
        }
    }

    #[test]
    fn test_elevation_exactly_at_overreach_boundary_is_minor() {
        // 1.5 x 800 = 1200 exactly; the rule requires strictly greater.
        let analysis = compute_risk(
            &user(Experience::Advanced, Fitness::Medium),
            &clear_trip(5.0, 1200.0),
            "08:00",
        );
        assert_eq!(analysis.score, 1);
        assert_eq!(analysis.factors[0].name, "Elevation");
    }

    #[test]
    fn test_afternoon_start_scales_with_distance() {
        let short = compute_risk(
            &user(Experience::Advanced, Fitness::High),
            &clear_trip(4.0, 100.0),
            "14:00",
        );
        assert_eq!(short.score, 1);
        assert_eq!(short.factors[0].name, "Timing");

        let long = compute_risk(
            &user(Experience::Advanced, Fitness::High),
            &clear_trip(10.0, 100.0),
            "14:00",
        );
        assert_eq!(long.score, 2);
    }

    #[test]
    fn test_start_before_fourteen_adds_no_timing_factor() {
        let analysis = compute_risk(
            &user(Experience::Advanced, Fitness::High),
            &clear_trip(10.0, 100.0),
            "13:59",
        );
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn test_weather_branches_are_mutually_exclusive() {
        let mut trip = clear_trip(4.0, 100.0);
        trip.weather_condition = "Windy with snow and thunderstorms".into();
        let analysis = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        // Hazard wins; the caution branch must not also fire.
        assert_eq!(analysis.score, 2);
        assert_eq!(analysis.factors.len(), 1);
        assert_eq!(analysis.factors[0].name, "Weather");
    }

    #[test]
    fn test_temperature_ladder_first_match_wins() {
        let mut trip = clear_trip(4.0, 100.0);

        trip.temp_c = 30.0; // not strictly greater, falls to the hot branch
        let hot = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        assert_eq!(hot.score, 1);

        trip.temp_c = 30.1;
        let extreme = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        assert_eq!(extreme.score, 2);

        trip.temp_c = -0.1;
        let freezing = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        assert_eq!(freezing.score, 2);
    }

    #[test]
    fn test_cold_and_wet_requires_both_conditions() {
        let mut trip = clear_trip(4.0, 100.0);
        trip.temp_c = 5.0;

        let dry = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        assert_eq!(dry.score, 0, "cold alone above freezing is not a factor");

        trip.weather_condition = "Light rain".into();
        let wet = compute_risk(&user(Experience::Advanced, Fitness::High), &trip, "08:00");
        // Weather caution (+1) plus cold-and-wet (+1).
        assert_eq!(wet.score, 2);
        assert_eq!(wet.factors[1].name, "Temperature");
    }

    #[test]
    fn test_missing_trail_data_adds_uncertainty() {
        let analysis = compute_risk(
            &user(Experience::Beginner, Fitness::Low),
            &clear_trip(0.0, 0.0),
            "08:00",
        );
        assert_eq!(analysis.score, 1);
        assert_eq!(analysis.level, RiskLevel::Low);
        assert_eq!(analysis.factors[0].name, "Uncertainty");
    }

    #[test]
    fn test_factor_order_matches_evaluation_order() {
        let trip = TripData {
            distance_km: 18.0,
            elevation_m: 1300.0,
            weather_condition: "Thunderstorms".into(),
            temp_c: 32.0,
            ..TripData::default()
        };
        let analysis = compute_risk(
            &user(Experience::Intermediate, Fitness::Medium),
            &trip,
            "15:00",
        );
        let names: Vec<&str> = analysis.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Distance", "Elevation", "Timing", "Weather", "Temperature"]
        );
    }

    #[test]
    fn test_compute_risk_is_deterministic_and_stateless() {
        let trip = TripData {
            distance_km: 18.0,
            elevation_m: 1200.0,
            weather_condition: "Thunderstorms".into(),
            temp_c: 32.0,
            ..TripData::default()
        };
        let profile = user(Experience::Intermediate, Fitness::Medium);
        let first = compute_risk(&profile, &trip, "15:00");
        let second = compute_risk(&profile, &trip, "15:00");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unparseable_start_time_skips_timing_only() {
        let analysis = compute_risk(
            &user(Experience::Advanced, Fitness::High),
            &clear_trip(10.0, 100.0),
            "late afternoon",
        );
        assert_eq!(analysis.score, 0);
    }
}
