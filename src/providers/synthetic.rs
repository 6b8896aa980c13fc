// ABOUTME: Deterministic synthetic report provider for development and testing
// ABOUTME: Derives plausible trail reports from the trail name without any network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! # Synthetic Report Provider
//!
//! A provider for development, testing, and demonstration purposes. Unlike a
//! real grounded-model provider, the synthetic provider:
//!
//! - Requires no API key and performs no network I/O
//! - Produces deterministic reports: the same trail name always yields the
//!   same report
//! - Supports pre-loaded fixture reports for exact-value tests
//!
//! Generated reports go through the same delimited-text pipeline as real
//! provider responses, so the section parser is exercised end to end.

use async_trait::async_trait;
use cairn_core::errors::AppResult;
use cairn_core::models::{GroundingSource, TripData, TripReport};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::core::{ReportProvider, ReportRequest};
use super::sections::{parse_sections, parse_trip_data};

/// Weather menu the synthetic generator draws from
const WEATHER_MENU: [&str; 6] = [
    "Clear and sunny",
    "Partly cloudy",
    "Light rain showers",
    "Windy ridgeline, gusts to 40 km/h",
    "Afternoon thunderstorms possible",
    "Snow flurries above treeline",
];

/// Deterministic offline report provider
pub struct SyntheticReportProvider {
    /// Fixture reports keyed by lowercased trail name, served before synthesis
    fixtures: HashMap<String, TripReport>,
}

impl SyntheticReportProvider {
    /// Create a provider that synthesizes every report from the trail name
    #[must_use]
    pub fn new() -> Self {
        Self {
            fixtures: HashMap::new(),
        }
    }

    /// Create a provider with pre-loaded fixture reports
    ///
    /// Fixtures are matched by trail name, case-insensitively; trails with
    /// no fixture fall back to deterministic synthesis.
    #[must_use]
    pub fn with_reports(reports: Vec<(String, TripReport)>) -> Self {
        Self {
            fixtures: reports
                .into_iter()
                .map(|(name, report)| (name.to_lowercase(), report))
                .collect(),
        }
    }

    /// Stable hash of a trail name driving every synthesized value
    fn trail_seed(trail_name: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        trail_name.to_lowercase().hash(&mut hasher);
        hasher.finish()
    }

    /// Synthesize the delimited report blob a grounded model would return
    #[allow(clippy::cast_possible_truncation)] // Safe: values are reduced modulo small constants
    fn synthesize_blob(request: &ReportRequest) -> String {
        let seed = Self::trail_seed(&request.trail_name);

        let distance_km = 4.0 + ((seed % 180) as f64) / 10.0;
        let elevation_m = 150.0 + ((seed / 7 % 1400) as f64);
        let weather = WEATHER_MENU[(seed % WEATHER_MENU.len() as u64) as usize];
        let temp_c = -4.0 + ((seed / 11 % 38) as f64);
        let sunset_hour = 17 + seed % 4;
        let sunset_min = seed / 13 % 60;

        // A simple out-and-back profile: climb to the high point, return.
        let profile: Vec<String> = [0.0, 0.25, 0.55, 1.0, 0.55, 0.25, 0.0]
            .iter()
            .map(|frac| format!("{:.0}", frac * elevation_m))
            .collect();

        format!(
            "===SUMMARY===\n\
             {trail} is a {distance_km:.1} km round trip gaining {elevation_m:.0} m. \
             Forecast: {weather}, around {temp_c:.0}C.\n\
             ===SAFETY===\n\
             Carry layers for the summit and check conditions at the trailhead. \
             Planned start: {start}.\n\
             ===DATA===\n\
             distance_km: {distance_km:.1}\n\
             elevation_m: {elevation_m:.0}\n\
             weather: {weather}\n\
             temp_c: {temp_c:.1}\n\
             sunset: {sunset_hour}:{sunset_min:02}\n\
             profile: {profile}\n\
             ===CONTENT===\n\
             ## {trail}\n\n\
             An out-and-back route suitable for a {experience} hiker.\n",
            trail = request.trail_name,
            start = request.start_time,
            experience = request.user.experience,
            profile = profile.join(", "),
        )
    }
}

impl Default for SyntheticReportProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportProvider for SyntheticReportProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn generate_report(&self, request: &ReportRequest) -> AppResult<TripReport> {
        if let Some(fixture) = self.fixtures.get(&request.trail_name.to_lowercase()) {
            debug!(trail = %request.trail_name, "serving fixture report");
            return Ok(fixture.clone());
        }

        debug!(trail = %request.trail_name, "synthesizing report");
        let blob = Self::synthesize_blob(request);
        let sections = parse_sections(&blob);
        let trip: TripData = parse_trip_data(&sections.data);

        Ok(TripReport {
            sections,
            trip,
            sources: vec![GroundingSource {
                title: format!("{} trail notes (synthetic)", request.trail_name),
                url: "https://example.invalid/synthetic".into(),
            }],
        })
    }
}
