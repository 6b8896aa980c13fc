// ABOUTME: Parses delimited report text blobs into summary, safety, data, and content sections
// ABOUTME: Extracts structured TripData from the key-value data block, degrading missing values to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Report text parsing
//!
//! Providers return a single text blob with `===SECTION===` markers. Parsing
//! is deliberately lenient: a missing section yields an empty string and a
//! malformed numeric value degrades to `0.0`, which the risk engine flags as
//! missing trail data. Nothing here is an error path except a blob with no
//! recognizable markers at all, which callers may treat as a provider bug.

use cairn_core::models::{ReportSections, TripData};
use tracing::debug;

/// Section marker for the trip summary paragraph
pub const SUMMARY_MARKER: &str = "===SUMMARY===";
/// Section marker for safety notes
pub const SAFETY_MARKER: &str = "===SAFETY===";
/// Section marker for the machine-readable data block
pub const DATA_MARKER: &str = "===DATA===";
/// Section marker for the long-form report body
pub const CONTENT_MARKER: &str = "===CONTENT===";

const MARKERS: [&str; 4] = [SUMMARY_MARKER, SAFETY_MARKER, DATA_MARKER, CONTENT_MARKER];

/// Split a delimited report blob into its four sections
///
/// Text before the first marker is ignored. Sections may appear in any
/// order; a repeated marker overwrites the earlier occurrence.
#[must_use]
pub fn parse_sections(text: &str) -> ReportSections {
    let mut sections = ReportSections::default();
    let mut current: Option<&str> = None;
    let mut buffer = String::new();

    let mut flush = |marker: Option<&str>, buffer: &mut String| {
        let body = buffer.trim().to_owned();
        buffer.clear();
        match marker {
            Some(m) if m == SUMMARY_MARKER => sections.summary = body,
            Some(m) if m == SAFETY_MARKER => sections.safety = body,
            Some(m) if m == DATA_MARKER => sections.data = body,
            Some(m) if m == CONTENT_MARKER => sections.content = body,
            _ => {
                if !body.is_empty() {
                    debug!("ignoring {} bytes of text before first marker", body.len());
                }
            }
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if MARKERS.contains(&trimmed) {
            flush(current, &mut buffer);
            current = Some(match trimmed {
                s if s == SUMMARY_MARKER => SUMMARY_MARKER,
                s if s == SAFETY_MARKER => SAFETY_MARKER,
                s if s == DATA_MARKER => DATA_MARKER,
                _ => CONTENT_MARKER,
            });
        } else {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
    flush(current, &mut buffer);

    sections
}

/// Parse a numeric field, degrading anything malformed to 0.0
///
/// Negative values are clamped to zero at this boundary; distance and
/// elevation below zero are caller bugs the engine never sees.
fn parse_metric(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

/// Extract structured trail data from the `key: value` data block
///
/// Recognized keys: `distance_km`, `elevation_m`, `weather`, `temp_c`,
/// `sunset`, `profile` (comma-separated relative elevation samples).
/// Unknown keys are ignored; absent numerics stay `0.0` so the risk
/// engine's Uncertainty rule fires.
#[must_use]
pub fn parse_trip_data(data: &str) -> TripData {
    let mut trip = TripData::default();

    for line in data.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_lowercase().as_str() {
            "distance_km" => trip.distance_km = parse_metric(value),
            "elevation_m" => trip.elevation_m = parse_metric(value),
            "weather" => trip.weather_condition = value.to_owned(),
            "temp_c" => trip.temp_c = value.parse().unwrap_or(0.0),
            "sunset" => {
                if !value.is_empty() {
                    trip.sunset_time = Some(value.to_owned());
                }
            }
            "profile" => {
                let samples: Vec<f64> = value
                    .split(',')
                    .filter_map(|s| s.trim().parse().ok())
                    .collect();
                if !samples.is_empty() {
                    trip.elevation_profile = Some(samples);
                }
            }
            other => debug!("ignoring unknown trip data key {other:?}"),
        }
    }

    trip
}
