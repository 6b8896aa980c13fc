// ABOUTME: Environment-based configuration for the Cairn planner
// ABOUTME: Validates planner defaults and logging settings at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! Environment-only configuration
//!
//! The planner is configured entirely from environment variables, validated
//! once at startup. Risk thresholds are deliberately not configurable; they
//! live in `cairn_intelligence::hiking_constants`.

use cairn_core::errors::{AppError, AppResult};
use cairn_intelligence::parse_clock;
use std::env;

use crate::logging::LoggingConfig;

/// Default trailhead start time offered to users ("HH:MM")
pub const DEFAULT_START_TIME: &str = "08:00";

/// Planner configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Default start time pre-filled for new trip requests ("HH:MM")
    pub default_start_time: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            default_start_time: DEFAULT_START_TIME.into(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `RUST_LOG`, `CAIRN_LOG_FORMAT`, `CAIRN_LOG_LOCATION`, `CAIRN_LOG_SPANS`
    /// - `CAIRN_DEFAULT_START_TIME` ("HH:MM" 24-hour)
    ///
    /// # Errors
    ///
    /// Returns an error if `CAIRN_DEFAULT_START_TIME` is set but is not a
    /// valid 24-hour clock time
    pub fn from_env() -> AppResult<Self> {
        let default_start_time =
            env::var("CAIRN_DEFAULT_START_TIME").unwrap_or_else(|_| DEFAULT_START_TIME.into());

        if parse_clock(&default_start_time).is_none() {
            return Err(AppError::config(format!(
                "CAIRN_DEFAULT_START_TIME must be a 24-hour HH:MM time, got {default_start_time:?}"
            )));
        }

        Ok(Self {
            logging: LoggingConfig::from_env(),
            default_start_time,
        })
    }
}
