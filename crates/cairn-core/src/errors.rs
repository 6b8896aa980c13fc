// ABOUTME: Unified error types for the Cairn trip planning platform
// ABOUTME: Defines AppError variants for provider, parsing, and configuration failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cairn Outdoors

//! # Unified Error Handling
//!
//! Error types for the boundaries of the platform: report providers,
//! report-text parsing, and environment configuration.
//!
//! The risk engine itself (`cairn-intelligence`) is total over its input
//! domain and never returns errors — invalid or missing trail data degrades
//! into the "Uncertainty" risk factor instead of failing. Errors therefore
//! only exist where the platform talks to the outside world.

use thiserror::Error;

/// Application error type covering all fallible boundaries
#[derive(Debug, Error)]
pub enum AppError {
    /// A report provider failed to produce a trip report
    #[error("Report provider error: {0}")]
    Provider(String),

    /// A report text blob could not be parsed into the expected sections
    #[error("Invalid report format: {0}")]
    InvalidFormat(String),

    /// Caller supplied input outside the documented domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Environment configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Report provider failure
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Malformed report text
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Input outside the documented domain
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Missing or malformed configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let err = AppError::provider("model returned empty response");
        assert_eq!(
            err.to_string(),
            "Report provider error: model returned empty response"
        );
    }

    #[test]
    fn test_config_error_constructor() {
        let err = AppError::config("CAIRN_LOG_FORMAT is not one of json|pretty|compact");
        assert!(matches!(err, AppError::Config(_)));
    }
}
