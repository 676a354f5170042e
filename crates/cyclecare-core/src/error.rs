//! Core error types for cyclecare-core.
//!
//! Input-validation failures of the cycle engine live in [`CycleError`];
//! everything the surrounding application layers add (configuration, IO,
//! serialization) is folded into [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cyclecare-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Cycle profile or query date rejected by the engine
    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the cycle engine before any computation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// The profile violates one of its invariants.
    #[error("Invalid profile: '{field}' {message}")]
    InvalidProfile {
        field: &'static str,
        message: String,
    },

    /// A date could not be parsed or falls outside the representable range.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate { input: String, message: String },
}

impl CycleError {
    pub(crate) fn profile(field: &'static str, message: impl Into<String>) -> Self {
        CycleError::InvalidProfile {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn date(input: impl Into<String>, message: impl Into<String>) -> Self {
        CycleError::InvalidDate {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_display_names_field() {
        let err = CycleError::profile("cycle_length_days", "must be at least 1 (got 0)");
        assert_eq!(
            err.to_string(),
            "Invalid profile: 'cycle_length_days' must be at least 1 (got 0)"
        );
    }

    #[test]
    fn core_error_wraps_cycle_error() {
        let err: CoreError = CycleError::date("2024-13-01", "input is out of range").into();
        assert!(matches!(err, CoreError::Cycle(CycleError::InvalidDate { .. })));
        assert!(err.to_string().contains("2024-13-01"));
    }
}
