//! Core error types for luna-core.
//!
//! Scoring and series building never fail; these errors cover the parts
//! that touch user input and the configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for luna-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
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

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No home directory to place the config under
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Value is not a member of the closed vocabulary
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownCategory {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Date did not parse as YYYY-MM-DD
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Time did not parse as HH:MM
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_wraps_into_core_error() {
        let err: CoreError = ValidationError::missing("name").into();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required field: name"
        );
    }

    #[test]
    fn unknown_category_lists_expected_values() {
        let err = ValidationError::UnknownCategory {
            kind: "mood",
            value: "bored".into(),
            expected: "happy, sad".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown mood 'bored' (expected one of: happy, sad)"
        );
    }
}
