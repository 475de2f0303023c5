//! Error types for game config loading.

use thiserror::Error;

/// Errors that can occur when loading or validating the game config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// The starting weapon is not in the weapon table.
    #[error("Starting weapon '{0}' is not in the weapon table")]
    UnknownStartingWeapon(String),

    /// A min/max pair is inverted.
    #[error("Invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: &'static str, min: f32, max: f32 },

    /// A value that must be positive (or non-negative) is not.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Reject NaN and infinities, which slip past ordinary comparisons.
    pub(crate) fn require_finite(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::InvalidValue { field, value })
        }
    }
}
