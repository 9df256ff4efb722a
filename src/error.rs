//! Error types for the fallible edges of the crate.
//!
//! The simulation itself cannot fail; only loading settings can.

use std::fmt;

/// Failure while loading or validating [`crate::Settings`].
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    Io(std::io::Error),

    /// Settings text was not valid JSON for the settings schema.
    Parse(serde_json::Error),

    /// A value parsed fine but is outside the range the simulation accepts.
    Invalid {
        /// Settings field name.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read settings: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            ConfigError::Invalid {
                field,
                value,
                expected,
            } => write!(f, "invalid setting `{field}` = {value} (expected {expected})"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
