//! Error types for the congestion tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading taxation rules
//! or handling tax requests.

use thiserror::Error;

/// The main error type for the congestion tax engine.
///
/// Configuration-source failures are propagated unchanged through the
/// calculator; input validation errors are only raised by the request
/// handling layer.
///
/// # Example
///
/// ```
/// use congestion_tax::error::TaxError;
///
/// let error = TaxError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
/// assert!(error.is_configuration_error());
/// ```
#[derive(Debug, Error)]
pub enum TaxError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable ruleset.
    #[error("Invalid taxation configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the ruleset.
        message: String,
    },

    /// The configuration source could not deliver its data.
    #[error("Taxation configuration unavailable: {message}")]
    ConfigurationUnavailable {
        /// A description of the source failure.
        message: String,
    },

    /// A vehicle type identifier did not match any known vehicle type.
    #[error("Unknown vehicle type: {value}")]
    UnknownVehicleType {
        /// The identifier that was supplied.
        value: String,
    },

    /// A passage timestamp could not be parsed.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The raw timestamp text.
        value: String,
        /// A description of the parse failure.
        message: String,
    },
}

impl TaxError {
    /// Returns true if the error originates from the configuration source.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TaxError::ConfigNotFound { .. }
                | TaxError::ConfigParseError { .. }
                | TaxError::InvalidConfig { .. }
                | TaxError::ConfigurationUnavailable { .. }
        )
    }
}

/// A type alias for Results that return TaxError.
pub type TaxResult<T> = Result<T, TaxError>;
