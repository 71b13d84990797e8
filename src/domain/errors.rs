//! Domain error types
//!
//! This module defines the error hierarchy for HealthPulse.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main HealthPulse error type
///
/// This is the primary error type used throughout the application.
/// The analytics engine itself is infallible; errors come from loading
/// configuration, reading record files, and validating records.
#[derive(Debug, Error)]
pub enum HealthPulseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record in an input collection broke the record contract
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Synthetic data generation errors
    #[error("Generator error: {0}")]
    Generator(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl HealthPulseError {
    /// Creates an invalid-record error for the record at `index`
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        HealthPulseError::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by bad input data rather than setup
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            HealthPulseError::InvalidRecord { .. }
                | HealthPulseError::Validation(_)
                | HealthPulseError::Serialization(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for HealthPulseError {
    fn from(err: std::io::Error) -> Self {
        HealthPulseError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HealthPulseError {
    fn from(err: serde_json::Error) -> Self {
        HealthPulseError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HealthPulseError {
    fn from(err: toml::de::Error) -> Self {
        HealthPulseError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HealthPulseError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_invalid_record_display() {
        let err = HealthPulseError::invalid_record(4, "severity 9 out of range");
        assert_eq!(
            err.to_string(),
            "Invalid record at index 4: severity 9 out of range"
        );
        assert!(err.is_data_error());
    }

    #[test]
    fn test_configuration_is_not_data_error() {
        let err = HealthPulseError::Configuration("missing".to_string());
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: HealthPulseError = io_err.into();
        assert!(matches!(err, HealthPulseError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: HealthPulseError = json_err.into();
        assert!(matches!(err, HealthPulseError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: HealthPulseError = toml_err.into();
        assert!(matches!(err, HealthPulseError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = HealthPulseError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
