//! Shared input handling for commands
//!
//! Loading records, resolving the reference time and loading configuration.

use crate::config::{load_config_or_default, HealthPulseConfig};
use crate::domain::record::{validate_records, HealthRecord};
use crate::domain::{HealthPulseError, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Reads a JSON array of records and validates every entry
///
/// # Errors
///
/// `HealthPulseError::Io` when the file cannot be read,
/// `HealthPulseError::Serialization` for malformed JSON and
/// `HealthPulseError::InvalidRecord` for the first record that fails validation.
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<HealthRecord>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        HealthPulseError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<HealthRecord> = serde_json::from_str(&contents).map_err(|e| {
        HealthPulseError::Serialization(format!(
            "Failed to parse records from {}: {}",
            path.display(),
            e
        ))
    })?;

    validate_records(&records)?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Loaded health records"
    );

    Ok(records)
}

/// Resolves `--now`, defaulting to the current time
pub fn reference_time(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        None => Ok(Utc::now()),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                HealthPulseError::Configuration(format!(
                    "Invalid --now value '{raw}', expected RFC3339: {e}"
                ))
            }),
    }
}

/// Loads the configuration used by data commands
///
/// A missing file means defaults.
pub fn command_config(config_path: &str) -> Result<HealthPulseConfig> {
    load_config_or_default(config_path)
}

/// Maps an input-side error to the exit code a command reports for it
///
/// Unreadable input files count as data errors.
pub fn exit_code_for(error: &HealthPulseError) -> i32 {
    match error {
        HealthPulseError::Configuration(_) => super::EXIT_CONFIG_ERROR,
        HealthPulseError::Io(_) => super::EXIT_DATA_ERROR,
        e if e.is_data_error() => super::EXIT_DATA_ERROR,
        _ => super::EXIT_FATAL,
    }
}
