//! Report fingerprints
//!
//! Two analyses of the same records at the same reference time must be
//! identical. Hashing the canonical JSON form of a report makes that easy to
//! check across runs and machines.

use crate::core::analytics::CommunityAnalysis;
use crate::domain::{HealthPulseError, HealthRecord, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Calculate SHA-256 checksum of JSON data
///
/// Object keys are sorted before hashing, so key order and whitespace
/// never change the checksum.
///
/// # Examples
///
/// ```
/// use healthpulse::core::verification::checksum::calculate_checksum;
/// use serde_json::json;
///
/// let data = json!({"fever": 4, "cough": 2});
/// let checksum = calculate_checksum(&data).unwrap();
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum(data: &Value) -> Result<String> {
    let normalized = normalize_json(data);
    let data_str = serde_json::to_string(&normalized)
        .map_err(|e| HealthPulseError::Serialization(e.to_string()))?;
    Ok(calculate_checksum_bytes(data_str.as_bytes()))
}

/// Calculate SHA-256 checksum of raw bytes, hex encoded
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Checksum of a full analysis report
pub fn report_checksum(analysis: &CommunityAnalysis) -> Result<String> {
    calculate_checksum(&serde_json::to_value(analysis)?)
}

/// Checksum of an input record collection, order-sensitive
pub fn records_checksum(records: &[HealthRecord]) -> Result<String> {
    calculate_checksum(&serde_json::to_value(records)?)
}

/// Recursively sorts object keys
fn normalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, normalize_json(v))).collect();
            Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), v)).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize_json).collect()),
        _ => value.clone(),
    }
}
