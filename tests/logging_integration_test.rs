//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so this
//! file holds a single initialization test.

use healthpulse::config::{load_config_or_default, LoggingConfig};
use healthpulse::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_file_logging_writes_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();
    assert!(guard.has_file_output());
    assert!(log_path.exists());

    // emits an info event from inside the library
    load_config_or_default(temp_dir.path().join("absent.toml")).unwrap();
    drop(guard);

    let contents = std::fs::read_to_string(log_path.join("healthpulse.log")).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("Configuration file not found"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");

    // a second install fails instead of panicking
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
