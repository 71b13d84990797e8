//! Logging and observability
//!
//! Structured logging with support for:
//! - JSON-formatted local log files
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Daily, hourly or no rotation
//!
//! # Example
//!
//! ```no_run
//! use healthpulse::logging::init_logging;
//! use healthpulse::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an analysis run
///
/// # Example
///
/// ```no_run
/// use healthpulse::log_analysis_start;
/// use chrono::Utc;
///
/// log_analysis_start!(750, Utc::now());
/// ```
#[macro_export]
macro_rules! log_analysis_start {
    ($record_count:expr, $now:expr) => {
        tracing::info!(
            records = $record_count,
            reference_time = %$now,
            "Starting community analysis"
        );
    };
}

/// Log the completion of an analysis run
///
/// # Example
///
/// ```no_run
/// use healthpulse::log_analysis_complete;
/// use std::time::Duration;
///
/// log_analysis_complete!(2, 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_analysis_complete {
    ($alerts:expr, $hotspots:expr, $duration:expr) => {
        tracing::info!(
            alerts = $alerts,
            hotspots = $hotspots,
            duration_ms = $duration.as_millis(),
            "Community analysis completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use healthpulse::log_error_with_context;
/// use healthpulse::domain::HealthPulseError;
///
/// let error = HealthPulseError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
