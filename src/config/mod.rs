//! Configuration management for HealthPulse.
//!
//! # Overview
//!
//! HealthPulse uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HEALTHPULSE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`AnalysisConfig`] - Analysis windows and thresholds
//! - [`GeneratorConfig`] - Synthetic data generation
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [analysis]
//! alert_window_days = 7
//! trend_window_days = 30
//! hotspot_min_cases = 5
//! area_label = "${HEALTHPULSE_AREA}"
//!
//! [generator]
//! days = 30
//! seed = 7
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use healthpulse::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("healthpulse.toml")?;
//! println!("Alert window: {} days", config.analysis.alert_window_days);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{
    AnalysisConfig, ApplicationConfig, GeneratorConfig, HealthPulseConfig, LoggingConfig,
    RegionConfig,
};
