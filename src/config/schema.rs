//! Configuration schema types
//!
//! Every section has defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Main HealthPulse configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthPulseConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Analysis windows and thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Synthetic data generation
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HealthPulseConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.analysis.validate()?;
        self.generator.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Analysis windows and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Days before the reference time scanned by the alert rules
    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: u32,

    /// Days before the reference time covered by the daily trend series
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: u32,

    /// Clusters with fewer records are never reported as hotspots
    #[serde(default = "default_hotspot_min_cases")]
    pub hotspot_min_cases: usize,

    /// Maximum length of the symptom ranking
    #[serde(default = "default_top_symptoms_limit")]
    pub top_symptoms_limit: usize,

    /// Area name used in alert messages
    #[serde(default = "default_area_label")]
    pub area_label: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alert_window_days: default_alert_window_days(),
            trend_window_days: default_trend_window_days(),
            hotspot_min_cases: default_hotspot_min_cases(),
            top_symptoms_limit: default_top_symptoms_limit(),
            area_label: default_area_label(),
        }
    }
}

impl AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.alert_window_days == 0 {
            return Err("analysis.alert_window_days must be > 0".to_string());
        }
        if self.trend_window_days == 0 {
            return Err("analysis.trend_window_days must be > 0".to_string());
        }
        if self.hotspot_min_cases == 0 {
            return Err("analysis.hotspot_min_cases must be > 0".to_string());
        }
        if self.top_symptoms_limit == 0 {
            return Err("analysis.top_symptoms_limit must be > 0".to_string());
        }
        if self.area_label.trim().is_empty() {
            return Err("analysis.area_label cannot be empty".to_string());
        }
        Ok(())
    }
}

/// A named area records are generated around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    /// Centroid latitude in degrees
    pub lat: f64,
    /// Centroid longitude in degrees
    pub long: f64,
    /// Relative selection weight
    pub weight: u32,
    /// Urban areas add one point of stress to generated lifestyles
    #[serde(default)]
    pub urban: bool,
}

impl RegionConfig {
    pub fn new(name: &str, lat: f64, long: f64, weight: u32, urban: bool) -> Self {
        Self {
            name: name.to_string(),
            lat,
            long,
            weight,
            urban,
        }
    }
}

/// Synthetic data generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of days to generate, counting back from the reference time
    #[serde(default = "default_generator_days")]
    pub days: u32,

    /// Fewest records generated per day
    #[serde(default = "default_min_daily_entries")]
    pub min_daily_entries: u32,

    /// Most records generated per day
    #[serde(default = "default_max_daily_entries")]
    pub max_daily_entries: u32,

    /// Fixed seed for reproducible output; random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Areas to generate records in
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: default_generator_days(),
            min_daily_entries: default_min_daily_entries(),
            max_daily_entries: default_max_daily_entries(),
            seed: None,
            regions: default_regions(),
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.days == 0 || self.days > 3650 {
            return Err(format!(
                "generator.days must be between 1 and 3650, got {}",
                self.days
            ));
        }
        if self.max_daily_entries == 0 {
            return Err("generator.max_daily_entries must be > 0".to_string());
        }
        if self.min_daily_entries > self.max_daily_entries {
            return Err(format!(
                "generator.min_daily_entries ({}) cannot exceed max_daily_entries ({})",
                self.min_daily_entries, self.max_daily_entries
            ));
        }
        if self.regions.is_empty() {
            return Err("generator.regions cannot be empty".to_string());
        }
        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err("generator.regions entries need a name".to_string());
            }
            if !(-90.0..=90.0).contains(&region.lat) || !(-180.0..=180.0).contains(&region.long) {
                return Err(format!(
                    "generator region '{}' has invalid coordinates",
                    region.name
                ));
            }
        }
        if self.regions.iter().all(|r| r.weight == 0) {
            return Err("generator.regions need at least one non-zero weight".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_alert_window_days() -> u32 {
    7
}

fn default_trend_window_days() -> u32 {
    30
}

fn default_hotspot_min_cases() -> usize {
    5
}

fn default_top_symptoms_limit() -> usize {
    10
}

fn default_area_label() -> String {
    "Goa".to_string()
}

fn default_generator_days() -> u32 {
    30
}

fn default_min_daily_entries() -> u32 {
    20
}

fn default_max_daily_entries() -> u32 {
    30
}

/// The five Verna areas the community data was originally modelled on
pub fn default_regions() -> Vec<RegionConfig> {
    vec![
        RegionConfig::new("Verna Industrial Estate", 15.354, 73.934, 30, true),
        RegionConfig::new("Verna Village", 15.356, 73.937, 25, false),
        RegionConfig::new("Verna Housing Colony", 15.351, 73.931, 20, false),
        RegionConfig::new("Verna Market Area", 15.358, 73.935, 15, true),
        RegionConfig::new("Verna Outskirts", 15.350, 73.940, 10, false),
    ]
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = HealthPulseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HealthPulseConfig = toml::from_str("").unwrap();
        assert_eq!(config, HealthPulseConfig::default());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_analysis_config_validation() {
        let mut config = AnalysisConfig::default();
        assert!(config.validate().is_ok());

        config.alert_window_days = 0;
        assert!(config.validate().is_err());

        config.alert_window_days = 7;
        config.hotspot_min_cases = 0;
        assert!(config.validate().is_err());

        config.hotspot_min_cases = 5;
        config.area_label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generator_config_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.min_daily_entries = 40;
        assert!(config.validate().unwrap_err().contains("cannot exceed"));

        config.min_daily_entries = 20;
        config.days = 0;
        assert!(config.validate().is_err());

        config.days = 30;
        config.regions.iter_mut().for_each(|r| r.weight = 0);
        assert!(config.validate().is_err());

        config.regions = vec![RegionConfig::new("Nowhere", 95.0, 10.0, 1, false)];
        assert!(config.validate().unwrap_err().contains("invalid coordinates"));

        config.regions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_alert_window_days(), 7);
        assert_eq!(default_trend_window_days(), 30);
        assert_eq!(default_hotspot_min_cases(), 5);
        assert_eq!(default_top_symptoms_limit(), 10);

        let regions = default_regions();
        assert_eq!(regions.iter().map(|r| r.weight).sum::<u32>(), 100);
        assert_eq!(regions.iter().filter(|r| r.urban).count(), 2);
    }
}
