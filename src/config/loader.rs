//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HealthPulseConfig;
use crate::domain::errors::HealthPulseError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HealthPulseConfig
/// 4. Applies environment variable overrides (HEALTHPULSE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File does not exist or cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use healthpulse::config::loader::load_config;
///
/// let config = load_config("healthpulse.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HealthPulseConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HealthPulseError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HealthPulseError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Like [`load_config`], but falls back to defaults when the file is absent
///
/// Environment overrides still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<HealthPulseConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::info!(
        config_path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = HealthPulseConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        HealthPulseError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Parses configuration from TOML text
///
/// Runs the same substitution, override and validation steps as [`load_config`].
pub fn parse_config(contents: &str) -> Result<HealthPulseConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: HealthPulseConfig = toml::from_str(&contents)
        .map_err(|e| HealthPulseError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        HealthPulseError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HealthPulseError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses an override value, naming the variable on failure
fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        HealthPulseError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}

/// Applies environment variable overrides using HEALTHPULSE_* prefix
///
/// Environment variables follow the pattern: HEALTHPULSE_<SECTION>_<KEY>
/// For example: HEALTHPULSE_ANALYSIS_AREA_LABEL, HEALTHPULSE_GENERATOR_SEED
fn apply_env_overrides(config: &mut HealthPulseConfig) -> Result<()> {
    let var = |name: &str| std::env::var(name).ok();

    // Application overrides
    if let Some(val) = var("HEALTHPULSE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Analysis overrides
    if let Some(val) = var("HEALTHPULSE_ANALYSIS_ALERT_WINDOW_DAYS") {
        config.analysis.alert_window_days =
            parse_override("HEALTHPULSE_ANALYSIS_ALERT_WINDOW_DAYS", &val)?;
    }
    if let Some(val) = var("HEALTHPULSE_ANALYSIS_TREND_WINDOW_DAYS") {
        config.analysis.trend_window_days =
            parse_override("HEALTHPULSE_ANALYSIS_TREND_WINDOW_DAYS", &val)?;
    }
    if let Some(val) = var("HEALTHPULSE_ANALYSIS_HOTSPOT_MIN_CASES") {
        config.analysis.hotspot_min_cases =
            parse_override("HEALTHPULSE_ANALYSIS_HOTSPOT_MIN_CASES", &val)?;
    }
    if let Some(val) = var("HEALTHPULSE_ANALYSIS_TOP_SYMPTOMS_LIMIT") {
        config.analysis.top_symptoms_limit =
            parse_override("HEALTHPULSE_ANALYSIS_TOP_SYMPTOMS_LIMIT", &val)?;
    }
    if let Some(val) = var("HEALTHPULSE_ANALYSIS_AREA_LABEL") {
        config.analysis.area_label = val;
    }

    // Generator overrides
    if let Some(val) = var("HEALTHPULSE_GENERATOR_DAYS") {
        config.generator.days = parse_override("HEALTHPULSE_GENERATOR_DAYS", &val)?;
    }
    if let Some(val) = var("HEALTHPULSE_GENERATOR_SEED") {
        config.generator.seed = Some(parse_override("HEALTHPULSE_GENERATOR_SEED", &val)?);
    }

    // Logging overrides
    if let Some(val) = var("HEALTHPULSE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = var("HEALTHPULSE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("HP_TEST_AREA", "North Goa");
        let result = substitute_env_vars("area_label = \"${HP_TEST_AREA}\"").unwrap();
        assert_eq!(result, "area_label = \"North Goa\"\n");
        std::env::remove_var("HP_TEST_AREA");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("HP_MISSING_VAR");
        let result = substitute_env_vars("seed = ${HP_MISSING_VAR}");
        assert!(result.unwrap_err().to_string().contains("HP_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("HP_COMMENTED_VAR");
        let result = substitute_env_vars("# seed = ${HP_COMMENTED_VAR}\n").unwrap();
        assert!(result.contains("${HP_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent-healthpulse.toml").is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-healthpulse.toml").unwrap();
        assert_eq!(config.analysis.hotspot_min_cases, 5);
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[analysis]
alert_window_days = 14
area_label = "Verna"

[generator]
days = 10
seed = 42

[[generator.regions]]
name = "Panjim"
lat = 15.4909
long = 73.8278
weight = 1
urban = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.analysis.alert_window_days, 14);
        assert_eq!(config.analysis.trend_window_days, 30);
        assert_eq!(config.analysis.area_label, "Verna");
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.generator.regions.len(), 1);
        assert!(config.generator.regions[0].urban);
    }

    #[test]
    fn test_parse_config_rejects_invalid_values() {
        let result = parse_config("[analysis]\nhotspot_min_cases = 0\n");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration validation failed"));
    }
}
