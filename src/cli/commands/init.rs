//! Init command implementation
//!
//! Writes a sample configuration file with every setting at its default.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "healthpulse.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing HealthPulse configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match tokio::fs::write(&self.output, sample_config()).await {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your area and thresholds", self.output);
                println!("  2. Validate configuration: healthpulse validate-config");
                println!("  3. Generate demo data: healthpulse generate --output records.json");
                println!("  4. Run analysis: healthpulse analyze --input records.json");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }
}

/// Sample configuration written by `init`
pub fn sample_config() -> &'static str {
    r#"# HealthPulse Configuration File
# Community health analytics over anonymized health records
#
# Any value can reference an environment variable as ${VAR_NAME}.
# Settings can also be overridden with HEALTHPULSE_<SECTION>_<KEY>,
# for example HEALTHPULSE_ANALYSIS_AREA_LABEL.

[application]
log_level = "info"

[analysis]
# Records newer than this many days feed the outbreak alerts
alert_window_days = 7
# Daily symptom trend window
trend_window_days = 30
# Smallest cluster reported as a hotspot
hotspot_min_cases = 5
top_symptoms_limit = 10
# Name used in alert messages
area_label = "Goa"

[generator]
days = 30
min_daily_entries = 20
max_daily_entries = 30
# seed = 42

[[generator.regions]]
name = "Verna Industrial Estate"
lat = 15.354
long = 73.934
weight = 30
urban = true

[[generator.regions]]
name = "Verna Village"
lat = 15.356
long = 73.937
weight = 25

[[generator.regions]]
name = "Verna Housing Colony"
lat = 15.351
long = 73.931
weight = 20

[[generator.regions]]
name = "Verna Market Area"
lat = 15.358
long = 73.935
weight = 15
urban = true

[[generator.regions]]
name = "Verna Outskirts"
lat = 15.350
long = 73.940
weight = 10

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, HealthPulseConfig};
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_matches_defaults() {
        let config = parse_config(sample_config()).unwrap();
        assert_eq!(config, HealthPulseConfig::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("healthpulse.toml");
        std::fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("healthpulse.toml");
        std::fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("[analysis]"));
    }
}
