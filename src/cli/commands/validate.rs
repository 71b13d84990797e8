//! Validate config command implementation
//!
//! Loads the configuration file strictly (a missing file is an error) and
//! prints a summary of the effective settings.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Area Label: {}", config.analysis.area_label);
        println!("  Alert Window: {} days", config.analysis.alert_window_days);
        println!("  Trend Window: {} days", config.analysis.trend_window_days);
        println!("  Hotspot Min Cases: {}", config.analysis.hotspot_min_cases);
        println!("  Top Symptoms Limit: {}", config.analysis.top_symptoms_limit);
        println!(
            "  Generator: {} days, {}-{} records/day, seed {}",
            config.generator.days,
            config.generator.min_daily_entries,
            config.generator.max_daily_entries,
            config
                .generator
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string())
        );
        for region in &config.generator.regions {
            println!(
                "    - {} ({:.3}, {:.3}) weight {}{}",
                region.name,
                region.lat,
                region.long,
                region.weight,
                if region.urban { ", urban" } else { "" }
            );
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(EXIT_SUCCESS)
    }
}
