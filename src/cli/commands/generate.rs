//! Generate command implementation
//!
//! Writes synthetic community health records as a JSON array.

use super::input::{command_config, exit_code_for, reference_time};
use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::generator::CommunityDataGenerator;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// File to write the generated records to
    #[arg(short, long)]
    pub output: String,

    /// Number of days to generate (overrides generator.days)
    #[arg(long)]
    pub days: Option<u32>,

    /// Random seed for reproducible output (overrides generator.seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reference time (RFC3339) the generated days count back from
    #[arg(long)]
    pub now: Option<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match command_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if let Some(days) = self.days {
            config.generator.days = days;
        }
        if self.seed.is_some() {
            config.generator.seed = self.seed;
        }

        let now = match reference_time(self.now.as_deref()) {
            Ok(now) => now,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        tracing::info!(
            output = %self.output,
            days = config.generator.days,
            seed = ?config.generator.seed,
            "Generating synthetic records"
        );

        let mut generator = match CommunityDataGenerator::new(config.generator) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("❌ Invalid generator settings: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let records = match generator.generate(now) {
            Ok(records) => records,
            Err(e) => {
                log_error_with_context!(&e, "Record generation failed");
                eprintln!("❌ Record generation failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        let body = serde_json::to_string_pretty(&records)?;
        if let Err(e) = tokio::fs::write(&self.output, body).await {
            eprintln!("❌ Failed to write {}: {e}", self.output);
            return Ok(EXIT_FATAL);
        }

        println!("✅ Generated {} records", records.len());
        println!("   Days: {}", generator.config().days);
        println!("   Output: {}", self.output);
        Ok(EXIT_SUCCESS)
    }
}
