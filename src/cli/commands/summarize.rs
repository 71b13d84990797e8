//! Summarize command implementation
//!
//! Prints the condensed community summary that is sent to the AI analysis
//! service as its request body.

use super::input::{command_config, exit_code_for, load_records, reference_time};
use super::EXIT_SUCCESS;
use crate::core::analytics::HealthAnalyzer;
use crate::core::summary::CommunitySummary;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the summarize command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// JSON file holding an array of health records
    #[arg(short, long)]
    pub input: String,

    /// Reference time (RFC3339) for the alert and trend windows
    #[arg(long)]
    pub now: Option<String>,
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match command_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let now = match reference_time(self.now.as_deref()) {
            Ok(now) => now,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let records = match load_records(&self.input).await {
            Ok(records) => records,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load health records");
                eprintln!("❌ Failed to load records from {}: {e}", self.input);
                return Ok(exit_code_for(&e));
            }
        };

        let analysis = HealthAnalyzer::new(config.analysis).analyze(&records, now);
        let summary = CommunitySummary::from_analysis(&analysis, now);

        println!("{}", summary.to_json()?);
        Ok(EXIT_SUCCESS)
    }
}
