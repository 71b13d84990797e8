//! Analyze command implementation
//!
//! Loads records, runs the community analysis and emits the report wrapped
//! in a run envelope carrying checksums of both input and output.

use super::input::{command_config, exit_code_for, load_records, reference_time};
use super::{EXIT_FATAL, EXIT_SUCCESS};
use crate::core::analytics::{CommunityAnalysis, HealthAnalyzer};
use crate::core::verification::{records_checksum, report_checksum};
use crate::domain::HealthRecord;
use crate::domain::Result;
use crate::log_error_with_context;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of health records
    #[arg(short, long)]
    pub input: String,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Reference time (RFC3339) for the alert and trend windows
    #[arg(long)]
    pub now: Option<String>,
}

/// One analysis run with fingerprints of its input and report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRun {
    pub run_id: Uuid,
    pub reference_time: DateTime<Utc>,
    pub input_records: usize,
    pub records_checksum: String,
    pub report_checksum: String,
    pub report: CommunityAnalysis,
}

impl AnalysisRun {
    pub fn new(
        records: &[HealthRecord],
        report: CommunityAnalysis,
        reference_time: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            run_id: Uuid::new_v4(),
            reference_time,
            input_records: records.len(),
            records_checksum: records_checksum(records)?,
            report_checksum: report_checksum(&report)?,
            report,
        })
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
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

        let analyzer = HealthAnalyzer::new(config.analysis);
        let report = analyzer.analyze(&records, now);
        let run = AnalysisRun::new(&records, report, now)?;

        tracing::info!(
            run_id = %run.run_id,
            report_checksum = %run.report_checksum,
            "Analysis report ready"
        );

        let body = serde_json::to_string_pretty(&run)?;
        match &self.output {
            Some(path) => {
                if let Err(e) = tokio::fs::write(path, body).await {
                    eprintln!("❌ Failed to write {path}: {e}");
                    return Ok(EXIT_FATAL);
                }
                println!("✅ Analyzed {} records", run.input_records);
                println!("   Alerts: {}", run.report.alerts.len());
                println!("   Hotspots: {}", run.report.hotspots.len());
                println!("   Report checksum: {}", run.report_checksum);
                println!("   Output: {path}");
            }
            None => println!("{body}"),
        }

        Ok(EXIT_SUCCESS)
    }
}
