//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for HealthPulse using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// HealthPulse - Community Health Analytics
#[derive(Parser, Debug)]
#[command(name = "healthpulse")]
#[command(version, about, long_about = None)]
#[command(author = "HealthPulse Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "healthpulse.toml", env = "HEALTHPULSE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HEALTHPULSE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate synthetic community health records
    Generate(commands::generate::GenerateArgs),

    /// Analyze health records and emit the community report
    Analyze(commands::analyze::AnalyzeArgs),

    /// Print the condensed summary sent to the AI analysis service
    Summarize(commands::summarize::SummarizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
