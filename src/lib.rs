// HealthPulse - Community Health Analytics
// Copyright (c) 2025 HealthPulse Contributors
// Licensed under the MIT License

//! # HealthPulse - Community Health Analytics
//!
//! HealthPulse turns a stream of anonymized, self-reported health records
//! (symptoms, lifestyle metrics, coarse location, age bracket) into
//! community-level insights.
//!
//! ## Overview
//!
//! This library provides:
//! - **Alerts** for flu-like outbreaks, community stress and monsoon-season
//!   waterborne illness
//! - **Trends** of daily fever, cough and headache counts
//! - **Rankings** of symptoms by prevalence
//! - **Demographics** of lifestyle averages per age bracket
//! - **Hotspots** of geographically clustered high-risk records
//! - A synthetic **generator** of realistic community records
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Analytics engine, AI summary contract and report checksums
//! - [`generator`] - Synthetic community data
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthpulse::config::load_config;
//! use healthpulse::core::analytics::HealthAnalyzer;
//! use healthpulse::generator::CommunityDataGenerator;
//! use chrono::Utc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("healthpulse.toml")?;
//!     let now = Utc::now();
//!
//!     let records = CommunityDataGenerator::new(config.generator.clone())?.generate(now)?;
//!     let report = HealthAnalyzer::new(config.analysis).analyze(&records, now);
//!
//!     println!("{} alerts, {} hotspots", report.alerts.len(), report.hotspots.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Reference Time
//!
//! Every windowed computation takes an explicit `now`. Analyzing the same
//! records at the same reference time always yields the same report:
//!
//! ```rust
//! use healthpulse::core::analytics::analyze_health_data;
//! use healthpulse::core::verification::report_checksum;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
//! let first = analyze_health_data(&[], now);
//! let second = analyze_health_data(&[], now);
//! assert_eq!(report_checksum(&first).unwrap(), report_checksum(&second).unwrap());
//! ```
//!
//! ## Error Handling
//!
//! HealthPulse uses the [`domain::HealthPulseError`] type for all errors:
//!
//! ```rust,no_run
//! use healthpulse::domain::HealthPulseError;
//!
//! fn example() -> Result<(), HealthPulseError> {
//!     let config = healthpulse::config::load_config("healthpulse.toml")?;
//!     println!("area: {}", config.analysis.area_label);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod generator;
pub mod logging;
