//! Core business logic for HealthPulse.
//!
//! # Modules
//!
//! - [`analytics`] - Alerts, trends, rankings, demographics and hotspot detection
//! - [`summary`] - AI analysis request body and response contract
//! - [`verification`] - Report checksums
//!
//! # Analysis Workflow
//!
//! 1. **Load**: Read and validate a record collection
//! 2. **Analyze**: Run every analyzer against one reference time
//! 3. **Summarize** (optional): Condense the report for the AI service
//! 4. **Fingerprint**: Checksum the report for reproducibility checks
//!
//! # Example
//!
//! ```rust
//! use healthpulse::core::analytics::analyze_health_data;
//! use healthpulse::core::summary::CommunitySummary;
//! use healthpulse::core::verification::report_checksum;
//! use chrono::Utc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Utc::now();
//! let analysis = analyze_health_data(&[], now);
//! let summary = CommunitySummary::from_analysis(&analysis, now);
//! let checksum = report_checksum(&analysis)?;
//!
//! println!("{} hotspots, checksum {checksum}", summary.hotspot_count);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod summary;
pub mod verification;
