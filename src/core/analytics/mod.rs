//! Community health analytics engine
//!
//! Turns a flat collection of [`HealthRecord`]s into alerts, daily symptom
//! trends, a symptom ranking, per-age-group statistics, per-region totals and
//! geographic hotspots.
//!
//! Every analyzer is a pure function of its input. The windowed analyzers
//! (alerts, trends) take an explicit reference time; [`HealthAnalyzer`] hands
//! the same instant to both so one report never straddles a day rollover.
//!
//! # Example
//!
//! ```rust
//! use healthpulse::core::analytics::HealthAnalyzer;
//! use healthpulse::config::AnalysisConfig;
//! use chrono::Utc;
//!
//! let analyzer = HealthAnalyzer::new(AnalysisConfig::default());
//! let report = analyzer.analyze(&[], Utc::now());
//! assert!(report.alerts.is_empty());
//! assert!(report.hotspots.is_empty());
//! ```

pub mod alerts;
pub mod counter;
pub mod demographics;
pub mod hotspots;
pub mod regions;
pub mod symptoms;
pub mod trends;
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use alerts::{generate_alerts, Alert, AlertKind};
pub use demographics::{demographic_insights, AgeGroupStat};
pub use hotspots::{detect_hotspots, ClusterKey, Hotspot};
pub use regions::{regional_trends, RegionStat};
pub use symptoms::{top_symptoms, SymptomRankEntry};
pub use trends::{symptom_trends, DailyTrendPoint};

use crate::config::AnalysisConfig;
use crate::domain::{AgeRange, HealthRecord};
use crate::{log_analysis_complete, log_analysis_start};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

/// Escalation level shared by alerts and hotspots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        };
        f.write_str(label)
    }
}

/// A latitude/longitude pair as reported to map consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    pub fn of(record: &HealthRecord) -> Self {
        Self {
            lat: record.latitude,
            long: record.longitude,
        }
    }
}

/// Combined output of every analyzer for one input collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAnalysis {
    pub alerts: Vec<Alert>,
    pub regional_trends: BTreeMap<String, RegionStat>,
    pub symptom_trends: Vec<DailyTrendPoint>,
    pub top_symptoms: Vec<SymptomRankEntry>,
    pub demographic_insights: BTreeMap<AgeRange, AgeGroupStat>,
    pub hotspots: Vec<Hotspot>,
}

/// Runs all analyzers over the same records and reference time
#[derive(Debug, Clone, Default)]
pub struct HealthAnalyzer {
    config: AnalysisConfig,
}

impl HealthAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes `records` as of `now`
    ///
    /// Deterministic: the same records and reference time always produce an
    /// identical report.
    pub fn analyze(&self, records: &[HealthRecord], now: DateTime<Utc>) -> CommunityAnalysis {
        log_analysis_start!(records.len(), now);
        let started = Instant::now();

        let analysis = CommunityAnalysis {
            alerts: generate_alerts(records, now, &self.config),
            regional_trends: regional_trends(records),
            symptom_trends: symptom_trends(records, now, &self.config),
            top_symptoms: top_symptoms(records, self.config.top_symptoms_limit),
            demographic_insights: demographic_insights(records),
            hotspots: detect_hotspots(records, self.config.hotspot_min_cases),
        };

        log_analysis_complete!(
            analysis.alerts.len(),
            analysis.hotspots.len(),
            started.elapsed()
        );
        analysis
    }
}

/// Analyzes `records` with the default thresholds
pub fn analyze_health_data(records: &[HealthRecord], now: DateTime<Utc>) -> CommunityAnalysis {
    HealthAnalyzer::default().analyze(records, now)
}
