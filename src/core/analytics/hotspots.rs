//! Geographic hotspot detection
//!
//! Records are clustered on coordinates rounded to three decimal places
//! (roughly 100 m). The cluster key is a pair of integers in thousandths of a
//! degree, so clustering never depends on float formatting.

use super::counter::OrderedCounter;
use super::{Coordinates, Severity};
use crate::domain::scoring::round_to;
use crate::domain::{HealthRecord, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Clusters smaller than this are dropped so small groups can't be singled out
pub const DEFAULT_MIN_CASES: usize = 5;

const HIGH_AVG_SYMPTOMS: f64 = 2.0;
const HIGH_RISK_PERCENT: f64 = 30.0;
const MODERATE_AVG_SYMPTOMS: f64 = 1.0;
const MODERATE_RISK_PERCENT: f64 = 15.0;

/// Composite cluster key in thousandths of a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterKey {
    pub lat_milli: i64,
    pub lon_milli: i64,
}

impl ClusterKey {
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            lat_milli: (latitude * 1000.0).round() as i64,
            lon_milli: (longitude * 1000.0).round() as i64,
        }
    }
}

/// A retained cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Region of the first record seen in the cluster
    pub region: String,
    /// Coordinates of the first record seen in the cluster
    pub coordinates: Coordinates,
    pub severity: Severity,
    pub total_cases: usize,
    /// One decimal
    pub high_risk_percentage: f64,
    /// Two decimals
    pub avg_symptoms_per_record: f64,
    /// Most frequent symptom type, `None` when the cluster has no symptoms
    pub top_symptom: Option<String>,
}

struct ClusterAccumulator {
    region: String,
    coordinates: Coordinates,
    total: usize,
    symptoms: OrderedCounter,
    high_risk: usize,
}

impl ClusterAccumulator {
    fn new(record: &HealthRecord) -> Self {
        Self {
            region: record.region.clone(),
            coordinates: Coordinates::of(record),
            total: 0,
            symptoms: OrderedCounter::new(),
            high_risk: 0,
        }
    }

    fn add(&mut self, record: &HealthRecord) {
        self.total += 1;
        if record.risk_level == RiskLevel::High {
            self.high_risk += 1;
        }
        for symptom in &record.symptoms {
            self.symptoms.add(&symptom.kind);
        }
    }

    fn finish(self) -> Hotspot {
        let total = self.total as f64;
        let avg_symptoms = self.symptoms.total() as f64 / total;
        let high_risk_percentage = self.high_risk as f64 / total * 100.0;

        Hotspot {
            severity: classify(avg_symptoms, high_risk_percentage),
            top_symptom: self.symptoms.most_common().map(str::to_string),
            region: self.region,
            coordinates: self.coordinates,
            total_cases: self.total,
            high_risk_percentage: round_to(high_risk_percentage, 1),
            avg_symptoms_per_record: round_to(avg_symptoms, 2),
        }
    }
}

/// Severity of a cluster from its symptom density and risk concentration
pub fn classify(avg_symptoms_per_record: f64, high_risk_percentage: f64) -> Severity {
    if avg_symptoms_per_record > HIGH_AVG_SYMPTOMS || high_risk_percentage > HIGH_RISK_PERCENT {
        Severity::High
    } else if avg_symptoms_per_record > MODERATE_AVG_SYMPTOMS
        || high_risk_percentage > MODERATE_RISK_PERCENT
    {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

/// Clusters the full history and returns clusters with at least `min_cases` records
///
/// High-severity hotspots come first; within each partition hotspots are
/// ordered by descending case count, ties keeping first-seen order.
pub fn detect_hotspots(records: &[HealthRecord], min_cases: usize) -> Vec<Hotspot> {
    let mut index: HashMap<ClusterKey, usize> = HashMap::new();
    let mut clusters: Vec<ClusterAccumulator> = Vec::new();

    for record in records {
        let key = ClusterKey::from_coordinates(record.latitude, record.longitude);
        let position = *index.entry(key).or_insert_with(|| {
            clusters.push(ClusterAccumulator::new(record));
            clusters.len() - 1
        });
        clusters[position].add(record);
    }

    let cluster_count = clusters.len();
    let mut hotspots: Vec<Hotspot> = clusters
        .into_iter()
        .map(ClusterAccumulator::finish)
        .filter(|h| h.total_cases >= min_cases)
        .collect();

    hotspots.sort_by(|a, b| {
        let a_high = a.severity == Severity::High;
        let b_high = b.severity == Severity::High;
        b_high
            .cmp(&a_high)
            .then_with(|| b.total_cases.cmp(&a.total_cases))
    });

    tracing::debug!(
        clusters = cluster_count,
        retained = hotspots.len(),
        min_cases,
        "Detected hotspots"
    );

    hotspots
}
