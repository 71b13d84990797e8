//! Alert generation over the recent-records window
//!
//! Each rule is evaluated independently against the same window and emits at
//! most one alert. Alerts come out in rule order (flu-like, stress,
//! waterborne), not severity order.

use super::window::within_window;
use super::Severity;
use crate::config::AnalysisConfig;
use crate::domain::record::symptom_types::{COUGH, DIARRHEA, FEVER, NAUSEA};
use crate::domain::scoring::round_to;
use crate::domain::HealthRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flu-like alert fires above this percentage of recent records
pub const FLU_ALERT_PERCENT: f64 = 15.0;
/// Flu-like alert escalates to high above this percentage
pub const FLU_HIGH_PERCENT: f64 = 25.0;
/// Stress alert fires above this percentage of recent records
pub const STRESS_ALERT_PERCENT: f64 = 20.0;
/// A record counts as high-stress above this stress level
pub const HIGH_STRESS_LEVEL: f64 = 7.0;
/// Waterborne alert fires above this fraction (0-1) of recent records
pub const WATERBORNE_ALERT_FRACTION: f64 = 0.10;

/// Category of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Outbreak,
    Lifestyle,
    Seasonal,
}

/// Read-only alert description, regenerated on every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub color: String,
}

/// Percentage of `matching` over `total`, rounded to one decimal
fn percentage(matching: usize, total: usize) -> f64 {
    round_to(matching as f64 / total as f64 * 100.0, 1)
}

/// Scans the recent window and emits threshold alerts
///
/// With no records inside the window every rule is skipped and the result
/// is empty.
pub fn generate_alerts(
    records: &[HealthRecord],
    now: DateTime<Utc>,
    config: &AnalysisConfig,
) -> Vec<Alert> {
    let recent: Vec<&HealthRecord> = records
        .iter()
        .filter(|r| within_window(now, r.timestamp, config.alert_window_days))
        .collect();

    let mut alerts = Vec::new();
    if recent.is_empty() {
        tracing::debug!(
            window_days = config.alert_window_days,
            "No recent records, skipping alert rules"
        );
        return alerts;
    }
    let total = recent.len();

    let flu_like = recent
        .iter()
        .filter(|r| r.has_any_symptom(&[FEVER, COUGH]))
        .count();
    let flu_percentage = percentage(flu_like, total);
    if flu_percentage > FLU_ALERT_PERCENT {
        let severity = if flu_percentage > FLU_HIGH_PERCENT {
            Severity::High
        } else {
            Severity::Moderate
        };
        alerts.push(Alert {
            id: "flu_alert".to_string(),
            kind: AlertKind::Outbreak,
            severity,
            title: "Flu Season Alert".to_string(),
            message: format!(
                "Cases of flu-like symptoms have increased by {flu_percentage:.1}% in {} this week. Consider preventive measures.",
                config.area_label
            ),
            icon: "notifications-outline".to_string(),
            color: "#FF6B35".to_string(),
        });
    }

    let high_stress = recent
        .iter()
        .filter(|r| r.lifestyle.stress_level > HIGH_STRESS_LEVEL)
        .count();
    let stress_percentage = percentage(high_stress, total);
    if stress_percentage > STRESS_ALERT_PERCENT {
        alerts.push(Alert {
            id: "stress_alert".to_string(),
            kind: AlertKind::Lifestyle,
            severity: Severity::Moderate,
            title: "High Stress Levels Detected".to_string(),
            message: format!(
                "{stress_percentage:.1}% of users report elevated stress. Mental health resources available."
            ),
            icon: "heart-outline".to_string(),
            color: "#9B59B6".to_string(),
        });
    }

    // Compared as a raw fraction, unlike the two percentage rules above.
    let waterborne = recent
        .iter()
        .filter(|r| r.has_any_symptom(&[DIARRHEA, NAUSEA]))
        .count();
    if waterborne as f64 > total as f64 * WATERBORNE_ALERT_FRACTION {
        alerts.push(Alert {
            id: "waterborne_alert".to_string(),
            kind: AlertKind::Seasonal,
            severity: Severity::Moderate,
            title: "Waterborne Disease Alert".to_string(),
            message: "Increase in digestive issues. Ensure water purification and food hygiene."
                .to_string(),
            icon: "water-outline".to_string(),
            color: "#3498DB".to_string(),
        });
    }

    tracing::debug!(
        recent_records = total,
        flu_percentage,
        stress_percentage,
        waterborne_records = waterborne,
        alerts = alerts.len(),
        "Evaluated alert rules"
    );

    alerts
}
