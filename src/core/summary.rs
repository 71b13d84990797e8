//! AI analysis request and response contracts
//!
//! [`CommunitySummary`] is the JSON body sent to the external AI analysis
//! service; [`AiHealthAnalysis`] is the shape of what it returns. The HTTP
//! call itself lives outside this crate.

use crate::core::analytics::{
    AgeGroupStat, Alert, CommunityAnalysis, DailyTrendPoint, Severity, SymptomRankEntry,
};
use crate::domain::scoring::round_to;
use crate::domain::{AgeRange, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many ranked symptoms go into the request body
pub const SUMMARY_TOP_SYMPTOMS: usize = 5;

/// Length in days of each period compared by [`trend_change`]
pub const TREND_PERIOD_DAYS: i64 = 7;

/// Alert as included in the request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDigest {
    pub title: String,
    pub severity: Severity,
}

impl From<&Alert> for AlertDigest {
    fn from(alert: &Alert) -> Self {
        Self {
            title: alert.title.clone(),
            severity: alert.severity,
        }
    }
}

/// Request body for the AI analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    pub top_symptoms: Vec<SymptomRankEntry>,
    /// Percent change in tracked symptoms, last week against the week before
    pub trend_change: Option<f64>,
    pub alerts: Vec<AlertDigest>,
    pub hotspot_count: usize,
    pub demographic_insights: BTreeMap<AgeRange, AgeGroupStat>,
}

impl CommunitySummary {
    /// Condenses a report into the request body
    pub fn from_analysis(analysis: &CommunityAnalysis, now: DateTime<Utc>) -> Self {
        Self {
            top_symptoms: analysis
                .top_symptoms
                .iter()
                .take(SUMMARY_TOP_SYMPTOMS)
                .cloned()
                .collect(),
            trend_change: trend_change(&analysis.symptom_trends, now),
            alerts: analysis.alerts.iter().map(AlertDigest::from).collect(),
            hotspot_count: analysis.hotspots.len(),
            demographic_insights: analysis.demographic_insights.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Percent change of fever+cough+headache counts between two 7-day periods
///
/// The recent period is the 7 calendar days ending on `now`'s date, the
/// earlier period the 7 days before it. Returns `None` when the earlier
/// period has no tracked symptoms.
pub fn trend_change(trends: &[DailyTrendPoint], now: DateTime<Utc>) -> Option<f64> {
    let today = now.date_naive();
    let recent_start = today - Duration::days(TREND_PERIOD_DAYS - 1);
    let previous_start = recent_start - Duration::days(TREND_PERIOD_DAYS);

    let sum_between = |from: NaiveDate, to: NaiveDate| -> usize {
        trends
            .iter()
            .filter(|p| p.date >= from && p.date <= to)
            .map(DailyTrendPoint::tracked_total)
            .sum()
    };

    let recent = sum_between(recent_start, today);
    let previous = sum_between(previous_start, recent_start - Duration::days(1));
    if previous == 0 {
        return None;
    }

    let change = (recent as f64 - previous as f64) / previous as f64 * 100.0;
    Some(round_to(change, 1))
}

/// Overall risk in the AI response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// "Low", "Moderate" or "High"
    pub level: String,
    #[serde(default)]
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecautionaryStep {
    pub category: String,
    /// "High", "Medium" or "Low"
    pub priority: String,
    pub action: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleRecommendation {
    pub area: String,
    pub suggestion: String,
    pub benefit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalHealthContext {
    #[serde(default)]
    pub relevant_trends: Vec<String>,
    #[serde(default)]
    pub exposure_risks: Vec<String>,
}

/// Response body of the AI analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiHealthAnalysis {
    pub risk_assessment: RiskAssessment,
    #[serde(default)]
    pub precautionary_steps: Vec<PrecautionaryStep>,
    #[serde(default)]
    pub lifestyle_recommendations: Vec<LifestyleRecommendation>,
    #[serde(default)]
    pub local_health_context: LocalHealthContext,
    #[serde(default)]
    pub when_to_seek_help: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
}

impl AiHealthAnalysis {
    /// Parses a response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// High-priority steps in response order
    pub fn urgent_steps(&self) -> impl Iterator<Item = &PrecautionaryStep> {
        self.precautionary_steps
            .iter()
            .filter(|s| s.priority.eq_ignore_ascii_case("high"))
    }
}
