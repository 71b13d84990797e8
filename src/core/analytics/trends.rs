//! Daily symptom time series over the trend window

use super::window::within_window;
use crate::config::AnalysisConfig;
use crate::domain::record::symptom_types::{COUGH, FEVER, HEADACHE};
use crate::domain::HealthRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub fever: usize,
    pub cough: usize,
    pub headache: usize,
    /// Records dated this day, with or without tracked symptoms; not emitted
    #[serde(skip_serializing, default)]
    pub total: usize,
}

impl DailyTrendPoint {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            fever: 0,
            cough: 0,
            headache: 0,
            total: 0,
        }
    }

    /// fever + cough + headache
    pub fn tracked_total(&self) -> usize {
        self.fever + self.cough + self.headache
    }
}

/// Buckets the trend window by each record's own UTC calendar date
///
/// Only fever, cough and headache are counted. Dates without records are
/// omitted, so the series can be sparse. Output is ascending by date.
pub fn symptom_trends(
    records: &[HealthRecord],
    now: DateTime<Utc>,
    config: &AnalysisConfig,
) -> Vec<DailyTrendPoint> {
    let timeline = records
        .iter()
        .filter(|r| within_window(now, r.timestamp, config.trend_window_days))
        .fold(BTreeMap::new(), |mut timeline, record| {
            let date = record.timestamp.date_naive();
            let point = timeline
                .entry(date)
                .or_insert_with(|| DailyTrendPoint::new(date));
            point.total += 1;
            for symptom in &record.symptoms {
                match symptom.kind.as_str() {
                    FEVER => point.fever += 1,
                    COUGH => point.cough += 1,
                    HEADACHE => point.headache += 1,
                    _ => {}
                }
            }
            timeline
        });

    tracing::debug!(
        days = timeline.len(),
        window_days = config.trend_window_days,
        "Built symptom timeline"
    );

    timeline.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::test_support::{record_at, RecordSpec};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(symptom_trends(&[], now(), &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_buckets_sorted_and_sparse() {
        let records = vec![
            record_at(now(), RecordSpec::default().symptoms(&["fever", "fatigue"])),
            record_at(now() - Duration::days(3), RecordSpec::default().symptoms(&["cough"])),
            record_at(now() - Duration::hours(1), RecordSpec::default().symptoms(&["headache", "cough"])),
            record_at(now() - Duration::days(3), RecordSpec::default()),
        ];

        let trends = symptom_trends(&records, now(), &AnalysisConfig::default());
        assert_eq!(trends.len(), 2);

        assert_eq!(trends[0].date, NaiveDate::from_ymd_opt(2025, 3, 28).unwrap());
        assert_eq!((trends[0].fever, trends[0].cough, trends[0].headache), (0, 1, 0));
        assert_eq!(trends[0].total, 2);

        assert_eq!(trends[1].date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!((trends[1].fever, trends[1].cough, trends[1].headache), (1, 1, 1));
        assert_eq!(trends[1].total, 2);
    }

    #[test]
    fn test_emitted_shape_has_tracked_counts_only() {
        let records = vec![record_at(now(), RecordSpec::default().symptoms(&["fever"]))];
        let trends = symptom_trends(&records, now(), &AnalysisConfig::default());

        let json = serde_json::to_value(&trends[0]).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["cough", "date", "fever", "headache"]);

        let parsed: DailyTrendPoint = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.fever, 1);
        assert_eq!(parsed.total, 0);
    }

    #[test]
    fn test_records_outside_window_are_dropped() {
        let records = vec![
            record_at(now() - Duration::days(31), RecordSpec::default().symptoms(&["fever"])),
            record_at(now() - Duration::days(30), RecordSpec::default().symptoms(&["fever"])),
        ];
        let trends = symptom_trends(&records, now(), &AnalysisConfig::default());
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_date_comes_from_record_timestamp() {
        // Just before midnight UTC lands on the earlier date regardless of `now`
        let late = Utc.with_ymd_and_hms(2025, 3, 29, 23, 59, 59).unwrap();
        let trends = symptom_trends(
            &[record_at(late, RecordSpec::default())],
            now(),
            &AnalysisConfig::default(),
        );
        assert_eq!(trends[0].date, NaiveDate::from_ymd_opt(2025, 3, 29).unwrap());
    }

    #[test]
    fn test_date_serializes_as_iso_string() {
        let trends = symptom_trends(
            &[record_at(now(), RecordSpec::default())],
            now(),
            &AnalysisConfig::default(),
        );
        let json = serde_json::to_value(&trends[0]).unwrap();
        assert_eq!(json["date"], "2025-03-31");
    }
}
