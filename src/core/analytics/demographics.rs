//! Lifestyle averages per age bracket

use crate::domain::scoring::round_to;
use crate::domain::{AgeRange, HealthRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean lifestyle metrics for one age bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupStat {
    pub count: usize,
    /// One decimal
    pub avg_stress: f64,
    /// One decimal
    pub avg_sleep: f64,
    /// Rounded to whole minutes
    pub avg_exercise: i64,
}

#[derive(Default)]
struct AgeGroupAccumulator {
    count: usize,
    stress: f64,
    sleep: f64,
    exercise: f64,
}

impl AgeGroupAccumulator {
    fn add(&mut self, record: &HealthRecord) {
        self.count += 1;
        self.stress += record.lifestyle.stress_level;
        self.sleep += record.lifestyle.sleep_hours;
        self.exercise += record.lifestyle.exercise_minutes;
    }

    fn finish(self) -> AgeGroupStat {
        if self.count == 0 {
            return AgeGroupStat {
                count: 0,
                avg_stress: 0.0,
                avg_sleep: 0.0,
                avg_exercise: 0,
            };
        }
        let n = self.count as f64;
        AgeGroupStat {
            count: self.count,
            avg_stress: round_to(self.stress / n, 1),
            avg_sleep: round_to(self.sleep / n, 1),
            avg_exercise: (self.exercise / n).round() as i64,
        }
    }
}

/// Groups all records by age bracket and averages their lifestyle metrics
///
/// Only brackets present in the input appear in the map.
pub fn demographic_insights(records: &[HealthRecord]) -> BTreeMap<AgeRange, AgeGroupStat> {
    records
        .iter()
        .fold(
            BTreeMap::<AgeRange, AgeGroupAccumulator>::new(),
            |mut groups, record| {
                groups.entry(record.age_range).or_default().add(record);
                groups
            },
        )
        .into_iter()
        .map(|(age_range, acc)| (age_range, acc.finish()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::test_support::{record_at, RecordSpec};
    use chrono::Utc;

    #[test]
    fn test_empty_input() {
        assert!(demographic_insights(&[]).is_empty());
    }

    #[test]
    fn test_empty_accumulator_does_not_divide_by_zero() {
        let stat = AgeGroupAccumulator::default().finish();
        assert_eq!(stat.count, 0);
        assert_eq!(stat.avg_sleep, 0.0);
    }

    #[test]
    fn test_averages_per_bracket() {
        let now = Utc::now();
        let records = vec![
            record_at(now, RecordSpec::default().age(AgeRange::From18To25).sleep(6.0).stress(6.0).exercise(20.0)),
            record_at(now, RecordSpec::default().age(AgeRange::From18To25).sleep(7.5).stress(7.0).exercise(25.0)),
            record_at(now, RecordSpec::default().age(AgeRange::From55To65).sleep(8.2).stress(3.3).exercise(41.0)),
        ];

        let insights = demographic_insights(&records);
        assert_eq!(insights.len(), 2);

        let young = &insights[&AgeRange::From18To25];
        assert_eq!(young.count, 2);
        assert_eq!(young.avg_sleep, 6.8);
        assert_eq!(young.avg_stress, 6.5);
        assert_eq!(young.avg_exercise, 23);

        let older = &insights[&AgeRange::From55To65];
        assert_eq!(older.count, 1);
        assert_eq!(older.avg_sleep, 8.2);
        assert_eq!(older.avg_exercise, 41);
    }

    #[test]
    fn test_serializes_with_bracket_keys() {
        let records = vec![record_at(Utc::now(), RecordSpec::default().age(AgeRange::From45To55))];
        let json = serde_json::to_value(demographic_insights(&records)).unwrap();
        assert_eq!(json["45-55"]["count"], 1);
        assert!(json["45-55"].get("avgSleep").is_some());
    }
}
