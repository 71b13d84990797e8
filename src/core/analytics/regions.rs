//! Per-region totals and average health score

use super::counter::OrderedCounter;
use super::Coordinates;
use crate::domain::scoring::round_to;
use crate::domain::HealthRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate for one named region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStat {
    pub total: usize,
    pub symptoms: BTreeMap<String, usize>,
    /// Mean stored health score, one decimal
    pub avg_health_score: f64,
    /// Coordinates of the first record seen for the region
    pub coordinates: Coordinates,
}

struct RegionAccumulator {
    total: usize,
    symptoms: OrderedCounter,
    score_sum: f64,
    coordinates: Coordinates,
}

/// Groups all records by region name
pub fn regional_trends(records: &[HealthRecord]) -> BTreeMap<String, RegionStat> {
    let mut regions: BTreeMap<String, RegionAccumulator> = BTreeMap::new();

    for record in records {
        let acc = regions
            .entry(record.region.clone())
            .or_insert_with(|| RegionAccumulator {
                total: 0,
                symptoms: OrderedCounter::new(),
                score_sum: 0.0,
                coordinates: Coordinates::of(record),
            });
        acc.total += 1;
        acc.score_sum += record.health_score;
        for symptom in &record.symptoms {
            acc.symptoms.add(&symptom.kind);
        }
    }

    regions
        .into_iter()
        .map(|(name, acc)| {
            let stat = RegionStat {
                total: acc.total,
                avg_health_score: round_to(acc.score_sum / acc.total as f64, 1),
                symptoms: acc.symptoms.into_entries().into_iter().collect(),
                coordinates: acc.coordinates,
            };
            (name, stat)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::test_support::{record_at, RecordSpec};
    use chrono::Utc;

    #[test]
    fn test_empty_input() {
        assert!(regional_trends(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_region() {
        let now = Utc::now();
        let records = vec![
            record_at(now, RecordSpec::default().region("Verna Village").at(15.3561, 73.9372).symptoms(&["fever"])),
            record_at(now, RecordSpec::default().region("Verna Village").at(15.3570, 73.9301).symptoms(&["fever", "cough", "nausea"])),
            record_at(now, RecordSpec::default().region("Verna Outskirts").at(15.35, 73.94)),
        ];

        let regions = regional_trends(&records);
        assert_eq!(regions.len(), 2);

        let village = &regions["Verna Village"];
        assert_eq!(village.total, 2);
        assert_eq!(village.symptoms["fever"], 2);
        assert_eq!(village.symptoms["cough"], 1);
        assert_eq!(village.symptoms["nausea"], 1);
        // scores 6.7 and 6.1
        assert_eq!(village.avg_health_score, 6.4);
        assert_eq!(village.coordinates.lat, 15.3561);

        let outskirts = &regions["Verna Outskirts"];
        assert!(outskirts.symptoms.is_empty());
        assert_eq!(outskirts.avg_health_score, 7.0);
    }
}
