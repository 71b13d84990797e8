//! Symptom prevalence ranking over the full history

use super::counter::OrderedCounter;
use crate::domain::scoring::round_to;
use crate::domain::HealthRecord;
use serde::{Deserialize, Serialize};

/// One ranked symptom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRankEntry {
    pub symptom: String,
    pub count: usize,
    /// Occurrences per 100 records, one decimal
    pub percentage: f64,
}

/// Ranks symptom types by occurrence count, descending
///
/// Ties keep first-seen order. At most `limit` entries are returned.
pub fn top_symptoms(records: &[HealthRecord], limit: usize) -> Vec<SymptomRankEntry> {
    if records.is_empty() {
        return Vec::new();
    }

    let counts = records
        .iter()
        .flat_map(|r| r.symptoms.iter())
        .fold(OrderedCounter::new(), |mut counter, symptom| {
            counter.add(&symptom.kind);
            counter
        });

    let total_records = records.len() as f64;
    let mut ranking: Vec<SymptomRankEntry> = counts
        .into_entries()
        .into_iter()
        .map(|(symptom, count)| SymptomRankEntry {
            symptom,
            count,
            percentage: round_to(count as f64 / total_records * 100.0, 1),
        })
        .collect();

    // sort_by is stable, which preserves first-seen order on equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(limit);
    ranking
}
