//! Deterministic health scoring
//!
//! The stored `health_score` and `risk_level` of every record must equal what
//! these functions produce for the record's lifestyle and symptoms.

use super::record::{DietQuality, Lifestyle, RiskLevel, Symptom};

/// Score every record starts from before penalties
pub const BASE_HEALTH_SCORE: f64 = 7.0;

/// Lowest and highest score a record can carry
pub const MIN_HEALTH_SCORE: f64 = 1.0;
pub const MAX_HEALTH_SCORE: f64 = 10.0;

const SHORT_SLEEP_HOURS: f64 = 6.0;
const SHORT_SLEEP_PENALTY: f64 = 1.0;
const LOW_EXERCISE_MINUTES: f64 = 20.0;
const LOW_EXERCISE_PENALTY: f64 = 0.5;
const HIGH_STRESS_LEVEL: f64 = 7.0;
const HIGH_STRESS_PENALTY: f64 = 0.8;
const POOR_DIET_PENALTY: f64 = 0.7;
const PER_SYMPTOM_PENALTY: f64 = 0.3;
const SEVERE_SYMPTOM_THRESHOLD: u8 = 7;
const SEVERE_SYMPTOM_PENALTY: f64 = 0.5;

/// Rounds `value` to `places` decimal places, halves away from zero
///
/// # Examples
///
/// ```
/// use healthpulse::domain::scoring::round_to;
///
/// assert_eq!(round_to(33.3333, 1), 33.3);
/// assert_eq!(round_to(6.1000000000000005, 1), 6.1);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Computes the health score for a lifestyle/symptom pair
///
/// Starts at 7.0 and subtracts fixed penalties, clamps to `[1, 10]` and
/// rounds to one decimal place.
///
/// # Examples
///
/// ```
/// use healthpulse::domain::record::{DietQuality, Lifestyle};
/// use healthpulse::domain::scoring::calculate_health_score;
///
/// let lifestyle = Lifestyle {
///     sleep_hours: 5.0,
///     exercise_minutes: 30.0,
///     stress_level: 4.0,
///     diet_quality: DietQuality::Healthy,
///     hydration_glasses: 6,
/// };
/// assert_eq!(calculate_health_score(&lifestyle, &[]), 6.0);
/// ```
pub fn calculate_health_score(lifestyle: &Lifestyle, symptoms: &[Symptom]) -> f64 {
    let mut score = BASE_HEALTH_SCORE;

    if lifestyle.sleep_hours < SHORT_SLEEP_HOURS {
        score -= SHORT_SLEEP_PENALTY;
    }
    if lifestyle.exercise_minutes < LOW_EXERCISE_MINUTES {
        score -= LOW_EXERCISE_PENALTY;
    }
    if lifestyle.stress_level > HIGH_STRESS_LEVEL {
        score -= HIGH_STRESS_PENALTY;
    }
    if lifestyle.diet_quality == DietQuality::Poor {
        score -= POOR_DIET_PENALTY;
    }

    score -= symptoms.len() as f64 * PER_SYMPTOM_PENALTY;
    for symptom in symptoms {
        if symptom.severity > SEVERE_SYMPTOM_THRESHOLD {
            score -= SEVERE_SYMPTOM_PENALTY;
        }
    }

    round_to(score.clamp(MIN_HEALTH_SCORE, MAX_HEALTH_SCORE), 1)
}

/// Maps a (rounded) health score onto a risk level
pub fn risk_level_for(score: f64) -> RiskLevel {
    if score >= 7.0 {
        RiskLevel::Low
    } else if score >= 5.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Computes both derived fields of a record
pub fn score_record(lifestyle: &Lifestyle, symptoms: &[Symptom]) -> (f64, RiskLevel) {
    let score = calculate_health_score(lifestyle, symptoms);
    (score, risk_level_for(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn healthy_lifestyle() -> Lifestyle {
        Lifestyle {
            sleep_hours: 8.0,
            exercise_minutes: 45.0,
            stress_level: 3.0,
            diet_quality: DietQuality::Healthy,
            hydration_glasses: 8,
        }
    }

    fn symptom(kind: &str, severity: u8) -> Symptom {
        Symptom::new(kind, severity, 2)
    }

    #[test]
    fn test_no_penalties_keeps_base_score() {
        let (score, risk) = score_record(&healthy_lifestyle(), &[]);
        assert_eq!(score, 7.0);
        assert_eq!(risk, RiskLevel::Low);
    }

    #[test]
    fn test_all_lifestyle_penalties() {
        let lifestyle = Lifestyle {
            sleep_hours: 5.5,
            exercise_minutes: 10.0,
            stress_level: 8.0,
            diet_quality: DietQuality::Poor,
            hydration_glasses: 4,
        };
        // 7.0 - 1.0 - 0.5 - 0.8 - 0.7
        assert_eq!(calculate_health_score(&lifestyle, &[]), 4.0);
    }

    #[test]
    fn test_symptom_penalties() {
        let symptoms = vec![symptom("fever", 8), symptom("cough", 4), symptom("headache", 7)];
        // 7.0 - 3 * 0.3 - 0.5 (only the severity-8 symptom is severe)
        assert_eq!(calculate_health_score(&healthy_lifestyle(), &symptoms), 5.6);
    }

    #[test]
    fn test_score_is_clamped_to_minimum() {
        let lifestyle = Lifestyle {
            sleep_hours: 4.0,
            exercise_minutes: 0.0,
            stress_level: 10.0,
            diet_quality: DietQuality::Poor,
            hydration_glasses: 4,
        };
        let symptoms: Vec<Symptom> = ["fever", "cough", "headache", "fatigue", "nausea", "diarrhea"]
            .iter()
            .map(|kind| symptom(kind, 8))
            .collect();
        assert_eq!(calculate_health_score(&lifestyle, &symptoms), MIN_HEALTH_SCORE);
    }

    #[test]
    fn test_boundary_values_do_not_penalize() {
        let lifestyle = Lifestyle {
            sleep_hours: 6.0,
            exercise_minutes: 20.0,
            stress_level: 7.0,
            diet_quality: DietQuality::Moderate,
            hydration_glasses: 5,
        };
        assert_eq!(calculate_health_score(&lifestyle, &[]), 7.0);
    }

    #[test_case(7.0, RiskLevel::Low ; "seven is low")]
    #[test_case(6.9, RiskLevel::Moderate ; "just under seven is moderate")]
    #[test_case(5.0, RiskLevel::Moderate ; "five is moderate")]
    #[test_case(4.9, RiskLevel::High ; "just under five is high")]
    #[test_case(1.0, RiskLevel::High ; "minimum is high")]
    fn test_risk_level_thresholds(score: f64, expected: RiskLevel) {
        assert_eq!(risk_level_for(score), expected);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(20.0, 1), 20.0);
        assert_eq!(round_to(15.04, 1), 15.0);
        assert_eq!(round_to(15.06, 1), 15.1);
        assert_eq!(round_to(41.5, 0), 42.0);
    }
}
