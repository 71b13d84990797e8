//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use healthpulse::config::GeneratorConfig;
use healthpulse::domain::{AgeRange, DietQuality, Gender, HealthRecord, Lifestyle, Symptom};
use healthpulse::generator::CommunityDataGenerator;

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 20, 18, 0, 0).unwrap()
}

/// Low-risk record (score 7.0 before symptoms) at Verna Village
pub fn record(timestamp: DateTime<Utc>, symptoms: &[&str]) -> HealthRecord {
    build(timestamp, symptoms, healthy_lifestyle(), (15.356, 73.937))
}

/// Record whose lifestyle alone scores 4.0
pub fn high_risk_record(timestamp: DateTime<Utc>, symptoms: &[&str]) -> HealthRecord {
    let lifestyle = Lifestyle {
        sleep_hours: 5.0,
        exercise_minutes: 10.0,
        stress_level: 8.0,
        diet_quality: DietQuality::Poor,
        hydration_glasses: 5,
    };
    build(timestamp, symptoms, lifestyle, (15.356, 73.937))
}

pub fn healthy_lifestyle() -> Lifestyle {
    Lifestyle {
        sleep_hours: 7.5,
        exercise_minutes: 30.0,
        stress_level: 4.0,
        diet_quality: DietQuality::Healthy,
        hydration_glasses: 8,
    }
}

pub fn build(
    timestamp: DateTime<Utc>,
    symptoms: &[&str],
    lifestyle: Lifestyle,
    coordinates: (f64, f64),
) -> HealthRecord {
    HealthRecord::builder()
        .user_id("anon_user_itest0001")
        .unwrap()
        .region("Verna Village")
        .coordinates(coordinates.0, coordinates.1)
        .age_range(AgeRange::From35To45)
        .gender(Gender::M)
        .timestamp(timestamp)
        .symptoms(symptoms.iter().map(|s| Symptom::new(*s, 5, 3)).collect())
        .lifestyle(lifestyle)
        .build()
        .unwrap()
}

/// Thirty days of seeded synthetic records ending at `now`
pub fn generated(seed: u64, now: DateTime<Utc>) -> Vec<HealthRecord> {
    CommunityDataGenerator::new(GeneratorConfig {
        seed: Some(seed),
        ..GeneratorConfig::default()
    })
    .unwrap()
    .generate(now)
    .unwrap()
}
