//! Record fixtures for analyzer unit tests

use crate::domain::{AgeRange, DietQuality, Gender, HealthRecord, Lifestyle, Symptom};
use chrono::{DateTime, Utc};

/// Shape of a fixture record; unset fields take low-risk defaults
#[derive(Debug, Clone)]
pub struct RecordSpec {
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub age_range: AgeRange,
    pub symptoms: Vec<String>,
    pub sleep_hours: f64,
    pub exercise_minutes: f64,
    pub stress_level: f64,
    pub diet_quality: DietQuality,
}

impl Default for RecordSpec {
    fn default() -> Self {
        Self {
            region: "Verna Village".to_string(),
            latitude: 15.356,
            longitude: 73.937,
            age_range: AgeRange::From25To35,
            symptoms: Vec::new(),
            sleep_hours: 7.0,
            exercise_minutes: 30.0,
            stress_level: 5.0,
            diet_quality: DietQuality::Healthy,
        }
    }
}

impl RecordSpec {
    pub fn symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn stress(mut self, level: f64) -> Self {
        self.stress_level = level;
        self
    }

    pub fn sleep(mut self, hours: f64) -> Self {
        self.sleep_hours = hours;
        self
    }

    pub fn exercise(mut self, minutes: f64) -> Self {
        self.exercise_minutes = minutes;
        self
    }

    pub fn age(mut self, age_range: AgeRange) -> Self {
        self.age_range = age_range;
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Lifestyle bad enough to score below 5 on its own
    pub fn high_risk(mut self) -> Self {
        self.sleep_hours = 5.0;
        self.exercise_minutes = 10.0;
        self.stress_level = 8.0;
        self.diet_quality = DietQuality::Poor;
        self
    }
}

pub fn record_at(timestamp: DateTime<Utc>, spec: RecordSpec) -> HealthRecord {
    HealthRecord::builder()
        .user_id("anon_user_fixture01")
        .unwrap()
        .region(spec.region)
        .coordinates(spec.latitude, spec.longitude)
        .age_range(spec.age_range)
        .gender(Gender::F)
        .timestamp(timestamp)
        .symptoms(
            spec.symptoms
                .iter()
                .map(|kind| Symptom::new(kind.as_str(), 5, 2))
                .collect(),
        )
        .lifestyle(Lifestyle {
            sleep_hours: spec.sleep_hours,
            exercise_minutes: spec.exercise_minutes,
            stress_level: spec.stress_level,
            diet_quality: spec.diet_quality,
            hydration_glasses: 6,
        })
        .build()
        .unwrap()
}
