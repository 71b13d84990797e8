//! Health record domain model
//!
//! A [`HealthRecord`] is one anonymized health observation: demographics,
//! location, reported symptoms, lifestyle metrics and the derived score.
//! Records are immutable once built; the derived fields are always computed
//! through [`crate::domain::scoring`].

use super::errors::HealthPulseError;
use super::ids::UserId;
use super::result::Result;
use super::scoring::score_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Well-known symptom type names
pub mod symptom_types {
    pub const FEVER: &str = "fever";
    pub const COUGH: &str = "cough";
    pub const HEADACHE: &str = "headache";
    pub const FATIGUE: &str = "fatigue";
    pub const BODY_ACHES: &str = "body_aches";
    pub const SORE_THROAT: &str = "sore_throat";
    pub const RUNNY_NOSE: &str = "runny_nose";
    pub const NAUSEA: &str = "nausea";
    pub const DIARRHEA: &str = "diarrhea";
    pub const SKIN_RASH: &str = "skin_rash";
}

/// Inclusive bounds enforced by [`HealthRecord::validate`]
pub const SYMPTOM_SEVERITY_RANGE: (u8, u8) = (3, 8);
pub const SYMPTOM_DURATION_RANGE: (u8, u8) = (1, 7);
pub const SLEEP_HOURS_RANGE: (f64, f64) = (4.0, 10.0);
pub const STRESS_LEVEL_RANGE: (f64, f64) = (0.0, 10.0);
pub const HYDRATION_RANGE: (u8, u8) = (4, 9);

/// Fixed, ordered set of age brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "25-35")]
    From25To35,
    #[serde(rename = "35-45")]
    From35To45,
    #[serde(rename = "45-55")]
    From45To55,
    #[serde(rename = "55-65")]
    From55To65,
}

impl AgeRange {
    /// All brackets in ascending order
    pub const ALL: [AgeRange; 5] = [
        AgeRange::From18To25,
        AgeRange::From25To35,
        AgeRange::From35To45,
        AgeRange::From45To55,
        AgeRange::From55To65,
    ];

    /// Bracket label as it appears in records
    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::From18To25 => "18-25",
            AgeRange::From25To35 => "25-35",
            AgeRange::From35To45 => "35-45",
            AgeRange::From45To55 => "45-55",
            AgeRange::From55To65 => "55-65",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::M, Gender::F, Gender::Other];
}

/// Diet quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietQuality {
    Poor,
    Moderate,
    Healthy,
}

impl DietQuality {
    pub const ALL: [DietQuality; 3] = [DietQuality::Poor, DietQuality::Moderate, DietQuality::Healthy];
}

/// Risk category derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// One reported symptom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    /// Symptom type, e.g. `fever`
    #[serde(rename = "type")]
    pub kind: String,

    /// Severity on a 3-8 scale
    pub severity: u8,

    /// How many days the symptom has lasted (1-7)
    #[serde(alias = "duration_days")]
    pub duration_days: u8,
}

impl Symptom {
    pub fn new(kind: impl Into<String>, severity: u8, duration_days: u8) -> Self {
        Self {
            kind: kind.into(),
            severity,
            duration_days,
        }
    }
}

/// Lifestyle metrics attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    #[serde(alias = "sleep_hours")]
    pub sleep_hours: f64,

    #[serde(alias = "exercise_minutes")]
    pub exercise_minutes: f64,

    #[serde(alias = "stress_level")]
    pub stress_level: f64,

    #[serde(alias = "diet_quality")]
    pub diet_quality: DietQuality,

    #[serde(alias = "hydration_glasses")]
    pub hydration_glasses: u8,
}

/// One anonymized health observation
///
/// Serialized in camelCase; the snake_case field names written by older
/// exporters (`user_id`, `lat`, `long`, `age_range`, ...) are accepted on input.
///
/// # Examples
///
/// ```
/// use healthpulse::domain::record::{
///     AgeRange, DietQuality, Gender, HealthRecord, Lifestyle, RiskLevel, Symptom,
/// };
/// use chrono::Utc;
///
/// let record = HealthRecord::builder()
///     .user_id("anon_user_abc123def")
///     .unwrap()
///     .region("Verna Village")
///     .coordinates(15.356, 73.937)
///     .age_range(AgeRange::From25To35)
///     .gender(Gender::F)
///     .timestamp(Utc::now())
///     .symptom(Symptom::new("fever", 5, 2))
///     .lifestyle(Lifestyle {
///         sleep_hours: 7.5,
///         exercise_minutes: 30.0,
///         stress_level: 5.0,
///         diet_quality: DietQuality::Healthy,
///         hydration_glasses: 8,
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(record.health_score, 6.7);
/// assert_eq!(record.risk_level, RiskLevel::Moderate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    #[serde(alias = "user_id")]
    pub user_id: UserId,

    pub region: String,

    #[serde(alias = "lat")]
    pub latitude: f64,

    #[serde(alias = "long")]
    pub longitude: f64,

    #[serde(alias = "age_range")]
    pub age_range: AgeRange,

    pub gender: Gender,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub symptoms: Vec<Symptom>,

    pub lifestyle: Lifestyle,

    #[serde(alias = "health_score")]
    pub health_score: f64,

    #[serde(alias = "risk_level")]
    pub risk_level: RiskLevel,
}

impl HealthRecord {
    /// Creates a new builder for constructing a HealthRecord
    pub fn builder() -> HealthRecordBuilder {
        HealthRecordBuilder::default()
    }

    /// Whether the record carries a symptom of the given type
    pub fn has_symptom(&self, kind: &str) -> bool {
        self.symptoms.iter().any(|s| s.kind == kind)
    }

    /// Whether the record carries any of the given symptom types
    pub fn has_any_symptom(&self, kinds: &[&str]) -> bool {
        self.symptoms.iter().any(|s| kinds.contains(&s.kind.as_str()))
    }

    /// Checks the record against the record contract
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found: out-of-range
    /// coordinates or metrics, duplicate symptom types, or derived fields
    /// that disagree with the scoring function.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("region cannot be empty".to_string());
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} out of range", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("longitude {} out of range", self.longitude));
        }

        let mut seen = HashSet::new();
        for symptom in &self.symptoms {
            if symptom.kind.trim().is_empty() {
                return Err("symptom type cannot be empty".to_string());
            }
            if !seen.insert(symptom.kind.as_str()) {
                return Err(format!("duplicate symptom type '{}'", symptom.kind));
            }
            let (min, max) = SYMPTOM_SEVERITY_RANGE;
            if !(min..=max).contains(&symptom.severity) {
                return Err(format!(
                    "symptom '{}' severity {} outside {min}-{max}",
                    symptom.kind, symptom.severity
                ));
            }
            let (min, max) = SYMPTOM_DURATION_RANGE;
            if !(min..=max).contains(&symptom.duration_days) {
                return Err(format!(
                    "symptom '{}' duration {} days outside {min}-{max}",
                    symptom.kind, symptom.duration_days
                ));
            }
        }

        let lifestyle = &self.lifestyle;
        let (min, max) = SLEEP_HOURS_RANGE;
        if !(min..=max).contains(&lifestyle.sleep_hours) {
            return Err(format!("sleep_hours {} outside {min}-{max}", lifestyle.sleep_hours));
        }
        if lifestyle.exercise_minutes.is_nan() || lifestyle.exercise_minutes < 0.0 {
            return Err(format!(
                "exercise_minutes {} must be >= 0",
                lifestyle.exercise_minutes
            ));
        }
        let (min, max) = STRESS_LEVEL_RANGE;
        if !(min..=max).contains(&lifestyle.stress_level) {
            return Err(format!("stress_level {} outside {min}-{max}", lifestyle.stress_level));
        }
        let (min, max) = HYDRATION_RANGE;
        if !(min..=max).contains(&lifestyle.hydration_glasses) {
            return Err(format!(
                "hydration_glasses {} outside {min}-{max}",
                lifestyle.hydration_glasses
            ));
        }

        let (score, risk) = score_record(&self.lifestyle, &self.symptoms);
        if (score - self.health_score).abs() > 1e-6 {
            return Err(format!(
                "health_score {} does not match computed score {score}",
                self.health_score
            ));
        }
        if risk != self.risk_level {
            return Err(format!(
                "risk_level {} does not match computed risk level {risk}",
                self.risk_level
            ));
        }

        Ok(())
    }
}

/// Validates every record in a collection, failing on the first bad one
pub fn validate_records(records: &[HealthRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| HealthPulseError::invalid_record(index, reason))?;
    }
    Ok(())
}

/// Builder for constructing HealthRecord instances
///
/// The derived `health_score` and `risk_level` are computed in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct HealthRecordBuilder {
    user_id: Option<UserId>,
    region: Option<String>,
    coordinates: Option<(f64, f64)>,
    age_range: Option<AgeRange>,
    gender: Option<Gender>,
    timestamp: Option<DateTime<Utc>>,
    symptoms: Vec<Symptom>,
    lifestyle: Option<Lifestyle>,
}

impl HealthRecordBuilder {
    /// Creates a new HealthRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user ID from a string
    pub fn user_id(mut self, id: impl Into<String>) -> Result<Self> {
        let id = UserId::new(id).map_err(HealthPulseError::Validation)?;
        self.user_id = Some(id);
        Ok(self)
    }

    /// Sets an already validated user ID
    pub fn with_user_id(mut self, id: UserId) -> Self {
        self.user_id = Some(id);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets latitude and longitude in degrees
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    pub fn age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = Some(age_range);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Appends one symptom
    pub fn symptom(mut self, symptom: Symptom) -> Self {
        self.symptoms.push(symptom);
        self
    }

    /// Replaces the symptom list
    pub fn symptoms(mut self, symptoms: Vec<Symptom>) -> Self {
        self.symptoms = symptoms;
        self
    }

    pub fn lifestyle(mut self, lifestyle: Lifestyle) -> Self {
        self.lifestyle = Some(lifestyle);
        self
    }

    /// Builds the record, computing its health score and risk level
    ///
    /// # Errors
    ///
    /// Returns `HealthPulseError::Validation` if a required field is missing
    /// or the assembled record fails [`HealthRecord::validate`].
    pub fn build(self) -> Result<HealthRecord> {
        let missing = |field: &str| HealthPulseError::Validation(format!("{field} is required"));

        let lifestyle = self.lifestyle.ok_or_else(|| missing("lifestyle"))?;
        let (latitude, longitude) = self.coordinates.ok_or_else(|| missing("coordinates"))?;
        let (health_score, risk_level) = score_record(&lifestyle, &self.symptoms);

        let record = HealthRecord {
            user_id: self.user_id.ok_or_else(|| missing("user_id"))?,
            region: self.region.ok_or_else(|| missing("region"))?,
            latitude,
            longitude,
            age_range: self.age_range.ok_or_else(|| missing("age_range"))?,
            gender: self.gender.ok_or_else(|| missing("gender"))?,
            timestamp: self.timestamp.ok_or_else(|| missing("timestamp"))?,
            symptoms: self.symptoms,
            lifestyle,
            health_score,
            risk_level,
        };

        record.validate().map_err(HealthPulseError::Validation)?;
        Ok(record)
    }
}
