//! Community record generator

use super::regions::WeightedRegions;
use crate::config::{GeneratorConfig, RegionConfig};
use crate::domain::errors::HealthPulseError;
use crate::domain::ids::UserId;
use crate::domain::record::{
    symptom_types, AgeRange, DietQuality, Gender, HealthRecord, Lifestyle, Symptom,
    HYDRATION_RANGE, SLEEP_HOURS_RANGE, STRESS_LEVEL_RANGE, SYMPTOM_DURATION_RANGE,
    SYMPTOM_SEVERITY_RANGE,
};
use crate::domain::result::Result;
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COORDINATE_JITTER: f64 = 0.01;
const USER_ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Symptom catalogue: (type, base chance, scaled by the seasonal multiplier)
const SYMPTOM_CHANCES: [(&str, f64, bool); 10] = [
    (symptom_types::FEVER, 0.08, true),
    (symptom_types::COUGH, 0.12, true),
    (symptom_types::HEADACHE, 0.15, false),
    (symptom_types::FATIGUE, 0.20, false),
    (symptom_types::BODY_ACHES, 0.10, false),
    (symptom_types::SORE_THROAT, 0.10, true),
    (symptom_types::RUNNY_NOSE, 0.08, false),
    (symptom_types::NAUSEA, 0.06, false),
    (symptom_types::DIARRHEA, 0.05, true),
    (symptom_types::SKIN_RASH, 0.04, false),
];

/// July through October
pub fn is_monsoon(at: DateTime<Utc>) -> bool {
    (7..=10).contains(&at.month())
}

pub fn disease_multiplier(at: DateTime<Utc>) -> f64 {
    if is_monsoon(at) {
        2.0
    } else {
        1.2
    }
}

/// Base sleep hours, exercise minutes and stress level for an age bracket
struct LifestyleProfile {
    sleep: f64,
    exercise: f64,
    stress: f64,
}

fn profile_for(age: AgeRange) -> LifestyleProfile {
    let (sleep, exercise, stress) = match age {
        AgeRange::From18To25 => (6.5, 35.0, 6.0),
        AgeRange::From25To35 => (6.0, 25.0, 7.0),
        AgeRange::From35To45 => (6.5, 20.0, 6.0),
        AgeRange::From45To55 => (7.0, 25.0, 5.0),
        AgeRange::From55To65 => (7.0, 30.0, 4.0),
    };
    LifestyleProfile {
        sleep,
        exercise,
        stress,
    }
}

/// Generates anonymized community health records
///
/// # Examples
///
/// ```
/// use healthpulse::config::GeneratorConfig;
/// use healthpulse::generator::CommunityDataGenerator;
/// use chrono::Utc;
///
/// let config = GeneratorConfig {
///     days: 2,
///     seed: Some(7),
///     ..GeneratorConfig::default()
/// };
/// let mut generator = CommunityDataGenerator::new(config).unwrap();
/// let records = generator.generate(Utc::now()).unwrap();
/// assert!((40..=60).contains(&records.len()));
/// ```
pub struct CommunityDataGenerator {
    config: GeneratorConfig,
    regions: WeightedRegions,
    rng: StdRng,
}

impl CommunityDataGenerator {
    /// Creates a generator, seeded from the config when a seed is set
    ///
    /// # Errors
    ///
    /// Returns `HealthPulseError::Generator` for an unusable region list or
    /// inverted daily entry bounds.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.min_daily_entries > config.max_daily_entries {
            return Err(HealthPulseError::Generator(format!(
                "min_daily_entries ({}) exceeds max_daily_entries ({})",
                config.min_daily_entries, config.max_daily_entries
            )));
        }

        let regions = WeightedRegions::new(config.regions.clone())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            regions,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `days` days of records counting back from `now`
    ///
    /// Day `d` records are all timestamped `now - d days`.
    pub fn generate(&mut self, now: DateTime<Utc>) -> Result<Vec<HealthRecord>> {
        let mut records = Vec::new();

        for day in 0..self.config.days {
            let timestamp = now - Duration::days(i64::from(day));
            let daily_entries = self
                .rng
                .gen_range(self.config.min_daily_entries..=self.config.max_daily_entries);

            for _ in 0..daily_entries {
                records.push(self.generate_record(timestamp)?);
            }
        }

        tracing::info!(
            records = records.len(),
            days = self.config.days,
            seeded = self.config.seed.is_some(),
            "Generated community records"
        );

        Ok(records)
    }

    /// Generates a single record at `timestamp`
    pub fn generate_record(&mut self, timestamp: DateTime<Utc>) -> Result<HealthRecord> {
        let region = self.regions.sample(&mut self.rng).clone();
        let age_range = AgeRange::ALL[self.rng.gen_range(0..AgeRange::ALL.len())];
        let gender = Gender::ALL[self.rng.gen_range(0..Gender::ALL.len())];

        let symptoms = self.generate_symptoms(disease_multiplier(timestamp));
        let lifestyle = self.generate_lifestyle(age_range, &region);

        let latitude = region.lat + self.rng.gen_range(-COORDINATE_JITTER..COORDINATE_JITTER);
        let longitude = region.long + self.rng.gen_range(-COORDINATE_JITTER..COORDINATE_JITTER);

        HealthRecord::builder()
            .with_user_id(self.anonymous_user_id())
            .region(region.name)
            .coordinates(latitude, longitude)
            .age_range(age_range)
            .gender(gender)
            .timestamp(timestamp)
            .symptoms(symptoms)
            .lifestyle(lifestyle)
            .build()
            .map_err(|e| HealthPulseError::Generator(format!("generated record rejected: {e}")))
    }

    fn anonymous_user_id(&mut self) -> UserId {
        let suffix: String = (0..USER_ID_SUFFIX_LEN)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect();
        UserId::anonymized(&suffix)
    }

    fn generate_symptoms(&mut self, multiplier: f64) -> Vec<Symptom> {
        let (min_sev, max_sev) = SYMPTOM_SEVERITY_RANGE;
        let (min_dur, max_dur) = SYMPTOM_DURATION_RANGE;

        SYMPTOM_CHANCES
            .iter()
            .filter_map(|&(kind, base, seasonal)| {
                let chance = if seasonal { base * multiplier } else { base };
                if self.rng.gen::<f64>() < chance {
                    Some(Symptom::new(
                        kind,
                        self.rng.gen_range(min_sev..=max_sev),
                        self.rng.gen_range(min_dur..=max_dur),
                    ))
                } else {
                    None
                }
            })
            .collect()
    }

    fn generate_lifestyle(&mut self, age_range: AgeRange, region: &RegionConfig) -> Lifestyle {
        let profile = profile_for(age_range);
        let urban_bonus = if region.urban { 1.0 } else { 0.0 };
        let (min_sleep, max_sleep) = SLEEP_HOURS_RANGE;
        let (min_water, max_water) = HYDRATION_RANGE;

        Lifestyle {
            sleep_hours: (profile.sleep + self.rng.gen_range(-1.0..1.0)).clamp(min_sleep, max_sleep),
            exercise_minutes: (profile.exercise + self.rng.gen_range(-15.0..15.0)).max(0.0),
            stress_level: (profile.stress + urban_bonus + self.rng.gen_range(-1.0..1.0))
                .clamp(STRESS_LEVEL_RANGE.0, STRESS_LEVEL_RANGE.1),
            diet_quality: DietQuality::ALL[self.rng.gen_range(0..DietQuality::ALL.len())],
            hydration_glasses: self.rng.gen_range(min_water..=max_water),
        }
    }
}
