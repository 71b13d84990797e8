//! Domain models and types for HealthPulse.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Record model** ([`HealthRecord`], [`Symptom`], [`Lifestyle`]) and its enums
//! - **Strongly-typed identifiers** ([`UserId`])
//! - **Deterministic scoring** ([`scoring::calculate_health_score`], [`scoring::risk_level_for`])
//! - **Error types** ([`HealthPulseError`]) and the [`Result`] alias
//!
//! # Builder Pattern
//!
//! Records are assembled with a builder so the derived score and risk level
//! can never disagree with the lifestyle and symptoms they came from:
//!
//! ```rust
//! use healthpulse::domain::{AgeRange, DietQuality, Gender, HealthRecord, Lifestyle};
//! use chrono::Utc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = HealthRecord::builder()
//!     .user_id("anon_user_9f8e7d6c5")?
//!     .region("Verna Market Area")
//!     .coordinates(15.358, 73.935)
//!     .age_range(AgeRange::From45To55)
//!     .gender(Gender::M)
//!     .timestamp(Utc::now())
//!     .lifestyle(Lifestyle {
//!         sleep_hours: 6.5,
//!         exercise_minutes: 15.0,
//!         stress_level: 6.0,
//!         diet_quality: DietQuality::Moderate,
//!         hydration_glasses: 6,
//!     })
//!     .build()?;
//! assert_eq!(record.health_score, 6.5);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;
pub mod scoring;

// Re-export commonly used types for convenience
pub use errors::HealthPulseError;
pub use ids::UserId;
pub use record::{
    symptom_types, validate_records, AgeRange, DietQuality, Gender, HealthRecord,
    HealthRecordBuilder, Lifestyle, RiskLevel, Symptom,
};
pub use result::Result;
