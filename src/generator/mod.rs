//! Synthetic community data generation
//!
//! Produces realistic-looking anonymized [`HealthRecord`](crate::domain::HealthRecord)
//! streams for demos and tests. Output is reproducible when a seed is set.

pub mod records;
pub mod regions;

pub use records::{disease_multiplier, is_monsoon, CommunityDataGenerator};
pub use regions::WeightedRegions;
