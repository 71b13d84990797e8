//! Weighted area selection

use crate::config::RegionConfig;
use crate::domain::errors::HealthPulseError;
use crate::domain::result::Result;
use rand::Rng;

/// Areas with cumulative weights for proportional sampling
#[derive(Debug, Clone)]
pub struct WeightedRegions {
    regions: Vec<RegionConfig>,
    cumulative: Vec<u64>,
    total: u64,
}

impl WeightedRegions {
    /// Builds the picker
    ///
    /// # Errors
    ///
    /// Returns `HealthPulseError::Generator` when the list is empty or every
    /// weight is zero.
    pub fn new(regions: Vec<RegionConfig>) -> Result<Self> {
        if regions.is_empty() {
            return Err(HealthPulseError::Generator(
                "at least one region is required".to_string(),
            ));
        }

        let mut running = 0u64;
        let cumulative: Vec<u64> = regions
            .iter()
            .map(|r| {
                running += u64::from(r.weight);
                running
            })
            .collect();

        if running == 0 {
            return Err(HealthPulseError::Generator(
                "region weights sum to zero".to_string(),
            ));
        }

        Ok(Self {
            regions,
            cumulative,
            total: running,
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total
    }

    pub fn regions(&self) -> &[RegionConfig] {
        &self.regions
    }

    /// Picks the area for a uniform draw `u` in `[0, 1)`
    ///
    /// Picks the first area whose cumulative weight reaches `u * total`, so a
    /// draw on a band boundary goes to the earlier area. Out-of-range draws
    /// fall back to the first area.
    pub fn pick(&self, u: f64) -> &RegionConfig {
        let target = u * self.total as f64;
        let idx = self.cumulative.partition_point(|&c| (c as f64) < target);
        self.regions.get(idx).unwrap_or(&self.regions[0])
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &RegionConfig {
        self.pick(rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_regions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    fn regions(weights: &[u32]) -> Vec<RegionConfig> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| RegionConfig::new(&format!("Area {i}"), 15.0, 73.0, *w, false))
            .collect()
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(WeightedRegions::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_zero_total() {
        let err = WeightedRegions::new(regions(&[0, 0])).unwrap_err();
        assert!(err.to_string().contains("zero"));
    }

    #[test_case(0.0, "Area 0" ; "start of range")]
    #[test_case(0.29, "Area 0" ; "inside first band")]
    #[test_case(0.30, "Area 0" ; "band boundary stays with earlier area")]
    #[test_case(0.31, "Area 1" ; "just past boundary")]
    #[test_case(0.99, "Area 2" ; "last band")]
    #[test_case(1.5, "Area 0" ; "out of range falls back")]
    fn test_pick(u: f64, expected: &str) {
        let picker = WeightedRegions::new(regions(&[30, 50, 20])).unwrap();
        assert_eq!(picker.pick(u).name, expected);
    }

    #[test]
    fn test_zero_weight_first_region_only_on_zero_draw() {
        let picker = WeightedRegions::new(regions(&[0, 10])).unwrap();
        assert_eq!(picker.pick(0.0).name, "Area 0");
        assert_eq!(picker.pick(0.5).name, "Area 1");
    }

    #[test]
    fn test_zero_weight_middle_region_skipped() {
        let picker = WeightedRegions::new(regions(&[10, 0, 10])).unwrap();
        assert_eq!(picker.pick(0.5).name, "Area 0");
        assert_eq!(picker.pick(0.51).name, "Area 2");
    }

    #[test]
    fn test_sample_roughly_follows_weights() {
        let picker = WeightedRegions::new(default_regions()).unwrap();
        assert_eq!(picker.total_weight(), 100);

        let mut rng = StdRng::seed_from_u64(11);
        let draws = 10_000;
        let industrial = (0..draws)
            .filter(|_| picker.sample(&mut rng).name == "Verna Industrial Estate")
            .count();

        let share = industrial as f64 / draws as f64;
        assert!((0.25..0.35).contains(&share), "share was {share}");
    }
}
