use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MIN_RATING_COUNT_FOR_QUALITY;

/// Quality scorer configuration.
///
/// Component weights sum to 100 so the composite score reads as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Ratings required before a skill is quality-ranked at all.
    pub min_rating_count: u64,
    /// Weight of the saturating usage component.
    pub usage_weight: f64,
    /// Total uses at which the usage component saturates.
    pub usage_saturation: u64,
    /// Weight of the normalized average-rating component.
    pub rating_weight: f64,
    /// Weight of the metadata completeness component.
    pub metadata_weight: f64,
    /// Minimum composite score for each tier.
    pub gold_threshold: f64,
    pub silver_threshold: f64,
    pub bronze_threshold: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_rating_count: MIN_RATING_COUNT_FOR_QUALITY,
            usage_weight: defaults::DEFAULT_QUALITY_USAGE_WEIGHT,
            usage_saturation: defaults::DEFAULT_QUALITY_USAGE_SATURATION,
            rating_weight: defaults::DEFAULT_QUALITY_RATING_WEIGHT,
            metadata_weight: defaults::DEFAULT_QUALITY_METADATA_WEIGHT,
            gold_threshold: defaults::DEFAULT_GOLD_THRESHOLD,
            silver_threshold: defaults::DEFAULT_SILVER_THRESHOLD,
            bronze_threshold: defaults::DEFAULT_BRONZE_THRESHOLD,
        }
    }
}
