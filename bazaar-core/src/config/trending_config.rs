use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MIN_RECENT_USES_FOR_TRENDING, TRENDING_WINDOW_DAYS};

/// Trending scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingConfig {
    /// Uses inside the window required before a skill can trend.
    pub min_recent_uses: u64,
    /// Trailing usage window, in days.
    pub window_days: u64,
    /// Gravity exponent: higher = novelty decays faster.
    pub gravity: f64,
    /// Hours added to age before applying gravity.
    pub age_offset_hours: f64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            min_recent_uses: MIN_RECENT_USES_FOR_TRENDING,
            window_days: TRENDING_WINDOW_DAYS,
            gravity: defaults::DEFAULT_TRENDING_GRAVITY,
            age_offset_hours: defaults::DEFAULT_TRENDING_AGE_OFFSET_HOURS,
        }
    }
}
