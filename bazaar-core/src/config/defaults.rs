//! Default values shared by the config structs.

/// Default number of results returned by `discover`.
pub const DEFAULT_DISCOVERY_LIMIT: usize = 3;

/// Extra candidates fetched beyond `limit` to give fusion/boost headroom.
pub const DEFAULT_OVERFETCH: usize = 5;

/// RRF smoothing constant. Higher k reduces the influence of top ranks
/// from any single backend.
pub const DEFAULT_RRF_K: u32 = 60;

/// Multiplier applied to the fusion score of preferred-category candidates.
pub const DEFAULT_PREFERENCE_BOOST: f64 = 1.3;

/// Queue depth of the fire-and-forget search log worker.
pub const DEFAULT_LOG_QUEUE_DEPTH: usize = 256;

/// Weight of the usage component in the composite quality score.
pub const DEFAULT_QUALITY_USAGE_WEIGHT: f64 = 50.0;

/// Weight of the rating component in the composite quality score.
pub const DEFAULT_QUALITY_RATING_WEIGHT: f64 = 35.0;

/// Weight of the metadata-completeness component.
pub const DEFAULT_QUALITY_METADATA_WEIGHT: f64 = 15.0;

/// Uses at which the usage component saturates.
pub const DEFAULT_QUALITY_USAGE_SATURATION: u64 = 100;

/// Composite-score tier thresholds.
pub const DEFAULT_GOLD_THRESHOLD: f64 = 75.0;
pub const DEFAULT_SILVER_THRESHOLD: f64 = 50.0;
pub const DEFAULT_BRONZE_THRESHOLD: f64 = 25.0;

/// Gravity exponent controlling how fast trending novelty decays.
pub const DEFAULT_TRENDING_GRAVITY: f64 = 1.8;

/// Hours added to age before applying gravity, so brand-new skills
/// don't divide by ~zero.
pub const DEFAULT_TRENDING_AGE_OFFSET_HOURS: f64 = 2.0;
