/// Bazaar ranking core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of ratings before a skill participates in quality ranking.
pub const MIN_RATING_COUNT_FOR_QUALITY: u64 = 3;

/// Sentinel quality score for skills below the rating-count gate.
pub const UNRANKED_QUALITY_SCORE: f64 = -1.0;

/// Upper bound of `average_rating` (basis points: 500 = five stars).
pub const MAX_AVERAGE_RATING: u32 = 500;

/// Minimum uses inside the trailing window before a skill can trend.
pub const MIN_RECENT_USES_FOR_TRENDING: u64 = 3;

/// Length of the trending usage window, in days.
pub const TRENDING_WINDOW_DAYS: u64 = 7;

/// `search_type` recorded for every discovery log entry.
pub const SEARCH_TYPE_DISCOVER: &str = "discover";
