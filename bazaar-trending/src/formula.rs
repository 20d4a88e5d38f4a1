//! Gravity-decay trending formula.
//!
//! ```text
//! score = (recentUses - 1) / (ageHours + ageOffset) ^ gravity
//! ```
//!
//! Hacker-News-style: recent usage discounted by age. The gravity exponent
//! controls how fast novelty decays; the age offset keeps the denominator
//! away from zero for brand-new skills.

use bazaar_core::config::TrendingConfig;

/// Compute the raw trending score for an eligible skill.
///
/// `age_hours` is elapsed time since the skill's age origin (first use,
/// or publication when never used). Negative ages (clock skew) clamp to 0.
pub fn compute(recent_uses: u64, age_hours: f64, config: &TrendingConfig) -> f64 {
    let numerator = recent_uses.saturating_sub(1) as f64;
    let denominator = (age_hours.max(0.0) + config.age_offset_hours).powf(config.gravity);
    numerator / denominator
}

/// Whether a skill participates in the trending surface at all.
///
/// Below the gate a skill is excluded entirely, not scored as zero.
pub fn is_eligible(recent_uses: u64, config: &TrendingConfig) -> bool {
    recent_uses >= config.min_recent_uses
}
