//! 3-component additive quality formula.
//!
//! ```text
//! score = usageComponent + ratingComponent + metadataComponent
//!   usageComponent    = min(totalUses / saturation, 1) × usageWeight
//!   ratingComponent   = (averageRating / 500) × ratingWeight
//!   metadataComponent = metadataWeight if description and category present
//! ```
//!
//! Skills with fewer than `min_rating_count` ratings get the `-1.0`
//! unranked sentinel instead, regardless of every other field.

use bazaar_core::config::QualityConfig;
use bazaar_core::constants::{MAX_AVERAGE_RATING, UNRANKED_QUALITY_SCORE};
use bazaar_core::models::Skill;

/// Compute the composite quality score.
pub fn compute(skill: &Skill, config: &QualityConfig) -> f64 {
    if skill.stats.rating_count < config.min_rating_count {
        return UNRANKED_QUALITY_SCORE;
    }

    usage_component(skill, config)
        + rating_component(skill, config)
        + metadata_component(skill, config)
}

/// Saturating usage component: linear up to `usage_saturation` uses.
fn usage_component(skill: &Skill, config: &QualityConfig) -> f64 {
    let ratio = skill.stats.total_uses as f64 / config.usage_saturation as f64;
    ratio.min(1.0) * config.usage_weight
}

/// Normalized rating component. An unrated skill contributes 0.
fn rating_component(skill: &Skill, config: &QualityConfig) -> f64 {
    match skill.stats.average_rating {
        Some(rating) => {
            let normalized = f64::from(rating.min(MAX_AVERAGE_RATING)) / f64::from(MAX_AVERAGE_RATING);
            normalized * config.rating_weight
        }
        None => 0.0,
    }
}

/// All-or-nothing metadata completeness component.
fn metadata_component(skill: &Skill, config: &QualityConfig) -> f64 {
    if skill.has_complete_metadata() {
        config.metadata_weight
    } else {
        0.0
    }
}

/// Per-component breakdown for debugging/observability.
#[derive(Debug, Clone)]
pub struct QualityBreakdown {
    pub usage: f64,
    pub rating: f64,
    pub metadata: f64,
    /// Composite score, or the `-1.0` sentinel when gated.
    pub score: f64,
    /// Whether the rating-count gate suppressed the score.
    pub unranked: bool,
}

/// Compute the score with a full breakdown of each component.
pub fn compute_breakdown(skill: &Skill, config: &QualityConfig) -> QualityBreakdown {
    let unranked = skill.stats.rating_count < config.min_rating_count;
    let usage = usage_component(skill, config);
    let rating = rating_component(skill, config);
    let metadata = metadata_component(skill, config);
    let score = if unranked {
        UNRANKED_QUALITY_SCORE
    } else {
        usage + rating + metadata
    };

    QualityBreakdown {
        usage,
        rating,
        metadata,
        score,
        unranked,
    }
}
