//! Legacy badge tier on raw rating/usage thresholds.
//!
//! Predates the composite formula and survives only on skill detail pages.
//! The thresholds are NOT derived from the composite score and the two
//! functions disagree for some inputs; that divergence is known and pending
//! product clarification. Ranking and filtering must use
//! [`crate::QualityEngine`] instead.

use bazaar_core::models::{QualityTier, SkillStats};

/// Display-only badge tier from raw `average_rating`/`total_uses` pairs.
pub fn legacy_badge_tier(stats: &SkillStats) -> QualityTier {
    let rating = match stats.average_rating {
        Some(r) => r,
        None => return QualityTier::None,
    };

    match (rating, stats.total_uses) {
        (450..=500, uses) if uses >= 50 => QualityTier::Gold,
        (400..=500, uses) if uses >= 20 => QualityTier::Silver,
        (350..=500, uses) if uses >= 5 => QualityTier::Bronze,
        _ => QualityTier::None,
    }
}
