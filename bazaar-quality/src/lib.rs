//! Composite quality scoring for the browse surface.
//!
//! Pure and deterministic: `SkillStats` in, score/tier out. No I/O.
//! Used both to filter browse results by tier and to drive the
//! "quality" sort mode.

pub mod formula;
pub mod legacy;

use bazaar_core::config::QualityConfig;
use bazaar_core::constants::UNRANKED_QUALITY_SCORE;
use bazaar_core::models::{QualityTier, Skill};

pub use formula::QualityBreakdown;

/// Quality engine: composite weighted score plus tier assignment.
///
/// The composite score gated on `rating_count` is the canonical quality
/// definition for ranking and filtering. The raw-threshold badge formula in
/// [`legacy`] is display-only and deliberately not reconciled with this one.
pub struct QualityEngine {
    config: QualityConfig,
}

impl QualityEngine {
    pub fn new() -> Self {
        Self {
            config: QualityConfig::default(),
        }
    }

    pub fn with_config(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Composite quality score in `[0, 100]`, or `-1.0` for skills with
    /// fewer than `min_rating_count` ratings (unranked sentinel).
    pub fn score(&self, skill: &Skill) -> f64 {
        formula::compute(skill, &self.config)
    }

    /// Tier for a previously computed score. The unranked sentinel and
    /// anything below the bronze threshold map to `None`.
    pub fn tier(&self, score: f64) -> QualityTier {
        if score >= self.config.gold_threshold {
            QualityTier::Gold
        } else if score >= self.config.silver_threshold {
            QualityTier::Silver
        } else if score >= self.config.bronze_threshold {
            QualityTier::Bronze
        } else {
            QualityTier::None
        }
    }

    /// Score and tier in one call.
    pub fn evaluate(&self, skill: &Skill) -> (f64, QualityTier) {
        let score = self.score(skill);
        (score, self.tier(score))
    }

    /// Per-component breakdown for debugging/observability.
    pub fn breakdown(&self, skill: &Skill) -> QualityBreakdown {
        formula::compute_breakdown(skill, &self.config)
    }

    /// Order skills for the browse surface's "quality" sort mode:
    /// score descending, unranked sentinel last, ties broken by id ascending.
    pub fn sort_for_browse(&self, skills: &mut Vec<Skill>) {
        let mut keyed: Vec<(f64, Skill)> = std::mem::take(skills)
            .into_iter()
            .map(|s| (self.score(&s), s))
            .collect();
        keyed.sort_by(|a, b| compare_quality(&(a.0, a.1.id.as_str()), &(b.0, b.1.id.as_str())));
        skills.extend(keyed.into_iter().map(|(_, s)| s));
    }
}

impl Default for QualityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Descending score, sentinel last, id ascending on ties.
fn compare_quality(a: &(f64, &str), b: &(f64, &str)) -> std::cmp::Ordering {
    let a_unranked = a.0 == UNRANKED_QUALITY_SCORE;
    let b_unranked = b.0 == UNRANKED_QUALITY_SCORE;
    match (a_unranked, b_unranked) {
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        _ => b
            .0
            .partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.cmp(b.1)),
    }
}
