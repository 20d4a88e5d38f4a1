//! Preference boosting: promote skills in the actor's preferred categories.
//!
//! Applies a fixed multiplier and then fully re-sorts — a boosted
//! low-ranked result may leapfrog an unboosted higher one. That reorder is
//! deliberate, not an artifact.

use std::collections::BTreeSet;

use bazaar_core::models::RankedResult;

/// Multiply the fusion score of preferred-category results by `factor`,
/// mark them boosted, and re-sort the whole list descending.
///
/// Ties after boosting break by skill id ascending.
pub fn apply(results: &mut [RankedResult], preferred: &BTreeSet<String>, factor: f64) {
    if !preferred.is_empty() {
        for result in results.iter_mut() {
            if preferred.contains(&result.category) {
                result.fusion_score *= factor;
                result.boosted = true;
            }
        }
    }

    results.sort_by(|a, b| {
        b.fusion_score
            .partial_cmp(&a.fusion_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.skill_id.cmp(&b.skill_id))
    });
}
