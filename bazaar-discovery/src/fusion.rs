//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines lexical and semantic rank positions into one fused score
//! without normalizing backend-specific relevance values. A candidate seen
//! by both backends accumulates both contributions.

use std::collections::HashMap;

use bazaar_core::models::{MatchType, RetrievalCandidate, Skill};

/// A candidate after rank fusion, before rationale/boost.
#[derive(Debug, Clone)]
pub struct FusedCandidate {
    pub skill: Skill,
    pub match_type: MatchType,
    /// Fused score (higher = more relevant).
    pub fusion_score: f64,
}

/// Fuse retrieval candidates into a single descending ranking.
///
/// `k` is the RRF smoothing constant (default 60). Higher k reduces the
/// influence of top ranks from any single backend. Duplicate skills are
/// merged, keeping the best rank per backend. Ties break by skill id
/// ascending for reproducible output.
pub fn fuse(candidates: Vec<RetrievalCandidate>, k: u32) -> Vec<FusedCandidate> {
    let mut merged: HashMap<String, RetrievalCandidate> = HashMap::new();

    for candidate in candidates {
        merged
            .entry(candidate.skill.id.clone())
            .and_modify(|existing| {
                existing.lexical_rank = best_rank(existing.lexical_rank, candidate.lexical_rank);
                existing.semantic_rank = best_rank(existing.semantic_rank, candidate.semantic_rank);
            })
            .or_insert(candidate);
    }

    let mut fused: Vec<FusedCandidate> = merged
        .into_values()
        .map(|c| {
            let fusion_score = rrf_contribution(c.lexical_rank, k)
                + rrf_contribution(c.semantic_rank, k);
            FusedCandidate {
                match_type: match_type_of(&c),
                skill: c.skill,
                fusion_score,
            }
        })
        .collect();

    fused.sort_by(|a, b| {
        b.fusion_score
            .partial_cmp(&a.fusion_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.skill.id.cmp(&b.skill.id))
    });

    fused
}

fn best_rank(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (r, None) | (None, r) => r,
    }
}

fn rrf_contribution(rank: Option<usize>, k: u32) -> f64 {
    match rank {
        Some(rank) => 1.0 / (k as f64 + rank as f64),
        None => 0.0,
    }
}

fn match_type_of(candidate: &RetrievalCandidate) -> MatchType {
    match (candidate.lexical_rank, candidate.semantic_rank) {
        (Some(_), Some(_)) => MatchType::Both,
        (Some(_), None) => MatchType::Keyword,
        _ => MatchType::Semantic,
    }
}
