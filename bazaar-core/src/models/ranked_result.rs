use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend(s) matched a discovery candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Lexical rank only.
    Keyword,
    /// Semantic rank only.
    Semantic,
    /// Both a lexical and a semantic rank.
    Both,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchType::Keyword => "keyword",
            MatchType::Semantic => "semantic",
            MatchType::Both => "both",
        };
        f.write_str(s)
    }
}

/// The orchestrator's output unit: one ranked, explained discovery hit.
///
/// Ephemeral — recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub skill_id: String,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Which backend(s) produced this hit.
    pub match_type: MatchType,
    /// Human-readable, query-interpolated explanation of the match.
    pub match_rationale: String,
    /// Fused relevance score, after any preference boost.
    pub fusion_score: f64,
    /// Whether the preference boost was applied.
    pub boosted: bool,
}
