//! Human-readable match rationale strings.
//!
//! One template per match type, interpolated with the user's query.
//! Shown next to each discovery hit so users can see why it surfaced.

use bazaar_core::models::MatchType;

/// Build the rationale string for a candidate.
pub fn describe(match_type: MatchType, query: &str) -> String {
    match match_type {
        MatchType::Both => format!(
            "Matches \"{query}\" directly and is closely related in meaning"
        ),
        MatchType::Keyword => format!("Contains terms from \"{query}\""),
        MatchType::Semantic => format!("Related in meaning to \"{query}\""),
    }
}
