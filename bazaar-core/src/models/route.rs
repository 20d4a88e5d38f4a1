use std::fmt;

use serde::{Deserialize, Serialize};

/// The retrieval strategy used to produce a discovery result.
///
/// A classifier picks an initial route; fallback transitions may relabel it.
/// The route recorded in the search log is always the one that actually
/// produced the returned results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    /// Lexical full-text retrieval only.
    Keyword,
    /// Vector retrieval only.
    Semantic,
    /// Both backends contributed.
    Hybrid,
}

impl RouteType {
    /// Whether this route needs the embedding collaborator at all.
    pub fn requires_embedding(self) -> bool {
        matches!(self, RouteType::Semantic | RouteType::Hybrid)
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RouteType::Keyword => "keyword",
            RouteType::Semantic => "semantic",
            RouteType::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}
