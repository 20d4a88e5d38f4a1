use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-skill usage, rating, and age facts.
///
/// Mutated externally by usage/rating events; the ranking core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillStats {
    /// Lifetime usage count.
    pub total_uses: u64,
    /// Average rating in basis points: [0, 500], 500 = five stars.
    /// `None` when the skill has never been rated.
    pub average_rating: Option<u32>,
    /// Number of ratings behind `average_rating`.
    pub rating_count: u64,
    /// Estimated hours saved across all uses.
    pub hours_saved: f64,
    /// When the skill was published to the marketplace.
    pub published_at: DateTime<Utc>,
    /// First recorded usage, if any. Falls back to `published_at` for age math.
    pub first_used_at: Option<DateTime<Utc>>,
}

impl SkillStats {
    /// The instant this skill's age is measured from: first recorded usage,
    /// or publication when no usage exists yet.
    pub fn age_origin(&self) -> DateTime<Utc> {
        self.first_used_at.unwrap_or(self.published_at)
    }
}

/// A published skill: identity, classification, and read-only statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// UUID v4 identifier.
    pub id: String,
    /// URL-safe slug, unique per tenant.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Marketplace category (empty string = uncategorized).
    pub category: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Short description shown on browse cards (empty string = none).
    pub description: String,
    /// Usage/rating/age statistics.
    pub stats: SkillStats,
}

impl Skill {
    /// Whether both description and category are present — the metadata
    /// completeness check used by the quality scorer.
    pub fn has_complete_metadata(&self) -> bool {
        !self.description.trim().is_empty() && !self.category.trim().is_empty()
    }
}
