//! Trending ranking for the "what's hot" surface.
//!
//! Pure given its inputs: per-skill usage counts over the trailing window
//! plus a request timestamp. Skills below the usage gate are excluded from
//! the output entirely.

pub mod formula;

use chrono::{DateTime, Utc};
use tracing::debug;

use bazaar_core::config::TrendingConfig;
use bazaar_core::models::Skill;

/// Input unit: a skill plus its usage count inside the trailing window.
///
/// The window aggregation itself happens upstream (usage event store);
/// this crate only consumes the count.
#[derive(Debug, Clone)]
pub struct TrendingEntry {
    pub skill: Skill,
    /// Usage events within the trailing `window_days` window.
    pub recent_uses: u64,
}

/// One scored, eligible skill on the trending surface.
#[derive(Debug, Clone)]
pub struct TrendingScore {
    pub skill: Skill,
    pub recent_uses: u64,
    /// Hours since the skill's age origin at scoring time.
    pub age_hours: f64,
    pub score: f64,
}

/// Trending engine: eligibility gate + gravity decay + deterministic order.
pub struct TrendingEngine {
    config: TrendingConfig,
}

impl TrendingEngine {
    pub fn new() -> Self {
        Self {
            config: TrendingConfig::default(),
        }
    }

    pub fn with_config(config: TrendingConfig) -> Self {
        Self { config }
    }

    /// Score a single skill, or `None` when it is below the usage gate.
    pub fn score(&self, entry: &TrendingEntry, now: DateTime<Utc>) -> Option<TrendingScore> {
        if !formula::is_eligible(entry.recent_uses, &self.config) {
            return None;
        }

        let age_hours = age_hours(&entry.skill, now);
        let score = formula::compute(entry.recent_uses, age_hours, &self.config);

        Some(TrendingScore {
            skill: entry.skill.clone(),
            recent_uses: entry.recent_uses,
            age_hours,
            score,
        })
    }

    /// Rank entries for the trending surface.
    ///
    /// Ineligible entries are dropped. Ordering is score descending, then
    /// total uses descending, then skill id ascending — the secondary keys
    /// keep equal scores reproducible.
    pub fn rank(&self, entries: &[TrendingEntry], now: DateTime<Utc>) -> Vec<TrendingScore> {
        let mut scored: Vec<TrendingScore> = entries
            .iter()
            .filter_map(|entry| self.score(entry, now))
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.skill.stats.total_uses.cmp(&a.skill.stats.total_uses))
                .then_with(|| a.skill.id.cmp(&b.skill.id))
        });

        debug!(
            eligible = scored.len(),
            total = entries.len(),
            "trending rank computed"
        );

        scored
    }
}

impl Default for TrendingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Hours between the skill's age origin and `now`, clamped at zero.
fn age_hours(skill: &Skill, now: DateTime<Utc>) -> f64 {
    let seconds = (now - skill.stats.age_origin()).num_seconds().max(0);
    seconds as f64 / 3600.0
}
