use serde::{Deserialize, Serialize};

use super::defaults;

/// Discovery orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Default result count when the caller passes no limit.
    pub limit: usize,
    /// Extra candidates fetched beyond the limit for reranking headroom.
    pub overfetch: usize,
    /// RRF smoothing constant for rank fusion.
    pub rrf_k: u32,
    /// Fusion-score multiplier for preferred-category candidates.
    pub preference_boost: f64,
    /// Bounded queue depth for the async search log worker.
    pub log_queue_depth: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_DISCOVERY_LIMIT,
            overfetch: defaults::DEFAULT_OVERFETCH,
            rrf_k: defaults::DEFAULT_RRF_K,
            preference_boost: defaults::DEFAULT_PREFERENCE_BOOST,
            log_queue_depth: defaults::DEFAULT_LOG_QUEUE_DEPTH,
        }
    }
}
