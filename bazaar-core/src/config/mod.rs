pub mod defaults;

mod discovery_config;
mod quality_config;
mod trending_config;

pub use discovery_config::DiscoveryConfig;
pub use quality_config::QualityConfig;
pub use trending_config::TrendingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{BazaarError, BazaarResult};

/// Top-level configuration for the ranking core.
///
/// All fields default; deployments override selectively via TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BazaarConfig {
    pub discovery: DiscoveryConfig,
    pub quality: QualityConfig,
    pub trending: TrendingConfig,
}

impl BazaarConfig {
    /// Parse a TOML override file. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> BazaarResult<Self> {
        toml::from_str(content).map_err(|e| BazaarError::Config(e.to_string()))
    }
}
