//! # bazaar-core
//!
//! Foundation crate for the bazaar skill marketplace ranking core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BazaarConfig;
pub use errors::{BazaarError, BazaarResult};
pub use models::{
    MatchType, QualityTier, RankedResult, RetrievalCandidate, RouteType, SearchLogEntry, Skill,
    SkillStats, TenantId, UserDiscoveryContext,
};
