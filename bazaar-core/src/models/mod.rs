pub mod candidate;
pub mod discovery_context;
pub mod quality_tier;
pub mod ranked_result;
pub mod route;
pub mod search_log;
pub mod skill;

pub use candidate::RetrievalCandidate;
pub use discovery_context::{TenantId, UserDiscoveryContext};
pub use quality_tier::QualityTier;
pub use ranked_result::{MatchType, RankedResult};
pub use route::RouteType;
pub use search_log::SearchLogEntry;
pub use skill::{Skill, SkillStats};
