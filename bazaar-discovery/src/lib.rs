//! Discovery orchestrator for the skill marketplace.
//!
//! Routes a free-text query to lexical and/or vector retrieval, fuses the
//! results, applies personalization boosting, and always returns a ranked
//! list — an embedding backend outage degrades the route, it never surfaces
//! as an error. `discover` has no failure path by contract.

pub mod boost;
pub mod engine;
pub mod fusion;
pub mod logger;
pub mod rationale;
pub mod route;

pub use engine::DiscoveryEngine;
pub use logger::BackgroundLogWorker;
