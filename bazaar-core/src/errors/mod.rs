mod discovery_error;

pub use discovery_error::DiscoveryError;

/// Umbrella error type for the bazaar ranking core.
///
/// The orchestrator's public surface never returns these — every collaborator
/// failure is absorbed by a fallback transition. They exist for collaborator
/// implementations and for internal bookkeeping of why a fallback fired.
#[derive(Debug, thiserror::Error)]
pub enum BazaarError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type BazaarResult<T> = Result<T, BazaarError>;
