use crate::models::RouteType;

/// Query route classification.
///
/// Treated as an opaque, total decision from an external collaborator:
/// implementations must not fail. The orchestrator may still override the
/// classified route via the capability gate or fallback transitions.
pub trait IRouteClassifier: Send + Sync {
    /// Classify a (trimmed, non-empty) query into a retrieval route.
    fn classify(&self, query: &str) -> RouteType;
}
