use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discovery_context::TenantId;
use super::route::RouteType;

/// Append-only record of one discovery request that produced results.
///
/// Write-only from the core's perspective: the sink never feeds back into
/// ranking, and sink failures are swallowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub tenant_id: TenantId,
    pub user_id: String,
    /// The query exactly as the caller supplied it.
    pub query: String,
    /// Trimmed, lowercased form used for retrieval.
    pub normalized_query: String,
    /// Length of the final (boosted, truncated) result list.
    pub result_count: usize,
    /// Always `"discover"` for this subsystem.
    pub search_type: String,
    /// The route that actually produced the returned results, after fallback.
    pub route_type: RouteType,
    pub timestamp: DateTime<Utc>,
}
