use std::collections::BTreeSet;

use crate::errors::BazaarResult;
use crate::models::TenantId;

/// Per-user personalization data.
pub trait IPreferenceStore: Send + Sync {
    /// Categories the user prefers, scoped to a tenant.
    ///
    /// Callers treat any error as an empty set — a failed lookup must never
    /// abort a discovery request, it only suppresses the boost.
    fn preferred_categories(
        &self,
        user_id: &str,
        tenant: &TenantId,
    ) -> BazaarResult<BTreeSet<String>>;
}
