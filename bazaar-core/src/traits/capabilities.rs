use crate::models::TenantId;

/// Tenant-level feature availability.
pub trait ISiteCapabilities: Send + Sync {
    /// Whether vector/semantic retrieval is enabled for the tenant.
    ///
    /// Implementations must map "capability store unavailable" to `false`
    /// rather than failing; a stale flag only affects routing choice.
    fn semantic_enabled(&self, tenant: &TenantId) -> bool;
}
