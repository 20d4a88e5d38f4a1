use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Organizational scope gating feature availability and personalization data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only per-request actor context for discovery.
///
/// A missing tenant short-circuits discovery to an empty result;
/// it is never treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDiscoveryContext {
    pub user_id: String,
    pub tenant_id: Option<TenantId>,
    /// Categories the user has opted into; drives the preference boost.
    /// BTreeSet for deterministic iteration in logs and tests.
    #[serde(default)]
    pub preferred_categories: BTreeSet<String>,
}

impl UserDiscoveryContext {
    pub fn new(user_id: impl Into<String>, tenant_id: Option<TenantId>) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id,
            preferred_categories: BTreeSet::new(),
        }
    }
}
