//! DiscoveryEngine: orchestrates the full discovery pipeline.
//!
//! classify → capability-gate → retrieve (with fallback) → fuse →
//! rationale → preference-boost → log → truncate.
//!
//! The outward contract is "always returns a list, never fails": input
//! problems yield an empty list, collaborator failures degrade through the
//! route machine, and side-effect failures are swallowed.

use chrono::Utc;
use tracing::{debug, info, warn};

use bazaar_core::config::DiscoveryConfig;
use bazaar_core::constants::SEARCH_TYPE_DISCOVER;
use bazaar_core::models::{
    RankedResult, RouteType, SearchLogEntry, TenantId, UserDiscoveryContext,
};
use bazaar_core::traits::{
    IEmbeddingProvider, ILexicalSearch, IPreferenceStore, IRouteClassifier, ISearchLogger,
    ISiteCapabilities, IVectorSearch,
};

use crate::boost;
use crate::fusion;
use crate::rationale;
use crate::route::{self, RetrievalOutcome, RouteMachine};

/// The discovery orchestrator. Stateless per request; collaborators are
/// read-only services shared across concurrent requests.
pub struct DiscoveryEngine<'a> {
    classifier: &'a dyn IRouteClassifier,
    capabilities: &'a dyn ISiteCapabilities,
    embedder: &'a dyn IEmbeddingProvider,
    lexical: &'a dyn ILexicalSearch,
    vector: &'a dyn IVectorSearch,
    preferences: &'a dyn IPreferenceStore,
    /// Should be a non-blocking sink (see [`crate::BackgroundLogWorker`]);
    /// the engine calls it exactly once per result-producing request.
    logger: &'a dyn ISearchLogger,
    config: DiscoveryConfig,
}

impl<'a> DiscoveryEngine<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: &'a dyn IRouteClassifier,
        capabilities: &'a dyn ISiteCapabilities,
        embedder: &'a dyn IEmbeddingProvider,
        lexical: &'a dyn ILexicalSearch,
        vector: &'a dyn IVectorSearch,
        preferences: &'a dyn IPreferenceStore,
        logger: &'a dyn ISearchLogger,
        config: DiscoveryConfig,
    ) -> Self {
        Self {
            classifier,
            capabilities,
            embedder,
            lexical,
            vector,
            preferences,
            logger,
            config,
        }
    }

    /// Discover skills for a query with the configured default limit.
    pub fn discover_default(
        &self,
        raw_query: &str,
        actor: Option<&UserDiscoveryContext>,
    ) -> Vec<RankedResult> {
        self.discover(raw_query, actor, self.config.limit)
    }

    /// Discover skills for a free-text query.
    ///
    /// Returns `[]` for an empty query, a missing actor/tenant, or zero
    /// retrievable candidates. No log entry is written in any of those
    /// paths — the log sink only ever sees requests that produced results.
    pub fn discover(
        &self,
        raw_query: &str,
        actor: Option<&UserDiscoveryContext>,
        limit: usize,
    ) -> Vec<RankedResult> {
        // 1. Normalize & guard.
        let normalized = raw_query.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }
        let Some(actor) = actor else {
            return Vec::new();
        };
        let Some(tenant) = actor.tenant_id.as_ref() else {
            debug!(user = %actor.user_id, "discovery without tenant context, returning empty");
            return Vec::new();
        };

        // 2–3. Classify, then gate on tenant capability before any embed call.
        let classified = self.classifier.classify(&normalized);
        let semantic_enabled = self.capabilities.semantic_enabled(tenant);
        let gated = route::gate(classified, semantic_enabled);
        debug!(%classified, %gated, semantic_enabled, query = %normalized, "route planned");

        // 4–5. Retrieve through the fallback state machine.
        let machine = RouteMachine::new(self.embedder, self.lexical, self.vector);
        let fetch = limit + self.config.overfetch;
        let outcome = machine.run(tenant, &normalized, gated, semantic_enabled, fetch);

        // 6. Empty check: no rationale, no boost, no log.
        let (candidates, actual_route) = match outcome {
            RetrievalOutcome::Fused { candidates, route } => (candidates, route),
            RetrievalOutcome::Empty => {
                debug!(query = %normalized, "no retrievable candidates");
                return Vec::new();
            }
        };

        // 7. Fuse and attach rationale.
        let fused = fusion::fuse(candidates, self.config.rrf_k);
        let mut results: Vec<RankedResult> = fused
            .into_iter()
            .map(|c| RankedResult {
                skill_id: c.skill.id,
                slug: c.skill.slug,
                name: c.skill.name,
                category: c.skill.category,
                description: c.skill.description,
                match_type: c.match_type,
                match_rationale: rationale::describe(c.match_type, &normalized),
                fusion_score: c.fusion_score,
                boosted: false,
            })
            .collect();

        // 8. Preference boost; a failed lookup only suppresses the boost.
        let preferred = match self
            .preferences
            .preferred_categories(&actor.user_id, tenant)
        {
            Ok(set) => set,
            Err(e) => {
                warn!(user = %actor.user_id, error = %e, "preference lookup failed, skipping boost");
                Default::default()
            }
        };
        boost::apply(&mut results, &preferred, self.config.preference_boost);

        // 10. Truncate, then record the final shape of the response.
        results.truncate(limit);

        // 9. Fire-and-forget log of what was actually returned.
        self.log_request(actor, tenant, raw_query, &normalized, results.len(), actual_route);

        info!(
            query = %normalized,
            route = %actual_route,
            results = results.len(),
            "discovery complete"
        );

        results
    }

    fn log_request(
        &self,
        actor: &UserDiscoveryContext,
        tenant: &TenantId,
        raw_query: &str,
        normalized: &str,
        result_count: usize,
        route: RouteType,
    ) {
        self.logger.log(SearchLogEntry {
            tenant_id: tenant.clone(),
            user_id: actor.user_id.clone(),
            query: raw_query.to_string(),
            normalized_query: normalized.to_string(),
            result_count,
            search_type: SEARCH_TYPE_DISCOVER.to_string(),
            route_type: route,
            timestamp: Utc::now(),
        });
    }
}
