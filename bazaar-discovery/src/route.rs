//! Routing and fallback state machine.
//!
//! A request passes through named states, each at most once — the fallback
//! graph has no loops. Every collaborator failure is absorbed into a
//! transition; nothing here returns an error.
//!
//! ```text
//! TryKeyword ──hits──────────────▶ Fused(keyword)
//!     │ empty + semantic enabled
//!     ▼
//!   embed ──ok──▶ vector ──hits──▶ Fused(hybrid)
//!     │ fail            │ empty
//!     ▼                 ▼
//!   Empty             Empty
//!
//! TryEmbedThenVector ──ok──▶ vector ──hits──▶ Fused(hybrid)
//!     │ embed fail               │ empty
//!     ▼                          ▼
//! TryLexicalFallback ──hits──▶ Fused(keyword)
//!     │ empty
//!     ▼
//!   Empty
//! ```

use tracing::{debug, warn};

use bazaar_core::models::{RetrievalCandidate, RouteType, TenantId};
use bazaar_core::traits::{IEmbeddingProvider, ILexicalSearch, IVectorSearch};

/// Capability gate: downgrade semantic/hybrid routes to keyword when the
/// tenant has no vector backend.
///
/// Applied before any embedding call — the embedding collaborator must not
/// be invoked for a tenant without semantic search.
pub fn gate(classified: RouteType, semantic_enabled: bool) -> RouteType {
    if !semantic_enabled && classified.requires_embedding() {
        debug!(%classified, "semantic disabled for tenant, downgrading route to keyword");
        RouteType::Keyword
    } else {
        classified
    }
}

/// Terminal outcome of the retrieval state machine.
#[derive(Debug)]
pub enum RetrievalOutcome {
    /// Candidates retrieved; `route` is the strategy that actually produced
    /// them, after any fallback relabeling.
    Fused {
        candidates: Vec<RetrievalCandidate>,
        route: RouteType,
    },
    /// Nothing retrievable after all applicable fallbacks.
    Empty,
}

/// Drives the retrieval collaborators through the fallback graph.
pub struct RouteMachine<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    lexical: &'a dyn ILexicalSearch,
    vector: &'a dyn IVectorSearch,
}

impl<'a> RouteMachine<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        lexical: &'a dyn ILexicalSearch,
        vector: &'a dyn IVectorSearch,
    ) -> Self {
        Self {
            embedder,
            lexical,
            vector,
        }
    }

    /// Run retrieval for a gated route. `fetch` is the over-fetched limit
    /// (caller's limit plus reranking headroom).
    pub fn run(
        &self,
        tenant: &TenantId,
        query: &str,
        gated_route: RouteType,
        semantic_enabled: bool,
        fetch: usize,
    ) -> RetrievalOutcome {
        match gated_route {
            RouteType::Keyword => self.try_keyword(tenant, query, semantic_enabled, fetch),
            RouteType::Semantic | RouteType::Hybrid => {
                self.try_embed_then_vector(tenant, query, fetch)
            }
        }
    }

    /// Keyword branch: lexical first; on an empty result, one embed→vector
    /// fallback when the tenant allows it. No further attempts after that.
    fn try_keyword(
        &self,
        tenant: &TenantId,
        query: &str,
        semantic_enabled: bool,
        fetch: usize,
    ) -> RetrievalOutcome {
        match self.lexical_search(tenant, query, fetch) {
            candidates if !candidates.is_empty() => RetrievalOutcome::Fused {
                candidates,
                route: RouteType::Keyword,
            },
            _ if semantic_enabled => {
                debug!("lexical returned nothing, falling back to vector retrieval");
                match self.embed(query) {
                    Some(embedding) => {
                        let candidates = self.vector_search(tenant, query, &embedding, fetch);
                        if candidates.is_empty() {
                            RetrievalOutcome::Empty
                        } else {
                            RetrievalOutcome::Fused {
                                candidates,
                                route: RouteType::Hybrid,
                            }
                        }
                    }
                    None => RetrievalOutcome::Empty,
                }
            }
            _ => RetrievalOutcome::Empty,
        }
    }

    /// Semantic/hybrid branch: embed, then always run vector retrieval —
    /// hybrid coverage is preferred for discovery even when the classifier
    /// said semantic alone. Any failure degrades to a lexical fallback.
    fn try_embed_then_vector(
        &self,
        tenant: &TenantId,
        query: &str,
        fetch: usize,
    ) -> RetrievalOutcome {
        match self.embed(query) {
            Some(embedding) => {
                let candidates = self.vector_search(tenant, query, &embedding, fetch);
                if candidates.is_empty() {
                    debug!("vector retrieval empty, falling back to lexical");
                    self.try_lexical_fallback(tenant, query, fetch)
                } else {
                    RetrievalOutcome::Fused {
                        candidates,
                        route: RouteType::Hybrid,
                    }
                }
            }
            None => {
                debug!("embedding unavailable, falling back to lexical");
                self.try_lexical_fallback(tenant, query, fetch)
            }
        }
    }

    /// Terminal lexical fallback for the semantic branch.
    fn try_lexical_fallback(
        &self,
        tenant: &TenantId,
        query: &str,
        fetch: usize,
    ) -> RetrievalOutcome {
        let candidates = self.lexical_search(tenant, query, fetch);
        if candidates.is_empty() {
            RetrievalOutcome::Empty
        } else {
            RetrievalOutcome::Fused {
                candidates,
                route: RouteType::Keyword,
            }
        }
    }

    /// Single embed attempt. An empty vector counts as a failure so every
    /// failure mode takes the same fallback edge.
    fn embed(&self, query: &str) -> Option<Vec<f32>> {
        match self.embedder.embed(query) {
            Ok(v) if !v.is_empty() => Some(v),
            Ok(_) => {
                warn!(provider = self.embedder.name(), "embedder returned empty vector");
                None
            }
            Err(e) => {
                warn!(provider = self.embedder.name(), error = %e, "embedding failed");
                None
            }
        }
    }

    /// Lexical search with failure absorbed as an empty result.
    fn lexical_search(&self, tenant: &TenantId, query: &str, fetch: usize) -> Vec<RetrievalCandidate> {
        match self.lexical.search(tenant, query, fetch) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "lexical search failed");
                Vec::new()
            }
        }
    }

    /// Vector search with failure absorbed as an empty result.
    fn vector_search(
        &self,
        tenant: &TenantId,
        query: &str,
        embedding: &[f32],
        fetch: usize,
    ) -> Vec<RetrievalCandidate> {
        match self.vector.search(tenant, query, embedding, fetch) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "vector search failed");
                Vec::new()
            }
        }
    }
}
