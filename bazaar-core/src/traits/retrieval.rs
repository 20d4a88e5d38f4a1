use crate::errors::BazaarResult;
use crate::models::{RetrievalCandidate, TenantId};

/// Lexical (full-text) skill retrieval.
pub trait ILexicalSearch: Send + Sync {
    /// Search published skills by text, returning candidates in rank order.
    ///
    /// Candidates carry their `lexical_rank`; `semantic_rank` is `None`.
    fn search(
        &self,
        tenant: &TenantId,
        query: &str,
        limit: usize,
    ) -> BazaarResult<Vec<RetrievalCandidate>>;
}

/// Vector (semantic) skill retrieval.
pub trait IVectorSearch: Send + Sync {
    /// Search published skills by query embedding, in rank order.
    ///
    /// Candidates carry their `semantic_rank`; implementations that also
    /// consult a lexical index may set `lexical_rank` too.
    fn search(
        &self,
        tenant: &TenantId,
        query: &str,
        embedding: &[f32],
        limit: usize,
    ) -> BazaarResult<Vec<RetrievalCandidate>>;
}
