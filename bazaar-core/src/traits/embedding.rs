use crate::errors::BazaarResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    ///
    /// A null/empty vector from the backend is surfaced as an error so that
    /// every failure mode triggers the same lexical fallback.
    fn embed(&self, text: &str) -> BazaarResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
