/// Discovery subsystem errors, raised by retrieval collaborators.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("embedding generation failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("embedding backend returned an empty vector")]
    EmptyEmbedding,

    #[error("{backend} search failed: {reason}")]
    SearchFailed { backend: String, reason: String },

    #[error("preference lookup failed for user {user_id}: {reason}")]
    PreferenceFailed { user_id: String, reason: String },
}
