pub mod capabilities;
pub mod classifier;
pub mod embedding;
pub mod logger;
pub mod preferences;
pub mod retrieval;

pub use capabilities::ISiteCapabilities;
pub use classifier::IRouteClassifier;
pub use embedding::IEmbeddingProvider;
pub use logger::ISearchLogger;
pub use preferences::IPreferenceStore;
pub use retrieval::{ILexicalSearch, IVectorSearch};
