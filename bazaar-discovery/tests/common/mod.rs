//! Shared mock collaborators for discovery tests.
//!
//! Every mock counts its invocations so tests can assert on call-count
//! preconditions (e.g. the capability gate must keep the embedder idle).
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bazaar_core::errors::{BazaarResult, DiscoveryError};
use bazaar_core::models::{
    RetrievalCandidate, RouteType, SearchLogEntry, Skill, SkillStats, TenantId,
};
use bazaar_core::traits::{
    IEmbeddingProvider, ILexicalSearch, IPreferenceStore, IRouteClassifier, ISearchLogger,
    ISiteCapabilities, IVectorSearch,
};
use chrono::Utc;

/// Install a fmt subscriber once so `RUST_LOG=debug cargo test` shows the
/// orchestrator's fallback decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn make_skill(id: &str, category: &str) -> Skill {
    let now = Utc::now();
    Skill {
        id: id.to_string(),
        slug: id.to_string(),
        name: format!("Skill {id}"),
        category: category.to_string(),
        tags: vec![],
        description: "A test skill".to_string(),
        stats: SkillStats {
            total_uses: 10,
            average_rating: Some(400),
            rating_count: 5,
            hours_saved: 1.0,
            published_at: now,
            first_used_at: None,
        },
    }
}

pub fn tenant() -> TenantId {
    TenantId::new("acme")
}

pub struct MockClassifier(pub RouteType);

impl IRouteClassifier for MockClassifier {
    fn classify(&self, _query: &str) -> RouteType {
        self.0
    }
}

pub struct MockCapabilities(pub bool);

impl ISiteCapabilities for MockCapabilities {
    fn semantic_enabled(&self, _tenant: &TenantId) -> bool {
        self.0
    }
}

pub enum EmbedBehavior {
    Succeed,
    Fail,
    ReturnEmpty,
}

pub struct MockEmbedder {
    pub behavior: EmbedBehavior,
    pub calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(behavior: EmbedBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for MockEmbedder {
    fn embed(&self, _text: &str) -> BazaarResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            EmbedBehavior::Succeed => Ok(vec![0.1, 0.2, 0.3]),
            EmbedBehavior::Fail => Err(DiscoveryError::EmbeddingFailed {
                reason: "backend down".to_string(),
            }
            .into()),
            EmbedBehavior::ReturnEmpty => Ok(vec![]),
        }
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "mock-embedder"
    }
}

pub struct MockLexical {
    pub results: Vec<RetrievalCandidate>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockLexical {
    pub fn returning(results: Vec<RetrievalCandidate>) -> Self {
        Self {
            results,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::returning(vec![])
    }

    pub fn failing() -> Self {
        Self {
            results: vec![],
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ILexicalSearch for MockLexical {
    fn search(
        &self,
        _tenant: &TenantId,
        _query: &str,
        _limit: usize,
    ) -> BazaarResult<Vec<RetrievalCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DiscoveryError::SearchFailed {
                backend: "lexical".to_string(),
                reason: "index offline".to_string(),
            }
            .into());
        }
        Ok(self.results.clone())
    }
}

pub struct MockVector {
    pub results: Vec<RetrievalCandidate>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockVector {
    pub fn returning(results: Vec<RetrievalCandidate>) -> Self {
        Self {
            results,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::returning(vec![])
    }

    pub fn failing() -> Self {
        Self {
            results: vec![],
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IVectorSearch for MockVector {
    fn search(
        &self,
        _tenant: &TenantId,
        _query: &str,
        _embedding: &[f32],
        _limit: usize,
    ) -> BazaarResult<Vec<RetrievalCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DiscoveryError::SearchFailed {
                backend: "vector".to_string(),
                reason: "index offline".to_string(),
            }
            .into());
        }
        Ok(self.results.clone())
    }
}

pub struct MockPreferences {
    pub categories: BTreeSet<String>,
    pub fail: bool,
}

impl MockPreferences {
    pub fn preferring(categories: &[&str]) -> Self {
        Self {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::preferring(&[])
    }

    pub fn failing() -> Self {
        Self {
            categories: BTreeSet::new(),
            fail: true,
        }
    }
}

impl IPreferenceStore for MockPreferences {
    fn preferred_categories(
        &self,
        user_id: &str,
        _tenant: &TenantId,
    ) -> BazaarResult<BTreeSet<String>> {
        if self.fail {
            return Err(DiscoveryError::PreferenceFailed {
                user_id: user_id.to_string(),
                reason: "store offline".to_string(),
            }
            .into());
        }
        Ok(self.categories.clone())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    pub entries: Mutex<Vec<SearchLogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<SearchLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ISearchLogger for RecordingLogger {
    fn log(&self, entry: SearchLogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
