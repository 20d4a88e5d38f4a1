use serde::{Deserialize, Serialize};

use super::skill::Skill;

/// A raw candidate emitted by a retrieval collaborator, before fusion.
///
/// Carries zero-based ranks from whichever backends returned it.
/// Ephemeral: consumed by the fusion step, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalCandidate {
    pub skill: Skill,
    /// Zero-based rank in the lexical result list, if lexical matched.
    pub lexical_rank: Option<usize>,
    /// Zero-based rank in the vector result list, if semantic matched.
    pub semantic_rank: Option<usize>,
}

impl RetrievalCandidate {
    /// Candidate seen only by the lexical backend.
    pub fn lexical(skill: Skill, rank: usize) -> Self {
        Self {
            skill,
            lexical_rank: Some(rank),
            semantic_rank: None,
        }
    }

    /// Candidate seen only by the vector backend.
    pub fn semantic(skill: Skill, rank: usize) -> Self {
        Self {
            skill,
            lexical_rank: None,
            semantic_rank: Some(rank),
        }
    }
}
