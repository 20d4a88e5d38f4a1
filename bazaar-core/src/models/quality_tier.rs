use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse quality badge derived from a skill's composite quality score.
///
/// `Ord` follows badge value: `None < Bronze < Silver < Gold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl QualityTier {
    /// Whether the skill earned a visible badge.
    pub fn is_badged(self) -> bool {
        self != QualityTier::None
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityTier::None => "none",
            QualityTier::Bronze => "bronze",
            QualityTier::Silver => "silver",
            QualityTier::Gold => "gold",
        };
        f.write_str(s)
    }
}
