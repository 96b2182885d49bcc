//! Scoring weights

use serde::{Deserialize, Serialize};

/// Multipliers applied to each kind of match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverWeights {
    /// Per shared intent
    pub intent: u32,
    /// Per distinct matched keyword
    pub keyword: u32,
    /// Per shared entity type
    pub entity: u32,
}

impl Default for ResolverWeights {
    fn default() -> Self {
        Self {
            intent: 3,
            keyword: 2,
            entity: 1,
        }
    }
}

impl ResolverWeights {
    /// Weighted sum of hit counts
    #[must_use]
    pub fn score(&self, intent_hits: usize, keyword_hits: usize, entity_hits: usize) -> u32 {
        weighted(self.intent, intent_hits)
            .saturating_add(weighted(self.keyword, keyword_hits))
            .saturating_add(weighted(self.entity, entity_hits))
    }
}

fn weighted(weight: u32, hits: usize) -> u32 {
    weight.saturating_mul(u32::try_from(hits).unwrap_or(u32::MAX))
}
