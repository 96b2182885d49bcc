//! Resolver query and keyword normalization

use compass_ontology::{EntityType, IntentTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the caller is looking for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Free text typed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Explicit intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentTag>,
    /// Entity types the caller mentioned
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_hints: Vec<EntityType>,
}

impl Query {
    /// Empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query from free text
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().with_text(text)
    }

    /// Query from an explicit intent
    #[must_use]
    pub fn intent(intent: IntentTag) -> Self {
        Self::new().with_intent(intent)
    }

    /// With free text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// With explicit intent
    #[must_use]
    pub fn with_intent(mut self, intent: IntentTag) -> Self {
        self.intent = Some(intent);
        self
    }

    /// With an entity hint
    #[must_use]
    pub fn with_entity(mut self, entity: EntityType) -> Self {
        self.entity_hints.push(entity);
        self
    }

    /// Intents carried by the query, de-duplicated
    #[must_use]
    pub fn intents(&self) -> BTreeSet<IntentTag> {
        self.intent.into_iter().collect()
    }

    /// Entity hints, de-duplicated
    #[must_use]
    pub fn entities(&self) -> BTreeSet<EntityType> {
        self.entity_hints.iter().copied().collect()
    }

    /// Normalized text, empty when absent
    #[must_use]
    pub fn normalized_text(&self) -> String {
        self.text.as_deref().map(normalize).unwrap_or_default()
    }

    /// True if nothing could score
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intent.is_none() && self.entity_hints.is_empty() && self.normalized_text().is_empty()
    }
}

/// Lowercase, split on non-alphanumerics, re-join with single spaces
///
/// `"Open  ISSUES?"` becomes `"open issues"`. Hangul counts as alphanumeric.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct normalized keywords contained in already-normalized `text`
#[must_use]
pub fn matched_keywords(text: &str, keywords: &[String]) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }
    keywords
        .iter()
        .map(String::as_str)
        .map(normalize)
        .filter(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
        .collect()
}
