//! Filter state bound to a schema

use crate::error::FilterError;
use crate::query;
use crate::schema::{FilterSchema, VisibleSchema};
use crate::store::{FilterValue, FilterValueStore};
use compass_ontology::{Preset, SeedValue};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Filter values of one screen together with their schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    schema: FilterSchema,
    values: FilterValueStore,
}

impl FilterState {
    /// Empty state over `schema`
    #[must_use]
    pub fn new(schema: FilterSchema) -> Self {
        Self {
            schema,
            values: FilterValueStore::new(),
        }
    }

    /// Restore state from a URL query string
    #[must_use]
    pub fn from_query(schema: FilterSchema, query: &str) -> Self {
        let values = query::deserialize(query, schema.keys());
        Self { schema, values }
    }

    /// Apply preset default filters when nothing is set yet
    ///
    /// Only declared keys are seeded. Returns `true` if any value was applied.
    pub fn seed_defaults(&mut self, defaults: &IndexMap<String, SeedValue>) -> bool {
        if self.values.active_count() > 0 {
            return false;
        }

        let mut seeded = false;
        for (key, seed) in defaults {
            if !self.schema.contains(key) {
                debug!(key = %key, "skipping default filter for undeclared key");
                continue;
            }
            self.values = self.values.set_value(key, Some(FilterValue::from(seed)));
            seeded = true;
        }
        seeded
    }

    /// Set or remove one value
    ///
    /// # Errors
    /// Returns `FilterError::UnknownKey` if the schema does not declare `key`
    pub fn set(&mut self, key: &str, value: Option<FilterValue>) -> Result<(), FilterError> {
        if !self.schema.contains(key) {
            return Err(FilterError::UnknownKey(key.to_string()));
        }
        self.values = self.values.set_value(key, value);
        Ok(())
    }

    /// Clear every value except a non-empty search term
    pub fn clear_all(&mut self) {
        let search_key = self.schema.search_key().map(|def| def.key.as_str());
        self.values = self.values.clear_all(search_key);
    }

    /// Query string for the current values
    #[must_use]
    pub fn to_query(&self) -> String {
        query::serialize(&self.values, self.schema.keys())
    }

    /// Keys to render under `preset`
    #[must_use]
    pub fn visible(&self, preset: Preset) -> VisibleSchema<'_> {
        self.schema.visible(preset)
    }

    /// Current values
    #[inline]
    #[must_use]
    pub fn values(&self) -> &FilterValueStore {
        &self.values
    }

    /// Schema
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// Number of active filters
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.values.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FilterKeyDefinition;
    use pretty_assertions::assert_eq;

    fn schema() -> FilterSchema {
        FilterSchema::new(vec![
            FilterKeyDefinition::search("q", "Search"),
            FilterKeyDefinition::choice(
                "status",
                "Status",
                &[("OPEN", "Open"), ("CLOSED", "Closed")],
            ),
            FilterKeyDefinition::boolean("mine", "Mine"),
        ])
        .unwrap()
    }

    #[test]
    fn seeds_only_when_empty() {
        let mut defaults = IndexMap::new();
        defaults.insert("status".to_string(), SeedValue::Text("OPEN".into()));
        defaults.insert("owner".to_string(), SeedValue::Text("kim".into()));

        let mut state = FilterState::new(schema());
        assert!(state.seed_defaults(&defaults));
        assert_eq!(state.to_query(), "status=OPEN");

        let mut restored = FilterState::from_query(schema(), "?status=CLOSED");
        assert!(!restored.seed_defaults(&defaults));
        assert_eq!(restored.to_query(), "status=CLOSED");
    }

    #[test]
    fn set_rejects_undeclared_key() {
        let mut state = FilterState::new(schema());
        let err = state.set("owner", Some("kim".into())).unwrap_err();
        assert_eq!(err, FilterError::UnknownKey("owner".into()));
    }

    #[test]
    fn clear_all_uses_schema_search_key() {
        let mut state = FilterState::from_query(schema(), "q=foo&status=OPEN&mine=true");
        assert_eq!(state.active_count(), 3);

        state.clear_all();
        assert_eq!(state.to_query(), "q=foo");
    }
}
