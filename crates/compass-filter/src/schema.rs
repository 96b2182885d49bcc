//! Filter key definitions and schemas
//!
//! A screen declares its filter bar as an ordered list of
//! [`FilterKeyDefinition`]s. [`visible_schema`] drops the keys hidden under
//! the active preset and pulls the single search key out of the rest.

use crate::error::FilterError;
use compass_ontology::Preset;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Input widget and value type of a filter key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKeyType {
    /// One of a fixed option list
    Enum,
    /// Free text
    String,
    /// Toggle
    Boolean,
    /// Date (raw ISO string)
    Date,
    /// Free-text search box; at most one per schema
    Search,
}

/// Option of an `enum` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Raw value stored and serialized
    pub value: String,
    /// Display label
    pub label: String,
}

impl FilterOption {
    /// Create an option
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One key of a filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterKeyDefinition {
    /// Unique key, also the query parameter name
    pub key: String,
    /// Display label
    pub label: String,
    /// Value type
    #[serde(rename = "type")]
    pub key_type: FilterKeyType,
    /// Choices for `enum` keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FilterOption>,
    /// Input placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Presets under which the key is not rendered
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub hidden_in_presets: BTreeSet<Preset>,
}

impl FilterKeyDefinition {
    /// Create a definition
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, key_type: FilterKeyType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            key_type,
            options: Vec::new(),
            placeholder: None,
            hidden_in_presets: BTreeSet::new(),
        }
    }

    /// Search key
    #[must_use]
    pub fn search(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKeyType::Search)
    }

    /// Boolean key
    #[must_use]
    pub fn boolean(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKeyType::Boolean)
    }

    /// Enum key with `(value, label)` options
    #[must_use]
    pub fn choice(
        key: impl Into<String>,
        label: impl Into<String>,
        options: &[(&str, &str)],
    ) -> Self {
        let mut def = Self::new(key, label, FilterKeyType::Enum);
        def.options = options
            .iter()
            .map(|(value, label)| FilterOption::new(*value, *label))
            .collect();
        def
    }

    /// With placeholder text
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Hide under `preset`
    #[must_use]
    pub fn hidden_in(mut self, preset: Preset) -> Self {
        self.hidden_in_presets.insert(preset);
        self
    }

    /// True if the key renders under `preset`
    #[inline]
    #[must_use]
    pub fn is_visible_in(&self, preset: Preset) -> bool {
        !self.hidden_in_presets.contains(&preset)
    }

    /// True for the search key
    #[inline]
    #[must_use]
    pub fn is_search(&self) -> bool {
        self.key_type == FilterKeyType::Search
    }
}

/// Keys to render for one preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleSchema<'a> {
    /// The search box, if declared and visible
    pub search_key: Option<&'a FilterKeyDefinition>,
    /// Remaining keys in declared order
    pub other_keys: Vec<&'a FilterKeyDefinition>,
}

impl VisibleSchema<'_> {
    /// Total number of rendered keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.other_keys.len() + usize::from(self.search_key.is_some())
    }

    /// True if nothing renders
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the keys that render under `preset`
///
/// The first visible `search` key becomes `search_key`; on an unvalidated
/// list any further search keys stay in `other_keys`.
#[must_use]
pub fn visible_schema(keys: &[FilterKeyDefinition], preset: Preset) -> VisibleSchema<'_> {
    let mut search_key = None;
    let mut other_keys = Vec::with_capacity(keys.len());

    for def in keys.iter().filter(|def| def.is_visible_in(preset)) {
        if def.is_search() && search_key.is_none() {
            search_key = Some(def);
        } else {
            other_keys.push(def);
        }
    }

    VisibleSchema {
        search_key,
        other_keys,
    }
}

/// Validated, ordered list of filter keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FilterKeyDefinition>", into = "Vec<FilterKeyDefinition>")]
pub struct FilterSchema {
    keys: Vec<FilterKeyDefinition>,
}

impl FilterSchema {
    /// Validate a key list
    ///
    /// # Errors
    /// - `FilterError::EmptyKey` for a blank key
    /// - `FilterError::DuplicateKey` if two keys share a name
    /// - `FilterError::MultipleSearchKeys` for a second `search` key
    /// - `FilterError::MissingOptions` for an `enum` key without options
    pub fn new(keys: Vec<FilterKeyDefinition>) -> Result<Self, FilterError> {
        let mut seen = HashSet::with_capacity(keys.len());
        let mut search: Option<&str> = None;

        for def in &keys {
            if def.key.trim().is_empty() {
                return Err(FilterError::EmptyKey);
            }
            if !seen.insert(def.key.as_str()) {
                return Err(FilterError::DuplicateKey(def.key.clone()));
            }
            if def.key_type == FilterKeyType::Enum && def.options.is_empty() {
                return Err(FilterError::MissingOptions(def.key.clone()));
            }
            if def.is_search() {
                if let Some(first) = search {
                    return Err(FilterError::MultipleSearchKeys {
                        first: first.to_string(),
                        second: def.key.clone(),
                    });
                }
                search = Some(def.key.as_str());
            }
        }

        Ok(Self { keys })
    }

    /// Definitions in declared order
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[FilterKeyDefinition] {
        &self.keys
    }

    /// Lookup a definition
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterKeyDefinition> {
        self.keys.iter().find(|def| def.key == key)
    }

    /// True if the key is declared
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The declared search key, regardless of preset
    #[must_use]
    pub fn search_key(&self) -> Option<&FilterKeyDefinition> {
        self.keys.iter().find(|def| def.is_search())
    }

    /// Keys to render under `preset`
    #[inline]
    #[must_use]
    pub fn visible(&self, preset: Preset) -> VisibleSchema<'_> {
        visible_schema(&self.keys, preset)
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no key is declared
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl TryFrom<Vec<FilterKeyDefinition>> for FilterSchema {
    type Error = FilterError;

    fn try_from(keys: Vec<FilterKeyDefinition>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<FilterSchema> for Vec<FilterKeyDefinition> {
    fn from(schema: FilterSchema) -> Self {
        schema.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue_keys() -> Vec<FilterKeyDefinition> {
        vec![
            FilterKeyDefinition::choice(
                "status",
                "Status",
                &[("OPEN", "Open"), ("CLOSED", "Closed")],
            ),
            FilterKeyDefinition::search("q", "Search").with_placeholder("Title or ID"),
            FilterKeyDefinition::boolean("mine", "Assigned to me").hidden_in(Preset::ExecSummary),
            FilterKeyDefinition::new("due", "Due before", FilterKeyType::Date)
                .hidden_in(Preset::ExecSummary)
                .hidden_in(Preset::CustomerApproval),
        ]
    }

    fn key_names(defs: &[&FilterKeyDefinition]) -> Vec<String> {
        defs.iter().map(|d| d.key.clone()).collect()
    }

    #[test]
    fn visible_schema_partitions_search() {
        let keys = issue_keys();
        let visible = visible_schema(&keys, Preset::PmWork);

        assert_eq!(visible.search_key.map(|d| d.key.as_str()), Some("q"));
        assert_eq!(key_names(&visible.other_keys), vec!["status", "mine", "due"]);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn visible_schema_drops_hidden_keys() {
        let keys = issue_keys();
        let visible = visible_schema(&keys, Preset::ExecSummary);
        assert_eq!(key_names(&visible.other_keys), vec!["status"]);

        let visible = visible_schema(&keys, Preset::CustomerApproval);
        assert_eq!(key_names(&visible.other_keys), vec!["status", "mine"]);
    }

    #[test]
    fn hidden_search_key_is_absent() {
        let keys =
            vec![FilterKeyDefinition::search("q", "Search").hidden_in(Preset::AuditEvidence)];
        let visible = visible_schema(&keys, Preset::AuditEvidence);
        assert!(visible.search_key.is_none());
        assert!(visible.is_empty());
    }

    #[test]
    fn schema_rejects_duplicate_keys() {
        let err = FilterSchema::new(vec![
            FilterKeyDefinition::boolean("mine", "Mine"),
            FilterKeyDefinition::boolean("mine", "Mine again"),
        ])
        .unwrap_err();
        assert_eq!(err, FilterError::DuplicateKey("mine".into()));
    }

    #[test]
    fn schema_rejects_second_search_key() {
        let err = FilterSchema::new(vec![
            FilterKeyDefinition::search("q", "Search"),
            FilterKeyDefinition::search("term", "Term"),
        ])
        .unwrap_err();
        assert!(matches!(err, FilterError::MultipleSearchKeys { .. }));
    }

    #[test]
    fn schema_rejects_enum_without_options() {
        let err = FilterSchema::new(vec![FilterKeyDefinition::new(
            "status",
            "Status",
            FilterKeyType::Enum,
        )])
        .unwrap_err();
        assert_eq!(err, FilterError::MissingOptions("status".into()));
    }

    #[test]
    fn schema_deserializes_and_validates() {
        let json = r#"[
            {"key":"q","label":"Search","type":"search"},
            {"key":"mine","label":"Mine","type":"boolean","hidden_in_presets":["EXEC_SUMMARY"]}
        ]"#;
        let schema: FilterSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.search_key().map(|d| d.key.as_str()), Some("q"));
        assert!(!schema.get("mine").unwrap().is_visible_in(Preset::ExecSummary));

        let bad = r#"[{"key":"q","label":"a","type":"search"},
            {"key":"q","label":"b","type":"string"}]"#;
        assert!(serde_json::from_str::<FilterSchema>(bad).is_err());
    }
}
