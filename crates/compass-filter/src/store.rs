//! Filter value store
//!
//! Updates are pure: [`FilterValueStore::set_value`] and
//! [`FilterValueStore::clear_all`] return a new store and leave the input
//! untouched.

use compass_ontology::SeedValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value held for one filter key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Boolean toggle
    Flag(bool),
    /// Raw text (enum value, string, date or search term)
    Text(String),
}

impl FilterValue {
    /// True if the value counts as an active filter
    ///
    /// Empty text and `false` are inactive.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Text payload, if any
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Flag payload, if any
    #[inline]
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&SeedValue> for FilterValue {
    fn from(seed: &SeedValue) -> Self {
        match seed {
            SeedValue::Flag(flag) => Self::Flag(*flag),
            SeedValue::Text(text) => Self::Text(text.clone()),
        }
    }
}

/// Current filter values keyed by filter key, in insertion order
///
/// Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValueStore(IndexMap<String, FilterValue>);

impl FilterValueStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the store with `key` replaced, or removed when `value` is `None`
    #[must_use]
    pub fn set_value(&self, key: &str, value: Option<FilterValue>) -> Self {
        let mut next = self.clone();
        match value {
            Some(value) => {
                next.0.insert(key.to_string(), value);
            }
            None => {
                next.0.shift_remove(key);
            }
        }
        next
    }

    /// Empty store, except a non-empty value under `search_key` survives
    #[must_use]
    pub fn clear_all(&self, search_key: Option<&str>) -> Self {
        let mut next = Self::new();
        if let Some(key) = search_key {
            if let Some(value) = self.0.get(key).filter(|value| value.is_active()) {
                next.0.insert(key.to_string(), value.clone());
            }
        }
        next
    }

    /// In-place insert
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value for `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    /// True if `key` holds an active value
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(FilterValue::is_active)
    }

    /// Number of active values
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|value| value.is_active()).count()
    }

    /// Copy without inactive entries
    #[must_use]
    pub fn normalized(&self) -> Self {
        self.0
            .iter()
            .filter(|(_, value)| value.is_active())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries, active or not
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no entry is present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterValueStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_value_is_pure() {
        let empty = FilterValueStore::new();
        let one = empty.set_value("status", Some("OPEN".into()));

        assert!(empty.is_empty());
        assert_eq!(one.get("status"), Some(&FilterValue::Text("OPEN".into())));

        let removed = one.set_value("status", None);
        assert!(removed.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn clear_all_keeps_search_term() {
        let store: FilterValueStore = [("q", "foo"), ("status", "OPEN")].into_iter().collect();
        let cleared = store.clear_all(Some("q"));

        let expected: FilterValueStore = [("q", "foo")].into_iter().collect();
        assert_eq!(cleared, expected);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_all_drops_empty_search_term() {
        let store: FilterValueStore = [("q", ""), ("status", "OPEN")].into_iter().collect();
        assert!(store.clear_all(Some("q")).is_empty());
        assert!(store.clear_all(None).is_empty());
    }

    #[test]
    fn activity() {
        let store = FilterValueStore::new()
            .set_value("mine", Some(false.into()))
            .set_value("q", Some("".into()))
            .set_value("status", Some("OPEN".into()));

        assert_eq!(store.len(), 3);
        assert_eq!(store.active_count(), 1);
        assert!(store.is_active("status"));
        assert!(!store.is_active("mine"));
        assert_eq!(store.normalized().len(), 1);
    }

    #[test]
    fn equality_ignores_order() {
        let a: FilterValueStore = [("a", "1"), ("b", "2")].into_iter().collect();
        let b: FilterValueStore = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn from_seed() {
        assert_eq!(FilterValue::from(&SeedValue::Flag(true)), FilterValue::Flag(true));
        assert_eq!(
            FilterValue::from(&SeedValue::Text("OPEN".into())),
            FilterValue::Text("OPEN".into())
        );
    }
}
