//! Query-string projection of filter values
//!
//! Encoding follows `application/x-www-form-urlencoded`, the same rules a
//! browser applies to URL search params.

use crate::schema::{FilterKeyDefinition, FilterKeyType};
use crate::store::{FilterValue, FilterValueStore};
use std::collections::HashMap;
use tracing::debug;
use url::form_urlencoded;

/// Literal a boolean filter serializes to
pub const TRUE_LITERAL: &str = "true";

/// Encode the active values of `store` in declared key order
///
/// Undeclared entries and inactive values (empty text, `false`) are
/// omitted. Booleans encode as `true`.
#[must_use]
pub fn serialize(store: &FilterValueStore, keys: &[FilterKeyDefinition]) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    for def in keys {
        let Some(value) = store.get(&def.key).filter(|v| v.is_active()) else {
            continue;
        };
        match value {
            FilterValue::Flag(_) => out.append_pair(&def.key, TRUE_LITERAL),
            FilterValue::Text(text) => out.append_pair(&def.key, text),
        };
    }

    out.finish()
}

/// Decode a query string into a store for the declared `keys`
///
/// A leading `?` is tolerated and the first occurrence of a repeated key
/// wins. Boolean keys accept only `true`; any other literal leaves the key
/// absent. Other key types keep the raw decoded text, including an empty
/// string. Undeclared parameters are ignored.
#[must_use]
pub fn deserialize(query: &str, keys: &[FilterKeyDefinition]) -> FilterValueStore {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params: HashMap<String, String> = HashMap::new();
    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(name.into_owned()).or_insert_with(|| value.into_owned());
    }

    let mut store = FilterValueStore::new();
    for def in keys {
        let Some(raw) = params.get(&def.key) else {
            continue;
        };
        match def.key_type {
            FilterKeyType::Boolean if raw == TRUE_LITERAL => store.insert(def.key.as_str(), true),
            FilterKeyType::Boolean => {
                debug!(key = %def.key, literal = %raw, "ignoring non-true boolean filter literal");
            }
            _ => store.insert(def.key.as_str(), raw.as_str()),
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys() -> Vec<FilterKeyDefinition> {
        vec![
            FilterKeyDefinition::search("q", "Search"),
            FilterKeyDefinition::choice(
                "status",
                "Status",
                &[("OPEN", "Open"), ("CLOSED", "Closed")],
            ),
            FilterKeyDefinition::boolean("mine", "Mine"),
        ]
    }

    #[test]
    fn serialize_in_declared_order() {
        let store = FilterValueStore::new()
            .set_value("mine", Some(true.into()))
            .set_value("status", Some("OPEN".into()))
            .set_value("q", Some("login bug".into()));

        assert_eq!(serialize(&store, &keys()), "q=login+bug&status=OPEN&mine=true");
    }

    #[test]
    fn serialize_skips_inactive_and_undeclared() {
        let store = FilterValueStore::new()
            .set_value("mine", Some(false.into()))
            .set_value("q", Some(String::new().into()))
            .set_value("owner", Some("kim".into()));

        assert_eq!(serialize(&store, &keys()), "");
    }

    #[test]
    fn deserialize_tolerates_leading_question_mark() {
        let with = deserialize("?status=OPEN", &keys());
        let without = deserialize("status=OPEN", &keys());
        assert_eq!(with, without);
        assert_eq!(with.get("status"), Some(&FilterValue::Text("OPEN".into())));
    }

    #[test]
    fn deserialize_boolean_accepts_only_true() {
        assert_eq!(deserialize("mine=true", &keys()).get("mine"), Some(&FilterValue::Flag(true)));
        assert!(deserialize("mine=1", &keys()).get("mine").is_none());
        assert!(deserialize("mine=TRUE", &keys()).get("mine").is_none());
        assert!(deserialize("mine=false", &keys()).get("mine").is_none());
    }

    #[test]
    fn deserialize_keeps_empty_text() {
        let store = deserialize("q=&status=OPEN", &keys());
        assert_eq!(store.get("q"), Some(&FilterValue::Text(String::new())));
        assert!(!store.is_active("q"));
    }

    #[test]
    fn deserialize_first_occurrence_wins() {
        let store = deserialize("status=OPEN&status=CLOSED", &keys());
        assert_eq!(store.get("status"), Some(&FilterValue::Text("OPEN".into())));
    }

    #[test]
    fn deserialize_ignores_undeclared() {
        let store = deserialize("owner=kim&page=2", &keys());
        assert!(store.is_empty());
    }

    #[test]
    fn deserialize_decodes_percent_and_plus() {
        let store = deserialize("q=%EA%B2%B0%ED%95%A8+%231", &keys());
        assert_eq!(store.get("q"), Some(&FilterValue::Text("결함 #1".into())));
    }
}
