//! Query-string projection properties.
//!
//! Serializing a normalized store and parsing it back yields the same
//! store, whatever characters the text values carry.

use compass_filter::{
    deserialize, serialize, FilterKeyDefinition, FilterKeyType, FilterValue, FilterValueStore,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn keys() -> Vec<FilterKeyDefinition> {
    vec![
        FilterKeyDefinition::search("q", "Search"),
        FilterKeyDefinition::choice("status", "Status", &[("OPEN", "Open"), ("CLOSED", "Closed")]),
        FilterKeyDefinition::boolean("mine", "Mine"),
        FilterKeyDefinition::boolean("overdue", "Overdue"),
        FilterKeyDefinition::new("due", "Due before", FilterKeyType::Date),
        FilterKeyDefinition::new("owner", "Owner", FilterKeyType::String),
    ]
}

fn text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(any::<String>())
}

prop_compose! {
    fn store()(
        q in text(),
        status in prop::option::of(prop::sample::select(vec!["OPEN", "CLOSED"])),
        mine in any::<bool>(),
        overdue in any::<bool>(),
        due in text(),
        owner in text(),
    ) -> FilterValueStore {
        let mut store = FilterValueStore::new();
        for (key, value) in [("q", q), ("due", due), ("owner", owner)] {
            if let Some(value) = value {
                store.insert(key, value);
            }
        }
        if let Some(status) = status {
            store.insert("status", status);
        }
        store.insert("mine", mine);
        store.insert("overdue", overdue);
        store
    }
}

proptest! {
    #[test]
    fn normalized_store_round_trips(store in store()) {
        let keys = keys();
        let normalized = store.normalized();
        let parsed = deserialize(&serialize(&store, &keys), &keys);
        prop_assert_eq!(parsed, normalized);
    }

    #[test]
    fn leading_question_mark_is_ignored(store in store()) {
        let keys = keys();
        let query = serialize(&store, &keys);
        prop_assert_eq!(
            deserialize(&format!("?{query}"), &keys),
            deserialize(&query, &keys)
        );
    }

    #[test]
    fn clear_all_keeps_at_most_the_search_term(store in store()) {
        let cleared = store.clear_all(Some("q"));
        prop_assert!(cleared.len() <= 1);
        prop_assert_eq!(cleared.is_empty(), !store.is_active("q"));
    }
}

#[test]
fn clear_all_example() {
    let store: FilterValueStore = [("q", "foo"), ("status", "OPEN")].into_iter().collect();
    let cleared = store.clear_all(Some("q"));

    assert_eq!(cleared.get("q"), Some(&FilterValue::Text("foo".into())));
    assert_eq!(cleared.len(), 1);
}

#[test]
fn reserved_characters_survive() {
    let keys = keys();
    let store = FilterValueStore::new().set_value("q", Some("a&b=c?d#e+f%".into()));
    let query = serialize(&store, &keys);

    assert_eq!(query, "q=a%26b%3Dc%3Fd%23e%2Bf%25");
    assert_eq!(deserialize(&query, &keys), store);
}
