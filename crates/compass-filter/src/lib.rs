//! Compass Filter Specification Engine
//!
//! Declarative filter bars: a [`FilterSchema`] lists the keys a screen
//! offers, a [`FilterValueStore`] holds what the user picked, and the
//! [`query`] module projects the store to and from a URL query string.
//!
//! # Example
//!
//! ```rust
//! use compass_filter::{FilterKeyDefinition, FilterSchema, FilterState};
//!
//! let schema = FilterSchema::new(vec![
//!     FilterKeyDefinition::search("q", "Search"),
//!     FilterKeyDefinition::boolean("mine", "Assigned to me"),
//! ])
//! .unwrap();
//!
//! let mut state = FilterState::from_query(schema, "?q=login&mine=true");
//! state.clear_all();
//! assert_eq!(state.to_query(), "q=login");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod query;
pub mod schema;
pub mod state;
pub mod store;

// Re-exports
pub use error::FilterError;
pub use query::{deserialize, serialize};
pub use schema::{
    visible_schema, FilterKeyDefinition, FilterKeyType, FilterOption, FilterSchema, VisibleSchema,
};
pub use state::FilterState;
pub use store::{FilterValue, FilterValueStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
