//! Compass Intent Resolver
//!
//! Scores ontology nodes against a free-text or explicit-intent [`Query`],
//! picks the best one, and expands its first deep-link template the caller's
//! [`Scope`](compass_ontology::Scope) can satisfy.
//!
//! # Example
//!
//! ```rust
//! use compass_ontology::{catalog, IntentTag, Scope};
//! use compass_resolver::{Query, Resolver};
//!
//! let registry = catalog::default_registry().unwrap();
//! let scope = Scope::new().with("projectId", "P1");
//!
//! let resolution = Resolver::default()
//!     .resolve(&Query::intent(IntentTag::FindBlockers), &scope, registry.iter())
//!     .unwrap();
//! assert!(resolution.link.contains("P1"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod query;
pub mod resolver;
pub mod weights;

// Re-exports
pub use error::ResolveError;
pub use query::{normalize, Query};
pub use resolver::{expand_first, MatchBreakdown, Resolution, Resolver, ScoredNode};
pub use weights::ResolverWeights;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
