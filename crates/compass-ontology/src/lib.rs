//! Compass Ontology
//!
//! The navigation catalog of the project dashboard: one [`OntologyNode`] per
//! domain area, annotated with capability requirements, matching metadata,
//! per-preset UI policies and deep-link templates.
//!
//! # Overview
//!
//! - **Vocabularies**: closed enums for [`Capability`], [`Domain`],
//!   [`IntentTag`], [`EntityType`] and [`Preset`]
//! - **OntologyRegistry**: immutable, validated catalog built once at startup
//! - **CapabilityGate**: which nodes and actions a caller may see
//! - **Catalog**: YAML/JSON documents and the embedded default catalog
//!
//! # Example
//!
//! ```rust
//! use compass_ontology::{catalog, CapabilityGate, CapabilitySet, Capability};
//!
//! let registry = catalog::default_registry().unwrap();
//! let granted = CapabilitySet::from([Capability::ViewIssues, Capability::ViewKanban]);
//!
//! let visible = CapabilityGate::new(&registry).visible_nodes(&granted);
//! assert!(visible.iter().any(|n| n.node_id == "issues"));
//! ```

#![warn(missing_docs)]

pub mod capability;
pub mod catalog;
pub mod error;
pub mod gate;
pub mod link;
pub mod node;
pub mod preset;
pub mod registry;
pub mod vocabulary;

// Re-exports
pub use capability::CapabilitySet;
pub use catalog::CatalogDocument;
pub use error::{CatalogError, OntologyError};
pub use gate::{permits, permits_action, CapabilityGate};
pub use link::{DeepLinkTemplate, Scope};
pub use node::{NodeBuilder, OntologyNode};
pub use preset::{Density, PanelState, Preset, PresetPolicy, SeedValue, SuggestedAction};
pub use registry::OntologyRegistry;
pub use vocabulary::{Capability, Domain, EntityType, IntentTag, UnknownValue};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for ontology consumers
    pub use crate::{
        Capability, CapabilityGate, CapabilitySet, DeepLinkTemplate, Domain, EntityType,
        IntentTag, OntologyNode, OntologyRegistry, Preset, PresetPolicy, Scope,
        SuggestedAction,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
