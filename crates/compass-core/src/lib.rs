//! Compass Core
//!
//! Ties the ontology, policy, filter and resolver crates together behind a
//! [`NavigationEngine`]. Hosts open one [`Session`] per signed-in role and one
//! [`Screen`] per displayed node.
//!
//! # Architecture
//!
//! ```text
//! CompassConfig ──► NavigationEngine (Arc<OntologyRegistry>, roles, resolver)
//!                        │
//!                        ▼
//!                    Session (role, capabilities, preset state)
//!                        │
//!                        ▼
//!                    Screen (node, effective policy, actions, filters)
//! ```
//!
//! # Example
//!
//! ```rust
//! use compass_core::{CompassConfig, NavigationEngine};
//! use compass_filter::{FilterKeyDefinition, FilterSchema};
//! use compass_ontology::{Capability, CapabilitySet, Preset};
//!
//! let engine = NavigationEngine::from_config(&CompassConfig::default()).unwrap();
//! let granted = CapabilitySet::from([Capability::ViewIssues, Capability::ManageIssues]);
//! let mut session = engine.open_session("pm", granted);
//!
//! let schema = FilterSchema::new(vec![FilterKeyDefinition::choice(
//!     "status",
//!     "Status",
//!     &[("OPEN", "Open"), ("CLOSED", "Closed")],
//! )])
//! .unwrap();
//!
//! let screen = session.open_screen("issues", schema.clone(), None).unwrap();
//! assert_eq!(screen.query_string(), "status=OPEN");
//! assert!(!screen.actions().is_empty());
//!
//! session.switch_preset(Preset::ExecSummary).unwrap();
//! let screen = session.open_screen("issues", schema, None).unwrap();
//! assert!(screen.is_read_only());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod engine;
pub mod error;
pub mod screen;
pub mod session;
pub mod telemetry;

// Re-exports
pub use config::{CompassConfig, ConfigError};
pub use engine::NavigationEngine;
pub use error::{CompassError, CompassResult};
pub use screen::Screen;
pub use session::{Session, SessionId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::{CompassConfig, CompassError, CompassResult, NavigationEngine, Screen, Session};
    pub use compass_filter::{FilterKeyDefinition, FilterSchema, FilterValue};
    pub use compass_ontology::{Capability, CapabilitySet, Preset, Scope};
    pub use compass_resolver::Query;
}
