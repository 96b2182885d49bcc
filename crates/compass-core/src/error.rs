//! Error types for the Compass engine
//!
//! Component errors convert into [`CompassError`] with `?`.

use crate::config::ConfigError;
use compass_filter::FilterError;
use compass_ontology::{Capability, CatalogError, OntologyError, UnknownValue};
use compass_policy::LockedPresetError;
use compass_resolver::ResolveError;

/// Main Compass error type
#[derive(Debug, thiserror::Error)]
pub enum CompassError {
    /// Registry lookup or validation failed
    #[error("ontology error: {0}")]
    Ontology(#[from] OntologyError),

    /// Catalog could not be loaded
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filter schema or state error
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Query did not resolve
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Preset switch rejected
    #[error(transparent)]
    LockedPreset(#[from] LockedPresetError),

    /// Unrecognized vocabulary value
    #[error(transparent)]
    UnknownValue(#[from] UnknownValue),

    /// Node exists but the session may not see it
    #[error("node '{node_id}' is not visible to this session")]
    NotVisible {
        /// Requested node
        node_id: String,
        /// Capabilities the session lacks
        missing: Vec<Capability>,
    },
}

impl CompassError {
    /// Build a visibility error
    pub fn not_visible(node_id: impl Into<String>, missing: Vec<Capability>) -> Self {
        Self::NotVisible {
            node_id: node_id.into(),
            missing,
        }
    }

    /// True for missing or invisible nodes
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Ontology(OntologyError::NotFound(_)) | Self::NotVisible { .. })
    }
}

/// Result alias for engine operations
pub type CompassResult<T> = Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;
    use compass_ontology::Preset;

    #[test]
    fn conversions() {
        let err: CompassError = OntologyError::not_found("wbs").into();
        assert!(err.is_not_found());

        let err: CompassError = LockedPresetError {
            current: Preset::AuditEvidence,
            requested: Preset::PmWork,
        }
        .into();
        assert_eq!(err.to_string(), "preset AUDIT_EVIDENCE is locked; cannot switch to PM_WORK");
    }

    #[test]
    fn not_visible_message() {
        let err = CompassError::not_visible("audit-evidence", vec![Capability::ViewAuditLog]);
        assert_eq!(err.to_string(), "node 'audit-evidence' is not visible to this session");
        assert!(err.is_not_found());
    }
}
