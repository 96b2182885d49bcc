//! Error types for the ontology crate
//!
//! Covers:
//! - Registry lookups (`NotFound`)
//! - Construction-time catalog checks
//! - Catalog document loading

use std::path::PathBuf;

/// Registry lookup and construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OntologyError {
    /// No node with this id
    #[error("node not found: {0}")]
    NotFound(String),

    /// Node id is empty or blank
    #[error("node id cannot be empty")]
    EmptyNodeId,

    /// Two nodes share an id
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// Template placeholder not listed in its required params
    #[error("node {node_id}: template '{pattern}' uses undeclared placeholder(s) {placeholders:?}")]
    UndeclaredPlaceholder {
        node_id: String,
        pattern: String,
        placeholders: Vec<String>,
    },
}

impl OntologyError {
    /// Create not-found error
    #[inline]
    pub fn not_found(node_id: impl Into<String>) -> Self {
        Self::NotFound(node_id.into())
    }
}

/// Errors while loading a catalog document
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but failed registry checks
    #[error("invalid catalog: {0}")]
    Invalid(#[from] OntologyError),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = OntologyError::not_found("gantt");
        assert_eq!(err.to_string(), "node not found: gantt");
    }

    #[test]
    fn invalid_catalog_wraps_registry_error() {
        let err: CatalogError = OntologyError::DuplicateNode("issues".into()).into();
        assert!(matches!(err, CatalogError::Invalid(OntologyError::DuplicateNode(_))));
        assert_eq!(err.to_string(), "invalid catalog: duplicate node id: issues");
    }
}
