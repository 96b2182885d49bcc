//! Declarative catalog documents
//!
//! Nodes are described in YAML or JSON (`{ nodes: [...] }`) and turned into
//! a validated [`OntologyRegistry`]. The dashboard's own catalog is embedded
//! at compile time.

use crate::error::CatalogError;
use crate::node::OntologyNode;
use crate::registry::OntologyRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Embedded dashboard catalog
pub const DEFAULT_CATALOG_YAML: &str = include_str!("../catalog/default.yaml");

/// On-disk catalog shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Nodes in declaration order
    #[serde(default)]
    pub nodes: Vec<OntologyNode>,
}

impl CatalogDocument {
    /// Validate into a registry
    ///
    /// # Errors
    /// `CatalogError::Invalid` if registry construction fails
    pub fn into_registry(self) -> Result<OntologyRegistry, CatalogError> {
        Ok(OntologyRegistry::new(self.nodes)?)
    }
}

/// Parse a YAML catalog
///
/// # Errors
/// `CatalogError::Yaml` on malformed input, `CatalogError::Invalid` on
/// registry check failures
pub fn from_yaml_str(source: &str) -> Result<OntologyRegistry, CatalogError> {
    let document: CatalogDocument = serde_yaml::from_str(source)?;
    document.into_registry()
}

/// Parse a JSON catalog
///
/// # Errors
/// `CatalogError::Json` on malformed input, `CatalogError::Invalid` on
/// registry check failures
pub fn from_json_str(source: &str) -> Result<OntologyRegistry, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(source)?;
    document.into_registry()
}

/// Load a catalog file; `.json` is read as JSON, anything else as YAML
///
/// # Errors
/// `CatalogError::Io` if the file cannot be read, otherwise as for the
/// string parsers
pub fn load_path(path: impl AsRef<Path>) -> Result<OntologyRegistry, CatalogError> {
    let path = path.as_ref();
    let source =
        std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!(path = %path.display(), json = is_json, "loading catalog");
    if is_json {
        from_json_str(&source)
    } else {
        from_yaml_str(&source)
    }
}

/// The embedded dashboard catalog
///
/// # Errors
/// Only if the embedded document is malformed, which the crate tests rule out
pub fn default_registry() -> Result<OntologyRegistry, CatalogError> {
    from_yaml_str(DEFAULT_CATALOG_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilitySet;
    use crate::gate::CapabilityGate;
    use crate::preset::Preset;
    use crate::vocabulary::{Capability, Domain};
    use std::io::Write;

    #[test]
    fn default_catalog_is_valid() {
        let registry = default_registry().unwrap();
        assert!(registry.len() >= 10);
        assert!(registry.contains("issues"));
        assert!(registry.contains("audit-evidence"));
    }

    #[test]
    fn default_catalog_covers_every_domain() {
        let registry = default_registry().unwrap();
        for domain in Domain::ALL {
            assert!(
                !registry.list_by_domain(*domain).is_empty(),
                "no node for domain {domain}"
            );
        }
    }

    #[test]
    fn default_catalog_declares_default_policies() {
        let registry = default_registry().unwrap();
        for node in registry.iter() {
            assert!(node.has_default_policy(), "{} lacks its default policy", node.node_id);
        }
    }

    #[test]
    fn developer_grants_hide_governance() {
        let registry = default_registry().unwrap();
        let granted = CapabilitySet::from([
            Capability::ViewIssues,
            Capability::ManageIssues,
            Capability::ViewKanban,
            Capability::ViewTests,
        ]);
        let visible = CapabilityGate::new(&registry).visible_nodes(&granted);
        assert!(visible.iter().any(|n| n.node_id == "kanban"));
        assert!(visible.iter().all(|n| n.domain != Domain::Governance));
    }

    #[test]
    fn json_catalog_parses() {
        let json = r#"{"nodes":[{"node_id":"x","label":"X","route":"/x","domain":"overview",
            "default_preset":"PM_WORK","deep_link_templates":[{"pattern":"/x"}]}]}"#;
        let registry = from_json_str(json).unwrap();
        assert_eq!(registry.get("x").unwrap().default_preset, Preset::PmWork);
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = from_yaml_str("nodes: [ { node_id: 1").unwrap_err();
        assert!(matches!(err, CatalogError::Yaml(_)));
    }

    #[test]
    fn load_path_reads_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            concat!(
                "nodes:\n",
                "  - node_id: a\n",
                "    label: A\n",
                "    route: /a\n",
                "    domain: overview\n",
                "    default_preset: EXEC_SUMMARY\n",
                "    deep_link_templates:\n",
                "      - pattern: /a\n",
            )
        )
        .unwrap();

        let registry = load_path(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_path_missing_file_is_io_error() {
        let err = load_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
