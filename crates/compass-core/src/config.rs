//! Engine configuration
//!
//! Loaded from TOML. Every field is optional in the file:
//!
//! ```toml
//! catalog_path = "catalog.yaml"
//! baseline_preset = "DEV_EXECUTION"
//! log_filter = "compass=debug"
//! log_json = true
//!
//! [role_presets]
//! steering = "EXEC_SUMMARY"
//!
//! [resolver]
//! keyword = 4
//! ```

use compass_ontology::{catalog, CatalogError, OntologyRegistry, Preset};
use compass_policy::{RolePresetTable, BASELINE_PRESET};
use compass_resolver::ResolverWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Compass configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    /// YAML or JSON catalog; the embedded catalog when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Preset for roles missing from the role table
    pub baseline_preset: Preset,
    /// Role entries merged over the built-in table
    pub role_presets: BTreeMap<String, Preset>,
    /// Fallback `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit log events as JSON lines
    pub log_json: bool,
    /// Resolver scoring weights
    pub resolver: ResolverWeights,
}

impl CompassConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Toml` if
    /// it does not parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        // Relative catalog paths are taken from the config file's directory
        if let (Some(catalog), Some(dir)) = (&config.catalog_path, path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(dir.join(catalog));
            }
        }
        Ok(config)
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// `ConfigError::Toml` on malformed input
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// With baseline preset
    #[inline]
    #[must_use]
    pub fn with_baseline_preset(mut self, preset: Preset) -> Self {
        self.baseline_preset = preset;
        self
    }

    /// With a role override
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>, preset: Preset) -> Self {
        self.role_presets.insert(role.into(), preset);
        self
    }

    /// With log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// With JSON log output
    #[inline]
    #[must_use]
    pub fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// With resolver weights
    #[inline]
    #[must_use]
    pub fn with_resolver_weights(mut self, weights: ResolverWeights) -> Self {
        self.resolver = weights;
        self
    }

    /// Built-in role table with this configuration's overrides
    #[must_use]
    pub fn role_table(&self) -> RolePresetTable {
        let mut table = RolePresetTable::default().with_baseline(self.baseline_preset);
        table.merge(&self.role_presets);
        table
    }

    /// Registry from the configured catalog
    ///
    /// # Errors
    /// Any `CatalogError` from reading or validating the catalog
    pub fn load_registry(&self) -> Result<OntologyRegistry, CatalogError> {
        match &self.catalog_path {
            Some(path) => catalog::load_path(path),
            None => catalog::default_registry(),
        }
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            baseline_preset: BASELINE_PRESET,
            role_presets: BTreeMap::new(),
            log_filter: "info".to_string(),
            log_json: false,
            resolver: ResolverWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(CompassConfig::from_toml_str("").unwrap(), CompassConfig::default());
    }

    #[test]
    fn parses_every_section() {
        let config = CompassConfig::from_toml_str(
            r#"
            baseline_preset = "PM_WORK"
            log_filter = "compass=debug"
            log_json = true

            [role_presets]
            Steering = "EXEC_SUMMARY"

            [resolver]
            keyword = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.baseline_preset, Preset::PmWork);
        assert!(config.log_json);
        assert_eq!(config.resolver, ResolverWeights { intent: 3, keyword: 4, entity: 1 });

        let roles = config.role_table();
        assert_eq!(roles.default_preset_for("steering"), Preset::ExecSummary);
        assert_eq!(roles.default_preset_for("auditor"), Preset::AuditEvidence);
        assert_eq!(roles.default_preset_for("visitor"), Preset::PmWork);
    }

    #[test]
    fn rejects_unknown_preset() {
        let err = CompassConfig::from_toml_str(r#"baseline_preset = "EVERYTHING""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_resolves_relative_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"catalog_path = "nodes.yaml""#).unwrap();

        let config = CompassConfig::load(&path).unwrap();
        assert_eq!(config.catalog_path, Some(dir.path().join("nodes.yaml")));
    }

    #[test]
    fn load_missing_file() {
        let err = CompassConfig::load("/nonexistent/compass.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_catalog_when_unset() {
        let registry = CompassConfig::default().load_registry().unwrap();
        assert!(registry.contains("issues"));
    }
}
