//! Navigation engine facade
//!
//! Holds the immutable registry built once at startup and hands out
//! [`Session`]s that share it.

use crate::config::CompassConfig;
use crate::error::CompassResult;
use crate::session::Session;
use compass_ontology::{CapabilityGate, CapabilitySet, OntologyNode, OntologyRegistry, Scope};
use compass_policy::RolePresetTable;
use compass_resolver::{Query, Resolution, Resolver};
use std::sync::Arc;
use tracing::info;

/// Entry point for hosts
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    registry: Arc<OntologyRegistry>,
    roles: RolePresetTable,
    resolver: Resolver,
}

impl NavigationEngine {
    /// Engine over `registry` with the built-in role table and default weights
    #[must_use]
    pub fn new(registry: OntologyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            roles: RolePresetTable::default(),
            resolver: Resolver::default(),
        }
    }

    /// Load the catalog and settings named by `config`
    ///
    /// # Errors
    /// `CompassError::Catalog` if the catalog cannot be loaded
    pub fn from_config(config: &CompassConfig) -> CompassResult<Self> {
        let registry = config.load_registry()?;
        info!(
            nodes = registry.len(),
            catalog = ?config.catalog_path,
            baseline = %config.baseline_preset,
            "navigation engine ready"
        );
        Ok(Self::new(registry)
            .with_roles(config.role_table())
            .with_resolver(Resolver::new(config.resolver)))
    }

    /// With role table
    #[must_use]
    pub fn with_roles(mut self, roles: RolePresetTable) -> Self {
        self.roles = roles;
        self
    }

    /// With resolver
    #[inline]
    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Shared registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &OntologyRegistry {
        &self.registry
    }

    /// Role table
    #[inline]
    #[must_use]
    pub fn roles(&self) -> &RolePresetTable {
        &self.roles
    }

    /// Resolver
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Nodes visible with `granted`
    #[must_use]
    pub fn visible_nodes(&self, granted: &CapabilitySet) -> Vec<&OntologyNode> {
        CapabilityGate::new(&self.registry).visible_nodes(granted)
    }

    /// Start a session at the role's default preset
    #[must_use]
    pub fn open_session(&self, role: &str, granted: CapabilitySet) -> Session {
        let initial = self.roles.default_preset_for(role);
        Session::new(Arc::clone(&self.registry), self.resolver, role, granted, initial)
    }

    /// Resolve `query` among nodes visible with `granted`
    ///
    /// # Errors
    /// `CompassError::Resolve` for no match or an unsatisfiable scope
    pub fn resolve(
        &self,
        query: &Query,
        scope: &Scope,
        granted: &CapabilitySet,
    ) -> CompassResult<Resolution<'_>> {
        Ok(self.resolver.resolve(query, scope, self.visible_nodes(granted))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_ontology::{catalog, Capability, IntentTag, Preset};
    use compass_resolver::ResolveError;
    use crate::error::CompassError;

    fn engine() -> NavigationEngine {
        NavigationEngine::new(catalog::default_registry().unwrap())
    }

    #[test]
    fn session_starts_at_role_default() {
        let engine = engine();
        assert_eq!(
            engine.open_session("auditor", CapabilitySet::all()).preset(),
            Preset::AuditEvidence
        );
        assert_eq!(
            engine.open_session("Customer ", CapabilitySet::all()).preset(),
            Preset::CustomerApproval
        );
        assert_eq!(
            engine.open_session("guest", CapabilitySet::new()).preset(),
            Preset::DevExecution
        );
    }

    #[test]
    fn sessions_share_registry_but_not_state() {
        let engine = engine();
        let mut a = engine.open_session("pm", CapabilitySet::all());
        let b = engine.open_session("pm", CapabilitySet::all());

        a.switch_preset(Preset::ExecSummary).unwrap();
        assert!(a.is_read_only());
        assert!(!b.is_read_only());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn resolution_skips_hidden_nodes() {
        let engine = engine();
        let scope = Scope::new().with("projectId", "P1");
        let query = Query::intent(IntentTag::CollectEvidence);

        let granted = CapabilitySet::all();
        let resolution = engine.resolve(&query, &scope, &granted).unwrap();
        assert_eq!(resolution.node.node_id, "audit-evidence");

        let granted = CapabilitySet::from([Capability::ViewDashboard, Capability::ViewIssues]);
        let err = engine.resolve(&query, &scope, &granted).unwrap_err();
        assert!(matches!(err, CompassError::Resolve(ResolveError::NoMatch)));
    }
}
