//! Per-role navigation session
//!
//! A [`Session`] fixes the caller's role and capability grants for its whole
//! lifetime. The only mutable piece is the active preset, which moves through
//! [`PresetSession`] so the hierarchy rule and the audit lock apply.

use crate::error::{CompassError, CompassResult};
use crate::screen::Screen;
use compass_filter::{FilterSchema, FilterState};
use compass_ontology::{
    permits, CapabilityGate, CapabilitySet, OntologyNode, OntologyRegistry, Preset, Scope,
};
use compass_policy::{
    allowed_targets, available_actions, effective_policy, EffectivePolicy, PresetSession,
    PresetSwitch,
};
use compass_resolver::{Query, Resolution, Resolver, ScoredNode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, Span};
use ulid::Ulid;

/// Unique session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Navigation session for one role
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    role: String,
    granted: CapabilitySet,
    presets: PresetSession,
    registry: Arc<OntologyRegistry>,
    resolver: Resolver,
    span: Span,
}

impl Session {
    pub(crate) fn new(
        registry: Arc<OntologyRegistry>,
        resolver: Resolver,
        role: &str,
        granted: CapabilitySet,
        initial: Preset,
    ) -> Self {
        let id = SessionId::new();
        let span = tracing::info_span!("session", session_id = %id, role = %role);
        span.in_scope(|| info!(preset = %initial, capabilities = granted.len(), "session opened"));

        Self {
            id,
            role: role.to_string(),
            granted,
            presets: PresetSession::new(initial),
            registry,
            resolver,
            span,
        }
    }

    /// Session identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Role the session was opened for
    #[inline]
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Granted capabilities
    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.granted
    }

    /// Active preset
    #[inline]
    #[must_use]
    pub fn preset(&self) -> Preset {
        self.presets.current()
    }

    /// Mutation actions are suppressed
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.presets.is_read_only()
    }

    /// Preset is terminal and cannot change
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.presets.is_locked()
    }

    /// Presets a switch may currently name
    #[must_use]
    pub fn allowed_presets(&self) -> Vec<Preset> {
        allowed_targets(self.preset())
    }

    /// Nodes the session may see, by priority
    #[must_use]
    pub fn visible_nodes(&self) -> Vec<&OntologyNode> {
        let _enter = self.span.enter();
        CapabilityGate::new(&self.registry).visible_nodes(&self.granted)
    }

    /// Lookup a node the session may see
    ///
    /// # Errors
    /// - `CompassError::Ontology` if the id is unknown
    /// - `CompassError::NotVisible` if the session lacks a capability
    pub fn node(&self, node_id: &str) -> CompassResult<&OntologyNode> {
        let node = self.registry.get(node_id)?;
        if !permits(node, &self.granted) {
            let missing = self.granted.missing_from(&node.required_capabilities);
            let _enter = self.span.enter();
            debug!(node_id, missing = ?missing, "node hidden from session");
            return Err(CompassError::not_visible(node_id, missing));
        }
        Ok(node)
    }

    /// Effective policy of a visible node under the active preset
    ///
    /// # Errors
    /// Same as [`Session::node`]
    pub fn effective_policy(&self, node_id: &str) -> CompassResult<EffectivePolicy<'_>> {
        let node = self.node(node_id)?;
        let _enter = self.span.enter();
        Ok(effective_policy(node, self.preset()))
    }

    /// Switch the active preset
    ///
    /// # Errors
    /// `CompassError::LockedPreset` once the session is in `AUDIT_EVIDENCE`
    pub fn switch_preset(&mut self, requested: Preset) -> CompassResult<PresetSwitch> {
        let _enter = self.span.enter();
        Ok(self.presets.switch_to(requested)?)
    }

    /// Rank visible nodes against `query`
    #[must_use]
    pub fn rank(&self, query: &Query) -> Vec<ScoredNode<'_>> {
        self.resolver.rank(query, self.visible_nodes())
    }

    /// Resolve `query` among visible nodes
    ///
    /// # Errors
    /// `CompassError::Resolve` for no match or an unsatisfiable scope
    pub fn resolve(&self, query: &Query, scope: &Scope) -> CompassResult<Resolution<'_>> {
        let candidates = self.visible_nodes();
        let _enter = self.span.enter();
        Ok(self.resolver.resolve(query, scope, candidates)?)
    }

    /// Open a node as a screen
    ///
    /// Filters are restored from `query_string`. When it sets none of the
    /// schema's keys the effective policy's default filters apply instead.
    ///
    /// # Errors
    /// Same as [`Session::node`]
    pub fn open_screen(
        &self,
        node_id: &str,
        schema: FilterSchema,
        query_string: Option<&str>,
    ) -> CompassResult<Screen<'_>> {
        let node = self.node(node_id)?;
        let _enter = self.span.enter();

        let preset = self.preset();
        let read_only = self.is_read_only();
        let policy = effective_policy(node, preset);
        let actions = available_actions(policy.policy, &self.granted, read_only);

        let mut filters = FilterState::from_query(schema, query_string.unwrap_or_default());
        let seeded = filters.seed_defaults(&policy.policy.default_filters);

        debug!(
            node_id,
            preset = %preset,
            source = ?policy.source,
            actions = actions.len(),
            filters = filters.active_count(),
            seeded,
            "screen opened"
        );
        Ok(Screen::new(node, preset, read_only, policy, actions, filters))
    }
}
