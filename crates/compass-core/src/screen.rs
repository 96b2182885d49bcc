//! One rendered node under the session's current preset

use compass_filter::{FilterError, FilterState, FilterValue, VisibleSchema};
use compass_ontology::{OntologyNode, Preset, PresetPolicy, SuggestedAction};
use compass_policy::{EffectivePolicy, PolicySource};
use serde::Serialize;

/// Everything a host needs to draw a node
///
/// Owns its filter state. The query string is a projection of that state,
/// recomputed by [`Screen::query_string`] after each change.
#[derive(Debug, Clone, Serialize)]
pub struct Screen<'a> {
    node: &'a OntologyNode,
    preset: Preset,
    read_only: bool,
    policy: EffectivePolicy<'a>,
    actions: Vec<&'a SuggestedAction>,
    filters: FilterState,
}

impl<'a> Screen<'a> {
    pub(crate) fn new(
        node: &'a OntologyNode,
        preset: Preset,
        read_only: bool,
        policy: EffectivePolicy<'a>,
        actions: Vec<&'a SuggestedAction>,
        filters: FilterState,
    ) -> Self {
        Self {
            node,
            preset,
            read_only,
            policy,
            actions,
            filters,
        }
    }

    /// Displayed node
    #[inline]
    #[must_use]
    pub fn node(&self) -> &'a OntologyNode {
        self.node
    }

    /// Preset the screen was opened under
    #[inline]
    #[must_use]
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Mutation actions are suppressed
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Effective UI policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &'a PresetPolicy {
        self.policy.policy
    }

    /// Where the policy came from
    #[inline]
    #[must_use]
    pub fn policy_source(&self) -> PolicySource {
        self.policy.source
    }

    /// Suggested actions after capability and read-only gating
    #[inline]
    #[must_use]
    pub fn actions(&self) -> &[&'a SuggestedAction] {
        &self.actions
    }

    /// Filter state
    #[inline]
    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Filter keys to render under this screen's preset
    #[must_use]
    pub fn visible_filters(&self) -> VisibleSchema<'_> {
        self.filters.visible(self.preset)
    }

    /// True if `column` is hidden by the policy
    #[must_use]
    pub fn is_column_hidden(&self, column: &str) -> bool {
        self.policy().hidden_columns.iter().any(|c| c == column)
    }

    /// Set or remove a filter value
    ///
    /// # Errors
    /// `FilterError::UnknownKey` for an undeclared key
    pub fn set_filter(&mut self, key: &str, value: Option<FilterValue>) -> Result<(), FilterError> {
        self.filters.set(key, value)
    }

    /// Clear filters, keeping a non-empty search term
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    /// Query string mirroring the filter state
    #[must_use]
    pub fn query_string(&self) -> String {
        self.filters.to_query()
    }
}
