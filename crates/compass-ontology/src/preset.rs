//! Presets (lenses) and the per-node UI policy they select
//!
//! A [`Preset`] changes how a screen is shaped, never what a caller may do.
//! The hierarchy order lives here because every node refers to it; the
//! transition rules that use it live in `compass-policy`.

use crate::vocabulary::{Capability, UnknownValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Role-oriented rendering lens
///
/// Declaration order is the authority hierarchy: index 0 is the most
/// authoritative and compact view, higher indices carry more execution detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Preset {
    /// Executive summary
    ExecSummary,
    /// PMO oversight and control
    PmoControl,
    /// Project manager working view
    PmWork,
    /// Developer / tester execution view
    DevExecution,
    /// Customer acceptance view
    CustomerApproval,
    /// Audit evidence view (terminal)
    AuditEvidence,
}

impl Preset {
    /// Every preset in hierarchy order
    pub const ALL: [Preset; 6] = [
        Preset::ExecSummary,
        Preset::PmoControl,
        Preset::PmWork,
        Preset::DevExecution,
        Preset::CustomerApproval,
        Preset::AuditEvidence,
    ];

    /// Position in the authority hierarchy (0 = most authoritative)
    #[inline]
    #[must_use]
    pub const fn hierarchy_index(self) -> usize {
        match self {
            Preset::ExecSummary => 0,
            Preset::PmoControl => 1,
            Preset::PmWork => 2,
            Preset::DevExecution => 3,
            Preset::CustomerApproval => 4,
            Preset::AuditEvidence => 5,
        }
    }

    /// Once active, a terminal preset cannot be switched away from
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Preset::AuditEvidence)
    }

    /// Wire name (`PM_WORK`, ...)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::ExecSummary => "EXEC_SUMMARY",
            Preset::PmoControl => "PMO_CONTROL",
            Preset::PmWork => "PM_WORK",
            Preset::DevExecution => "DEV_EXECUTION",
            Preset::CustomerApproval => "CUSTOMER_APPROVAL",
            Preset::AuditEvidence => "AUDIT_EVIDENCE",
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownValue {
                kind: "preset",
                value: wanted.to_string(),
            })
    }
}

/// Information density of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Few columns, large type
    Compact,
    /// Default layout
    #[default]
    Standard,
    /// Every column and detail panel
    Detailed,
}

/// Initial state of the right-hand detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Hidden until requested
    #[default]
    Closed,
    /// Visible on load
    Open,
}

/// Seed value for a filter key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Boolean toggle
    Flag(bool),
    /// Raw string value
    Text(String),
}

/// Action a screen may offer under a preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    /// Stable action key
    pub key: String,
    /// Display label
    pub label: String,
    /// Capability the caller must hold for the action to be offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_capability: Option<Capability>,
    /// Whether the action mutates data (suppressed in read-only sessions)
    #[serde(default)]
    pub mutating: bool,
}

impl SuggestedAction {
    /// Create an action with no capability requirement
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required_capability: None,
            mutating: false,
        }
    }

    /// Require a capability
    #[inline]
    #[must_use]
    pub fn requires(mut self, capability: Capability) -> Self {
        self.required_capability = Some(capability);
        self
    }

    /// Mark as a mutation
    #[inline]
    #[must_use]
    pub fn mutating(mut self) -> Self {
        self.mutating = true;
        self
    }
}

/// UI shape for one (node, preset) pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetPolicy {
    /// Information density
    #[serde(default)]
    pub density: Density,
    /// Initial detail-panel state
    #[serde(default)]
    pub default_right_panel_state: PanelState,
    /// Filter values applied when no other state exists
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub default_filters: IndexMap<String, SeedValue>,
    /// Columns suppressed under this preset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_columns: Vec<String>,
    /// Metrics rendered prominently
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlighted_metrics: Vec<String>,
    /// Actions offered to the user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<SuggestedAction>,
}

impl PresetPolicy {
    /// Baseline policy: standard density, closed panel, nothing hidden or highlighted
    #[inline]
    #[must_use]
    pub fn baseline() -> Self {
        Self::default()
    }

    /// With density
    #[inline]
    #[must_use]
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// With panel state
    #[inline]
    #[must_use]
    pub fn with_panel(mut self, state: PanelState) -> Self {
        self.default_right_panel_state = state;
        self
    }

    /// Add a default filter
    #[must_use]
    pub fn with_default_filter(mut self, key: impl Into<String>, value: SeedValue) -> Self {
        self.default_filters.insert(key.into(), value);
        self
    }

    /// Hide a column
    #[must_use]
    pub fn hide_column(mut self, column: impl Into<String>) -> Self {
        self.hidden_columns.push(column.into());
        self
    }

    /// Highlight a metric
    #[must_use]
    pub fn highlight(mut self, metric: impl Into<String>) -> Self {
        self.highlighted_metrics.push(metric.into());
        self
    }

    /// Offer an action
    #[must_use]
    pub fn with_action(mut self, action: SuggestedAction) -> Self {
        self.suggested_actions.push(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_matches_declaration_order() {
        for (i, preset) in Preset::ALL.iter().enumerate() {
            assert_eq!(preset.hierarchy_index(), i);
        }
    }

    #[test]
    fn only_audit_is_terminal() {
        let terminal: Vec<_> = Preset::ALL.into_iter().filter(|p| p.is_terminal()).collect();
        assert_eq!(terminal, vec![Preset::AuditEvidence]);
    }

    #[test]
    fn preset_parses_wire_name() {
        assert_eq!("PM_WORK".parse::<Preset>().unwrap(), Preset::PmWork);
        assert_eq!("audit_evidence".parse::<Preset>().unwrap(), Preset::AuditEvidence);
        assert!("MANAGER".parse::<Preset>().is_err());
    }

    #[test]
    fn preset_serde_uses_screaming_case() {
        let json = serde_json::to_string(&Preset::CustomerApproval).unwrap();
        assert_eq!(json, "\"CUSTOMER_APPROVAL\"");
    }

    #[test]
    fn baseline_policy_is_standard_and_closed() {
        let policy = PresetPolicy::baseline();
        assert_eq!(policy.density, Density::Standard);
        assert_eq!(policy.default_right_panel_state, PanelState::Closed);
        assert!(policy.highlighted_metrics.is_empty());
        assert!(policy.hidden_columns.is_empty());
    }

    #[test]
    fn seed_values_deserialize_untagged() {
        let filters: IndexMap<String, SeedValue> =
            serde_json::from_str(r#"{"status":"OPEN","mine":true}"#).unwrap();
        assert_eq!(filters["status"], SeedValue::Text("OPEN".into()));
        assert_eq!(filters["mine"], SeedValue::Flag(true));
    }
}
