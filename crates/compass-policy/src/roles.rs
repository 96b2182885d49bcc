//! Role → default preset table
//!
//! Each role starts its session in exactly one preset. Roles are opaque
//! string keys supplied by the authorization layer; lookup is
//! case-insensitive and unknown roles fall back to the baseline preset.

use compass_ontology::Preset;
use std::collections::BTreeMap;

/// Preset used for roles the table does not know
pub const BASELINE_PRESET: Preset = Preset::DevExecution;

/// Session-start lens per role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePresetTable {
    entries: BTreeMap<String, Preset>,
    baseline: Preset,
}

impl RolePresetTable {
    /// Empty table with the standard baseline
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            baseline: BASELINE_PRESET,
        }
    }

    /// Assign a role's preset, replacing any existing entry
    #[must_use]
    pub fn with_role(mut self, role: &str, preset: Preset) -> Self {
        self.insert(role, preset);
        self
    }

    /// Change the fallback preset
    #[inline]
    #[must_use]
    pub fn with_baseline(mut self, baseline: Preset) -> Self {
        self.baseline = baseline;
        self
    }

    /// Assign a role's preset
    pub fn insert(&mut self, role: &str, preset: Preset) {
        self.entries.insert(normalize(role), preset);
    }

    /// Merge entries over this table
    pub fn merge<'a>(&mut self, overrides: impl IntoIterator<Item = (&'a String, &'a Preset)>) {
        for (role, preset) in overrides {
            self.insert(role, *preset);
        }
    }

    /// Session-start preset for `role`
    #[must_use]
    pub fn default_preset_for(&self, role: &str) -> Preset {
        match self.entries.get(&normalize(role)) {
            Some(preset) => *preset,
            None => {
                tracing::debug!(
                    role,
                    baseline = %self.baseline,
                    "unknown role; using baseline preset"
                );
                self.baseline
            }
        }
    }

    /// Fallback preset
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> Preset {
        self.baseline
    }

    /// Known roles with their presets, sorted by role
    pub fn iter(&self) -> impl Iterator<Item = (&str, Preset)> {
        self.entries.iter().map(|(role, preset)| (role.as_str(), *preset))
    }

    /// Number of known roles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no role is configured
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RolePresetTable {
    fn default() -> Self {
        Self::empty()
            .with_role("executive", Preset::ExecSummary)
            .with_role("sponsor", Preset::ExecSummary)
            .with_role("pmo", Preset::PmoControl)
            .with_role("pm", Preset::PmWork)
            .with_role("developer", Preset::DevExecution)
            .with_role("qa", Preset::DevExecution)
            .with_role("customer", Preset::CustomerApproval)
            .with_role("auditor", Preset::AuditEvidence)
    }
}

fn normalize(role: &str) -> String {
    role.trim().to_ascii_lowercase()
}
