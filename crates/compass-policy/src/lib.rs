//! Compass Preset Policy Engine
//!
//! Decides how a node is rendered for the active preset (lens) without ever
//! changing what the caller is allowed to do.
//!
//! # Core Operations
//!
//! - [`RolePresetTable::default_preset_for`]: session-start preset per role
//! - [`effective_policy`]: requested → node default → baseline fallback
//! - [`switch_preset`] / [`PresetSession`]: hierarchy-driven read-only flag
//!   and the terminal `AUDIT_EVIDENCE` lock
//! - [`available_actions`]: suggested actions after capability and
//!   read-only gating
//!
//! # Example
//!
//! ```rust
//! use compass_ontology::Preset;
//! use compass_policy::{PresetSession, RolePresetTable};
//!
//! let roles = RolePresetTable::default();
//! let mut session = PresetSession::new(roles.default_preset_for("pm"));
//!
//! let switch = session.switch_to(Preset::ExecSummary).unwrap();
//! assert!(switch.read_only);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod actions;
mod effective;
mod roles;
mod transition;

// Re-exports
pub use actions::available_actions;
pub use effective::{baseline_policy, effective_policy, EffectivePolicy, PolicySource};
pub use roles::{RolePresetTable, BASELINE_PRESET};
pub use transition::{
    allowed_targets, switch_preset, LockedPresetError, PresetSession, PresetSwitch,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use compass_ontology::{catalog, CapabilitySet, Capability, Preset};

    #[test]
    fn pm_session_on_default_catalog() {
        let registry = catalog::default_registry().unwrap();
        let roles = RolePresetTable::default();
        let mut session = PresetSession::new(roles.default_preset_for("pm"));
        let issues = registry.get("issues").unwrap();

        let granted = CapabilitySet::from([Capability::ViewIssues, Capability::ManageIssues]);
        let effective = effective_policy(issues, session.current());
        assert_eq!(effective.source, PolicySource::Requested);
        assert_eq!(available_actions(effective.policy, &granted, session.is_read_only()).len(), 2);

        session.switch_to(Preset::ExecSummary).unwrap();
        let effective = effective_policy(issues, session.current());
        assert!(available_actions(effective.policy, &granted, session.is_read_only()).is_empty());
    }

    #[test]
    fn customer_lens_on_kanban_uses_node_default() {
        let registry = catalog::default_registry().unwrap();
        let kanban = registry.get("kanban").unwrap();

        let effective = effective_policy(kanban, Preset::CustomerApproval);
        assert_eq!(effective.source, PolicySource::NodeDefault);
        assert_eq!(effective.policy, kanban.policy_for(Preset::DevExecution).unwrap());
    }
}
