//! Suggested-action gating
//!
//! An action is offered when its capability (if any) is granted and, in a
//! read-only session, when it does not mutate data.

use compass_ontology::{permits_action, CapabilitySet, PresetPolicy, SuggestedAction};

/// Actions of `policy` the caller may be offered
#[must_use]
pub fn available_actions<'a>(
    policy: &'a PresetPolicy,
    granted: &CapabilitySet,
    read_only: bool,
) -> Vec<&'a SuggestedAction> {
    policy
        .suggested_actions
        .iter()
        .filter(|action| permits_action(action, granted))
        .filter(|action| !(read_only && action.mutating))
        .collect()
}
