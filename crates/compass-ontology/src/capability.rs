//! Granted capability sets
//!
//! The engine never computes grants; a caller hands over a [`CapabilitySet`]
//! and every check is plain set containment.

use crate::vocabulary::Capability;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unordered set of capability atoms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Set holding every known capability
    #[must_use]
    pub fn all() -> Self {
        Capability::ALL.iter().copied().collect()
    }

    /// Add a capability, returning whether it was new
    #[inline]
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    /// Membership check
    #[inline]
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// True if every required capability is granted
    #[inline]
    #[must_use]
    pub fn grants_all(&self, required: &CapabilitySet) -> bool {
        required.0.is_subset(&self.0)
    }

    /// Required capabilities that are not granted
    #[must_use]
    pub fn missing_from(&self, required: &CapabilitySet) -> Vec<Capability> {
        required.0.difference(&self.0).copied().collect()
    }

    /// Number of capabilities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no capability is held
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(caps: [Capability; N]) -> Self {
        caps.into_iter().collect()
    }
}

impl Extend<Capability> for CapabilitySet {
    fn extend<I: IntoIterator<Item = Capability>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_check() {
        let required = CapabilitySet::from([Capability::ViewIssues, Capability::ManageIssues]);
        let partial = CapabilitySet::from([Capability::ViewIssues]);
        let superset = CapabilitySet::from([
            Capability::ViewIssues,
            Capability::ManageIssues,
            Capability::ViewKanban,
        ]);

        assert!(!partial.grants_all(&required));
        assert!(superset.grants_all(&required));
        assert!(superset.grants_all(&CapabilitySet::new()));
    }

    #[test]
    fn missing_capabilities_are_reported_in_order() {
        let required = CapabilitySet::from([Capability::ViewWbs, Capability::ManageWbs]);
        let granted = CapabilitySet::from([Capability::ViewWbs]);

        assert_eq!(granted.missing_from(&required), vec![Capability::ManageWbs]);
    }

    #[test]
    fn all_contains_every_capability() {
        let all = CapabilitySet::all();
        assert_eq!(all.len(), Capability::ALL.len());
    }
}
