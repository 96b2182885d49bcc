//! Capability gate
//!
//! The single place where visibility and action availability are decided.
//! Denial is never an error: a node or action the caller cannot use simply
//! does not appear.

use crate::capability::CapabilitySet;
use crate::node::OntologyNode;
use crate::preset::SuggestedAction;
use crate::registry::OntologyRegistry;
use crate::vocabulary::Domain;

/// Stateless capability checks over a registry
#[derive(Debug, Clone, Copy)]
pub struct CapabilityGate<'a> {
    registry: &'a OntologyRegistry,
}

impl<'a> CapabilityGate<'a> {
    /// Gate over `registry`
    #[inline]
    #[must_use]
    pub fn new(registry: &'a OntologyRegistry) -> Self {
        Self { registry }
    }

    /// Nodes whose required capabilities are all granted
    ///
    /// Sorted by ascending priority; ties keep declaration order.
    #[must_use]
    pub fn visible_nodes(&self, granted: &CapabilitySet) -> Vec<&'a OntologyNode> {
        let mut visible: Vec<&OntologyNode> = self
            .registry
            .iter()
            .filter(|node| permits(node, granted))
            .collect();
        // stable: equal priorities stay in declaration order
        visible.sort_by_key(|node| node.priority);

        tracing::debug!(
            granted = granted.len(),
            visible = visible.len(),
            total = self.registry.len(),
            "capability gate evaluated"
        );
        visible
    }

    /// Visible nodes of one domain
    #[must_use]
    pub fn visible_in_domain(
        &self,
        domain: Domain,
        granted: &CapabilitySet,
    ) -> Vec<&'a OntologyNode> {
        self.visible_nodes(granted)
            .into_iter()
            .filter(|node| node.domain == domain)
            .collect()
    }
}

/// True if `granted` covers every capability `node` requires
#[inline]
#[must_use]
pub fn permits(node: &OntologyNode, granted: &CapabilitySet) -> bool {
    granted.grants_all(&node.required_capabilities)
}

/// True if the action has no requirement or its capability is granted
#[inline]
#[must_use]
pub fn permits_action(action: &SuggestedAction, granted: &CapabilitySet) -> bool {
    action
        .required_capability
        .map_or(true, |capability| granted.contains(capability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::DeepLinkTemplate;
    use crate::vocabulary::Capability;

    fn node(id: &str, priority: i32, caps: &[Capability]) -> OntologyNode {
        let mut builder = OntologyNode::builder(id, id, format!("/{id}"), Domain::Execution)
            .priority(priority)
            .link(DeepLinkTemplate::new(format!("/{id}")));
        for cap in caps {
            builder = builder.requires(*cap);
        }
        builder.build()
    }

    #[test]
    fn boundary_requires_every_capability() {
        let registry = OntologyRegistry::new(vec![node(
            "n",
            0,
            &[Capability::ViewIssues, Capability::ViewKanban],
        )])
        .unwrap();
        let gate = CapabilityGate::new(&registry);

        assert!(gate
            .visible_nodes(&CapabilitySet::from([Capability::ViewIssues]))
            .is_empty());
        assert_eq!(
            gate.visible_nodes(&CapabilitySet::from([
                Capability::ViewIssues,
                Capability::ViewKanban,
                Capability::ViewTests,
            ]))
            .len(),
            1
        );
    }

    #[test]
    fn sorted_by_priority_then_declaration() {
        let registry = OntologyRegistry::new(vec![
            node("late", 50, &[]),
            node("first-tie", 10, &[]),
            node("second-tie", 10, &[]),
            node("early", 0, &[]),
        ])
        .unwrap();
        let gate = CapabilityGate::new(&registry);

        let ids: Vec<_> = gate
            .visible_nodes(&CapabilitySet::new())
            .into_iter()
            .map(|n| n.node_id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "first-tie", "second-tie", "late"]);
    }

    #[test]
    fn empty_grant_sees_only_unrestricted_nodes() {
        let registry = OntologyRegistry::new(vec![
            node("open", 0, &[]),
            node("closed", 0, &[Capability::ViewAuditLog]),
        ])
        .unwrap();
        let visible = CapabilityGate::new(&registry).visible_nodes(&CapabilitySet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].node_id, "open");
    }

    #[test]
    fn action_gating() {
        let open = SuggestedAction::new("export", "Export");
        let gated =
            SuggestedAction::new("approve", "Approve").requires(Capability::ApproveDeliverables);
        let granted = CapabilitySet::from([Capability::ViewDeliverables]);

        assert!(permits_action(&open, &granted));
        assert!(!permits_action(&gated, &granted));
        assert!(permits_action(&gated, &CapabilitySet::all()));
    }
}
