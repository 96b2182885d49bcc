//! Immutable node registry
//!
//! Provides [`OntologyRegistry`]: built once at startup, validated, then
//! shared by reference (usually behind an `Arc`) with the gate, the policy
//! engine and the resolver.

use crate::error::OntologyError;
use crate::node::OntologyNode;
use crate::vocabulary::Domain;
use std::collections::HashMap;

/// Read-only catalog of ontology nodes
///
/// Iteration order is declaration order.
#[derive(Debug, Clone, Default)]
pub struct OntologyRegistry {
    nodes: Vec<OntologyNode>,
    by_id: HashMap<String, usize>,
}

impl OntologyRegistry {
    /// Build and validate a registry
    ///
    /// # Errors
    /// - `OntologyError::EmptyNodeId` for a blank id
    /// - `OntologyError::DuplicateNode` if two nodes share an id
    /// - `OntologyError::UndeclaredPlaceholder` if a template uses a
    ///   placeholder missing from its `required_params`
    pub fn new(nodes: Vec<OntologyNode>) -> Result<Self, OntologyError> {
        let mut by_id = HashMap::with_capacity(nodes.len());

        for (index, node) in nodes.iter().enumerate() {
            validate_node(node)?;
            if by_id.insert(node.node_id.clone(), index).is_some() {
                return Err(OntologyError::DuplicateNode(node.node_id.clone()));
            }
            if node.deep_link_templates.is_empty() {
                tracing::debug!(node_id = %node.node_id, "node declares no deep-link templates");
            }
            if !node.has_default_policy() {
                tracing::debug!(
                    node_id = %node.node_id,
                    default_preset = %node.default_preset,
                    "default preset has no policy; baseline applies"
                );
            }
        }

        tracing::debug!(nodes = nodes.len(), "ontology registry built");
        Ok(Self { nodes, by_id })
    }

    /// Lookup a node by id
    ///
    /// # Errors
    /// `OntologyError::NotFound` for an unknown id
    pub fn get(&self, node_id: &str) -> Result<&OntologyNode, OntologyError> {
        self.by_id
            .get(node_id)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| OntologyError::not_found(node_id))
    }

    /// True if a node with this id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, node_id: &str) -> bool {
        self.by_id.contains_key(node_id)
    }

    /// All nodes in declaration order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[OntologyNode] {
        &self.nodes
    }

    /// Nodes of one domain, in declaration order
    #[must_use]
    pub fn list_by_domain(&self, domain: Domain) -> Vec<&OntologyNode> {
        self.nodes.iter().filter(|n| n.domain == domain).collect()
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &OntologyNode> {
        self.nodes.iter()
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the registry has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn validate_node(node: &OntologyNode) -> Result<(), OntologyError> {
    if node.node_id.trim().is_empty() {
        return Err(OntologyError::EmptyNodeId);
    }
    for template in &node.deep_link_templates {
        let undeclared = template.undeclared_placeholders();
        if !undeclared.is_empty() {
            return Err(OntologyError::UndeclaredPlaceholder {
                node_id: node.node_id.clone(),
                pattern: template.pattern.clone(),
                placeholders: undeclared.into_iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(())
}
