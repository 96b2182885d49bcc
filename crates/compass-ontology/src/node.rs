//! Ontology nodes - one addressable domain area per node
//!
//! Provides [`OntologyNode`] and its fluent [`NodeBuilder`].

use crate::capability::CapabilitySet;
use crate::link::DeepLinkTemplate;
use crate::preset::{Preset, PresetPolicy};
use crate::vocabulary::{Capability, Domain, EntityType, IntentTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Domain area with its capability, matching and policy metadata
///
/// Nodes are built once from static configuration and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyNode {
    /// Unique key (`issues`, `kanban`, ...)
    pub node_id: String,
    /// Display label
    pub label: String,
    /// Route without scope parameters
    pub route: String,
    /// Functional area
    pub domain: Domain,
    /// Capabilities a caller must hold to see the node
    #[serde(default)]
    pub required_capabilities: CapabilitySet,
    /// Intents the node answers
    #[serde(default)]
    pub intents: BTreeSet<IntentTag>,
    /// Example phrasings
    #[serde(default)]
    pub canonical_questions: Vec<String>,
    /// Entity types displayed
    #[serde(default)]
    pub entities: BTreeSet<EntityType>,
    /// Matching tokens (English and Korean)
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Metric names shown on the screen
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Preset used when the requested one has no policy
    pub default_preset: Preset,
    /// UI shape per preset
    #[serde(default)]
    pub preset_policies: BTreeMap<Preset, PresetPolicy>,
    /// Deep links, tried in order
    #[serde(default)]
    pub deep_link_templates: Vec<DeepLinkTemplate>,
    /// Lower value = higher precedence
    #[serde(default)]
    pub priority: i32,
    /// Scope keys relevant to the node
    #[serde(default)]
    pub scope_hints: Vec<String>,
}

impl OntologyNode {
    /// Start building a node
    #[must_use]
    pub fn builder(
        node_id: impl Into<String>,
        label: impl Into<String>,
        route: impl Into<String>,
        domain: Domain,
    ) -> NodeBuilder {
        NodeBuilder {
            node: OntologyNode {
                node_id: node_id.into(),
                label: label.into(),
                route: route.into(),
                domain,
                required_capabilities: CapabilitySet::new(),
                intents: BTreeSet::new(),
                canonical_questions: Vec::new(),
                entities: BTreeSet::new(),
                keywords: Vec::new(),
                metrics: Vec::new(),
                default_preset: Preset::DevExecution,
                preset_policies: BTreeMap::new(),
                deep_link_templates: Vec::new(),
                priority: 0,
                scope_hints: Vec::new(),
            },
        }
    }

    /// Policy declared for exactly this preset
    #[inline]
    #[must_use]
    pub fn policy_for(&self, preset: Preset) -> Option<&PresetPolicy> {
        self.preset_policies.get(&preset)
    }

    /// True if the node's default preset has a declared policy
    #[inline]
    #[must_use]
    pub fn has_default_policy(&self) -> bool {
        self.preset_policies.contains_key(&self.default_preset)
    }
}

/// Fluent construction of an [`OntologyNode`]
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: OntologyNode,
}

impl NodeBuilder {
    /// Require a capability
    #[must_use]
    pub fn requires(mut self, capability: Capability) -> Self {
        self.node.required_capabilities.insert(capability);
        self
    }

    /// Add an intent
    #[must_use]
    pub fn intent(mut self, intent: IntentTag) -> Self {
        self.node.intents.insert(intent);
        self
    }

    /// Add an entity type
    #[must_use]
    pub fn entity(mut self, entity: EntityType) -> Self {
        self.node.entities.insert(entity);
        self
    }

    /// Add keywords
    #[must_use]
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.node
            .keywords
            .extend(keywords.iter().map(|k| (*k).to_string()));
        self
    }

    /// Add an example question
    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.node.canonical_questions.push(question.into());
        self
    }

    /// Add a metric name
    #[must_use]
    pub fn metric(mut self, metric: impl Into<String>) -> Self {
        self.node.metrics.push(metric.into());
        self
    }

    /// Set the default preset
    #[must_use]
    pub fn default_preset(mut self, preset: Preset) -> Self {
        self.node.default_preset = preset;
        self
    }

    /// Declare the policy for a preset
    #[must_use]
    pub fn policy(mut self, preset: Preset, policy: PresetPolicy) -> Self {
        self.node.preset_policies.insert(preset, policy);
        self
    }

    /// Append a deep-link template
    #[must_use]
    pub fn link(mut self, template: DeepLinkTemplate) -> Self {
        self.node.deep_link_templates.push(template);
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.node.priority = priority;
        self
    }

    /// Add a scope hint
    #[must_use]
    pub fn scope_hint(mut self, key: impl Into<String>) -> Self {
        self.node.scope_hints.push(key.into());
        self
    }

    /// Finish
    #[must_use]
    pub fn build(self) -> OntologyNode {
        self.node
    }
}
