//! Testing utilities for the Compass workspace
//!
//! Small synthetic registries, filter schemas and proptest strategies so each
//! test can build its own isolated fixtures.

#![allow(missing_docs)]

use compass_filter::{FilterKeyDefinition, FilterKeyType, FilterSchema};
use compass_ontology::{
    Capability, CapabilitySet, DeepLinkTemplate, Domain, EntityType, IntentTag, OntologyNode,
    OntologyRegistry, Preset, PresetPolicy, Scope, SuggestedAction,
};
use proptest::prelude::*;

/// Node with one `{projectId}` template and the given requirements
pub fn project_node(id: &str, priority: i32, required: &[Capability]) -> OntologyNode {
    let mut builder = OntologyNode::builder(id, id, format!("/{id}"), Domain::Execution)
        .priority(priority)
        .default_preset(Preset::PmWork)
        .policy(Preset::PmWork, PresetPolicy::baseline())
        .link(DeepLinkTemplate::with_params(
            format!("/{id}?projectId={{projectId}}"),
            &["projectId"],
        ));
    for capability in required {
        builder = builder.requires(*capability);
    }
    builder.build()
}

/// Three-node registry covering the matching signals
///
/// - `alpha`: `track_progress`, entity `issue`, keyword `alpha`, priority 10
/// - `beta`: `track_progress`, entity `task`, keyword `beta`, priority 10
/// - `gamma`: `find_blockers`, entity `issue`, keywords `gamma` and `감마`,
///   priority 0, requires `view_issues`
pub fn sample_registry() -> OntologyRegistry {
    let alpha = OntologyNode::builder("alpha", "Alpha", "/alpha", Domain::Execution)
        .intent(IntentTag::TrackProgress)
        .entity(EntityType::Issue)
        .keywords(&["alpha"])
        .priority(10)
        .default_preset(Preset::PmWork)
        .policy(
            Preset::PmWork,
            PresetPolicy::baseline()
                .with_action(
                    SuggestedAction::new("create", "Create")
                        .requires(Capability::ManageIssues)
                        .mutating(),
                ),
        )
        .link(DeepLinkTemplate::new("/alpha?projectId={projectId}"))
        .build();

    let beta = OntologyNode::builder("beta", "Beta", "/beta", Domain::Planning)
        .intent(IntentTag::TrackProgress)
        .entity(EntityType::Task)
        .keywords(&["beta"])
        .priority(10)
        .link(DeepLinkTemplate::new("/beta/{projectId}"))
        .build();

    let gamma = OntologyNode::builder("gamma", "Gamma", "/gamma", Domain::Execution)
        .requires(Capability::ViewIssues)
        .intent(IntentTag::FindBlockers)
        .entity(EntityType::Issue)
        .keywords(&["gamma", "감마"])
        .priority(0)
        .link(DeepLinkTemplate::new("/gamma/{projectId}/{phaseId}"))
        .link(DeepLinkTemplate::new("/gamma/{projectId}"))
        .build();

    OntologyRegistry::new(vec![alpha, beta, gamma]).unwrap()
}

/// Issue-list filter bar: `q` search, `status` enum, `mine` boolean, `due` date
pub fn issue_filter_schema() -> FilterSchema {
    FilterSchema::new(vec![
        FilterKeyDefinition::search("q", "Search"),
        FilterKeyDefinition::choice(
            "status",
            "Status",
            &[("OPEN", "Open"), ("IN_PROGRESS", "In progress"), ("CLOSED", "Closed")],
        ),
        FilterKeyDefinition::boolean("mine", "Assigned to me").hidden_in(Preset::ExecSummary),
        FilterKeyDefinition::new("due", "Due before", FilterKeyType::Date)
            .hidden_in(Preset::ExecSummary),
    ])
    .unwrap()
}

pub fn project_scope(project_id: &str) -> Scope {
    Scope::new().with("projectId", project_id)
}

pub fn arb_preset() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

pub fn arb_capability() -> impl Strategy<Value = Capability> {
    prop::sample::select(Capability::ALL.to_vec())
}

pub fn arb_capability_set() -> impl Strategy<Value = CapabilitySet> {
    prop::collection::vec(arb_capability(), 0..8).prop_map(|caps| caps.into_iter().collect())
}

pub fn arb_intent() -> impl Strategy<Value = IntentTag> {
    prop::sample::select(IntentTag::ALL.to_vec())
}

pub fn arb_entity() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::ALL.to_vec())
}
