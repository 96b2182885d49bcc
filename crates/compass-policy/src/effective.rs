//! Effective policy resolution
//!
//! Fallback chain, in order:
//! 1. the node's policy for the requested preset
//! 2. the node's policy for its own default preset
//! 3. the baseline policy (standard density, closed panel)
//!
//! No other entry of the node's policy map is ever consulted.

use compass_ontology::{OntologyNode, Preset, PresetPolicy};
use once_cell::sync::Lazy;
use serde::Serialize;

static BASELINE: Lazy<PresetPolicy> = Lazy::new(PresetPolicy::baseline);

/// Which step of the fallback chain produced a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicySource {
    /// Declared for the requested preset
    Requested,
    /// Declared for the node's default preset
    NodeDefault,
    /// Neither was declared
    Baseline,
}

/// Resolved policy together with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectivePolicy<'a> {
    /// Policy to render with
    pub policy: &'a PresetPolicy,
    /// Fallback step that produced it
    pub source: PolicySource,
    /// Preset the caller asked for
    pub requested: Preset,
}

impl EffectivePolicy<'_> {
    /// True if the requested preset had no policy of its own
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source != PolicySource::Requested
    }
}

/// Resolve the policy to render `node` with under `preset`
#[must_use]
pub fn effective_policy(node: &OntologyNode, preset: Preset) -> EffectivePolicy<'_> {
    let (policy, source) = if let Some(policy) = node.policy_for(preset) {
        (policy, PolicySource::Requested)
    } else if let Some(policy) = node.policy_for(node.default_preset) {
        (policy, PolicySource::NodeDefault)
    } else {
        (&*BASELINE, PolicySource::Baseline)
    };

    if source != PolicySource::Requested {
        tracing::debug!(
            node_id = %node.node_id,
            requested = %preset,
            ?source,
            "preset policy fallback"
        );
    }

    EffectivePolicy {
        policy,
        source,
        requested: preset,
    }
}

/// The baseline policy
#[inline]
#[must_use]
pub fn baseline_policy() -> &'static PresetPolicy {
    &BASELINE
}
