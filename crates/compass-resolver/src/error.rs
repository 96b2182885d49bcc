//! Resolver errors

/// Why a query did not produce a navigable link
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Every candidate scored zero
    #[error("no node matches the query")]
    NoMatch,

    /// The winning node has no template the scope can satisfy
    #[error("node '{node_id}' needs scope parameters: {}", .missing.join(", "))]
    MissingScopeParam {
        /// Winning node
        node_id: String,
        /// Unsatisfied parameter names in first-appearance order
        missing: Vec<String>,
    },
}

impl ResolveError {
    /// Build a missing-scope error
    pub fn missing_scope(node_id: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingScopeParam {
            node_id: node_id.into(),
            missing,
        }
    }

    /// True for `NoMatch`
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}
