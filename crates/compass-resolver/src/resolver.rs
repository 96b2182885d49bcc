//! Scoring, ranking and deep-link resolution
//!
//! `score = w.intent * |intents| + w.keyword * |keywords| + w.entity * |entities|`
//! with ties broken by priority and then node id, so the ranking is total.

use crate::error::ResolveError;
use crate::query::{matched_keywords, Query};
use crate::weights::ResolverWeights;
use compass_ontology::{DeepLinkTemplate, EntityType, IntentTag, OntologyNode, Scope};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::{debug, info};

/// What a node matched on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    /// Shared intents
    pub intents: Vec<IntentTag>,
    /// Matched keywords, normalized
    pub keywords: Vec<String>,
    /// Shared entity types
    pub entities: Vec<EntityType>,
}

/// A candidate with its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredNode<'a> {
    /// Candidate node
    pub node: &'a OntologyNode,
    /// Weighted score, always positive in a ranking
    pub score: u32,
    /// Matched terms
    pub matched: MatchBreakdown,
}

/// Winning node and its expanded link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// Winning node
    pub node: &'a OntologyNode,
    /// Expanded deep link
    pub link: String,
    /// Template the link came from
    pub template: &'a DeepLinkTemplate,
    /// Winning score
    pub score: u32,
}

/// Intent resolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    weights: ResolverWeights,
}

impl Resolver {
    /// Resolver with custom weights
    #[must_use]
    pub fn new(weights: ResolverWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    #[inline]
    #[must_use]
    pub fn weights(&self) -> ResolverWeights {
        self.weights
    }

    /// Score one node
    #[must_use]
    pub fn score<'a>(&self, query: &Query, node: &'a OntologyNode) -> ScoredNode<'a> {
        let text = query.normalized_text();
        self.score_normalized(query, &text, node)
    }

    fn score_normalized<'a>(
        &self,
        query: &Query,
        text: &str,
        node: &'a OntologyNode,
    ) -> ScoredNode<'a> {
        let matched = MatchBreakdown {
            intents: query
                .intents()
                .into_iter()
                .filter(|intent| node.intents.contains(intent))
                .collect(),
            keywords: matched_keywords(text, &node.keywords).into_iter().collect(),
            entities: query
                .entities()
                .into_iter()
                .filter(|entity| node.entities.contains(entity))
                .collect(),
        };
        let score = self.weights.score(
            matched.intents.len(),
            matched.keywords.len(),
            matched.entities.len(),
        );

        ScoredNode {
            node,
            score,
            matched,
        }
    }

    /// Candidates with a positive score, best first
    ///
    /// Ordering: score descending, then priority ascending, then node id.
    #[must_use]
    pub fn rank<'a, I>(&self, query: &Query, candidates: I) -> Vec<ScoredNode<'a>>
    where
        I: IntoIterator<Item = &'a OntologyNode>,
    {
        let text = query.normalized_text();
        let mut ranked: Vec<_> = candidates
            .into_iter()
            .map(|node| self.score_normalized(query, &text, node))
            .filter(|scored| scored.score > 0)
            .collect();

        ranked.sort_by(|a, b| {
            (Reverse(a.score), a.node.priority, &a.node.node_id).cmp(&(
                Reverse(b.score),
                b.node.priority,
                &b.node.node_id,
            ))
        });

        debug!(matches = ranked.len(), text = %text, "ranked candidates");
        ranked
    }

    /// Pick the best candidate and expand its first satisfiable template
    ///
    /// # Errors
    /// - `ResolveError::NoMatch` if no candidate scores above zero
    /// - `ResolveError::MissingScopeParam` if the winner's templates all
    ///   need parameters `scope` does not carry
    pub fn resolve<'a, I>(
        &self,
        query: &Query,
        scope: &Scope,
        candidates: I,
    ) -> Result<Resolution<'a>, ResolveError>
    where
        I: IntoIterator<Item = &'a OntologyNode>,
    {
        let winner = self
            .rank(query, candidates)
            .into_iter()
            .next()
            .ok_or(ResolveError::NoMatch)?;

        let (template, link) = expand_first(winner.node, scope)?;
        info!(node_id = %winner.node.node_id, score = winner.score, link = %link, "query resolved");

        Ok(Resolution {
            node: winner.node,
            link,
            template,
            score: winner.score,
        })
    }
}

/// First template of `node` that `scope` satisfies, expanded
///
/// # Errors
/// Returns `ResolveError::MissingScopeParam` with the union of every
/// template's missing params when none is satisfiable.
pub fn expand_first<'a>(
    node: &'a OntologyNode,
    scope: &Scope,
) -> Result<(&'a DeepLinkTemplate, String), ResolveError> {
    let mut missing: Vec<String> = Vec::new();

    for template in &node.deep_link_templates {
        if let Some(link) = template.expand(scope) {
            return Ok((template, link));
        }
        for param in template.missing_params(scope) {
            if !missing.iter().any(|m| m == param) {
                missing.push(param.to_string());
            }
        }
    }

    debug!(node_id = %node.node_id, missing = ?missing, "no deep-link template satisfied");
    Err(ResolveError::missing_scope(node.node_id.as_str(), missing))
}
