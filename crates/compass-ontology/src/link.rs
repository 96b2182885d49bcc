//! Deep-link templates and the scope they resolve against
//!
//! A template is a URL pattern with `{param}` placeholders plus the list of
//! parameters it needs. Expansion is exact string substitution against a
//! [`Scope`]; no URL encoding is applied to scope values.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is a valid regex")
});

/// Contextual identifiers available for deep-link substitution
///
/// Typical keys are `projectId` and `phaseId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(BTreeMap<String, String>);

impl Scope {
    /// Empty scope
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// With one entry
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace an entry
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Lookup a parameter
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True if the parameter is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Scope {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parameterized deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkTemplate {
    /// URL pattern, e.g. `/issues?projectId={projectId}`
    pub pattern: String,
    /// Scope keys that must be present for this template to apply
    #[serde(default)]
    pub required_params: Vec<String>,
}

impl DeepLinkTemplate {
    /// Create a template, deriving required params from its placeholders
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let required_params = placeholders(&pattern).map(str::to_string).collect();
        Self {
            pattern,
            required_params,
        }
    }

    /// Create a template with an explicit parameter list
    #[must_use]
    pub fn with_params(pattern: impl Into<String>, params: &[&str]) -> Self {
        Self {
            pattern: pattern.into(),
            required_params: params.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Placeholder names in pattern order
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        placeholders(&self.pattern).collect()
    }

    /// Placeholders not listed in `required_params`
    #[must_use]
    pub fn undeclared_placeholders(&self) -> Vec<&str> {
        placeholders(&self.pattern)
            .filter(|p| !self.required_params.iter().any(|r| r.as_str() == *p))
            .collect()
    }

    /// Required params absent from `scope`
    #[must_use]
    pub fn missing_params(&self, scope: &Scope) -> Vec<&str> {
        self.required_params
            .iter()
            .map(String::as_str)
            .filter(|p| !scope.contains(p))
            .collect()
    }

    /// True if every required param is present
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(&self, scope: &Scope) -> bool {
        self.required_params.iter().all(|p| scope.contains(p))
    }

    /// Substitute placeholders from `scope`
    ///
    /// Returns `None` if a required param is absent. Placeholders whose value
    /// is missing are left verbatim, which only happens for undeclared ones.
    #[must_use]
    pub fn expand(&self, scope: &Scope) -> Option<String> {
        if !self.is_satisfied_by(scope) {
            return None;
        }
        let link = PLACEHOLDER.replace_all(&self.pattern, |caps: &Captures<'_>| {
            match scope.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });
        Some(link.into_owned())
    }
}

fn placeholders(pattern: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_params_from_placeholders() {
        let t = DeepLinkTemplate::new("/p/{projectId}/phases/{phaseId}");
        assert_eq!(t.required_params, vec!["projectId", "phaseId"]);
        assert_eq!(t.placeholders(), vec!["projectId", "phaseId"]);
    }

    #[test]
    fn expand_substitutes_exactly() {
        let t = DeepLinkTemplate::new("/x?projectId={projectId}");
        let scope = Scope::new().with("projectId", "P1");
        assert_eq!(t.expand(&scope).as_deref(), Some("/x?projectId=P1"));
    }

    #[test]
    fn expand_does_not_encode_values() {
        let t = DeepLinkTemplate::new("/x?q={term}");
        let scope = Scope::new().with("term", "a b&c");
        assert_eq!(t.expand(&scope).as_deref(), Some("/x?q=a b&c"));
    }

    #[test]
    fn expand_fails_when_param_missing() {
        let t = DeepLinkTemplate::new("/x?projectId={projectId}");
        assert!(t.expand(&Scope::new()).is_none());
        assert_eq!(t.missing_params(&Scope::new()), vec!["projectId"]);
    }

    #[test]
    fn undeclared_placeholders_are_detected() {
        let t = DeepLinkTemplate::with_params("/p/{projectId}/{phaseId}", &["projectId"]);
        assert_eq!(t.undeclared_placeholders(), vec!["phaseId"]);
    }

    #[test]
    fn template_without_params_always_expands() {
        let t = DeepLinkTemplate::new("/dashboard");
        assert_eq!(t.expand(&Scope::new()).as_deref(), Some("/dashboard"));
    }
}
