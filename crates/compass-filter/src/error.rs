//! Error types for filter schemas and state

/// Schema construction and state mutation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Key is empty or blank
    #[error("filter key cannot be empty")]
    EmptyKey,

    /// Two definitions share a key
    #[error("duplicate filter key: {0}")]
    DuplicateKey(String),

    /// More than one `search` key
    #[error("schema declares more than one search key: {first}, {second}")]
    MultipleSearchKeys { first: String, second: String },

    /// `enum` key without options
    #[error("enum filter key '{0}' declares no options")]
    MissingOptions(String),

    /// Value set for a key the schema does not declare
    #[error("unknown filter key: {0}")]
    UnknownKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FilterError::DuplicateKey("status".into()).to_string(),
            "duplicate filter key: status"
        );
        assert_eq!(
            FilterError::MultipleSearchKeys {
                first: "q".into(),
                second: "term".into()
            }
            .to_string(),
            "schema declares more than one search key: q, term"
        );
    }
}
