//! Error types for entitygraph-search
//!
//! Searches themselves never fail once assembled: missing attributes,
//! empty neighborhoods and skip-limit truncation all degrade to a shorter
//! trail stream. Errors are reserved for malformed traversals and config.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for search assembly and traversal documents
#[derive(Debug, Error)]
pub enum SearchError {
    /// Criteria that can never be evaluated (bad regex, malformed range)
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Traversal that violates the active search configuration
    #[error("Invalid traversal: {0}")]
    InvalidTraversal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON traversal document error (includes unknown step/criteria types)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML traversal document error (includes unknown step/criteria types)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SearchError {
    pub fn invalid_criteria(msg: impl Into<String>) -> Self {
        SearchError::InvalidCriteria(msg.into())
    }

    pub fn invalid_traversal(msg: impl Into<String>) -> Self {
        SearchError::InvalidTraversal(msg.into())
    }
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::invalid_criteria("bad pattern '('");
        assert_eq!(err.to_string(), "Invalid criteria: bad pattern '('");

        let err = SearchError::invalid_traversal("max_hops 5000 exceeds 64");
        assert!(err.to_string().starts_with("Invalid traversal"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .err()
            .unwrap();
        let err: SearchError = json_err.into();
        assert!(matches!(err, SearchError::Json(_)));
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(SearchError::invalid_traversal("empty"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(SearchError::InvalidTraversal(_))));
    }
}
