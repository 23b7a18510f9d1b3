//! Error types for canonsql.

use thiserror::Error;

/// The main error type for conversion and its surroundings.
///
/// Only structural violations abort a conversion. Unsupported constructs
/// never surface here; they become placeholders.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A single-table statement whose table clause did not resolve to one table.
    #[error("{statement}: expected exactly one relation, found {found}")]
    ExpectedOneRelation {
        statement: &'static str,
        found: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn one_relation(statement: &'static str, found: usize) -> Self {
        Self::ExpectedOneRelation { statement, found }
    }

    /// Whether this error came from the tree shape rather than the environment.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::ExpectedOneRelation { .. })
    }
}

/// Result type alias for canonsql operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::one_relation("UPDATE", 2);
        assert_eq!(
            err.to_string(),
            "UPDATE: expected exactly one relation, found 2"
        );
        assert!(err.is_structural());
        assert!(!ConvertError::Config("bad".into()).is_structural());
    }
}
