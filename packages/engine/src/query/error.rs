//! Field query build errors

use crate::value::ValueKind;

/// Result type for field query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building a field query from its DSL
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to decode field query: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to build field query: empty field name")]
    EmptyString,

    #[error("failed to build field query object: ambiguous object with {0} keys")]
    AmbiguousObject(usize),

    #[error("failed to build field query: unsupported kind {0}")]
    UnsupportedKind(ValueKind),
}

impl QueryError {
    /// Whether the DSL text itself was not valid JSON
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, QueryError::Decode(_))
    }
}
