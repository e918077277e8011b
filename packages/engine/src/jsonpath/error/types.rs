//! JSON Path Error Types
//!
//! Core error types for path parsing, traversal and value coercion.

use std::error::Error;
use std::fmt;

/// JSON Path processing error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed path expression (parse error)
    InvalidPath,
    /// A path segment could not be resolved against the value's kind
    Match,
    /// A matched value cannot be coerced into the destination
    Type,
    /// Raw input could not be decoded as JSON
    InvalidJson,
    /// Recursive descent went deeper than the configured limit
    DepthLimit,
}

/// Main JSON Path error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for JsonPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON Path Error: {}", self.message)
    }
}

impl Error for JsonPathError {}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::InvalidPath
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.kind == ErrorKind::Match
    }

    #[must_use]
    pub fn is_type(&self) -> bool {
        self.kind == ErrorKind::Type
    }

    /// Errors that abort a whole evaluation even inside fan-out segments.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::DepthLimit | ErrorKind::InvalidJson)
    }
}
