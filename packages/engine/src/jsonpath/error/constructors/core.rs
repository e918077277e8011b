//! Core error constructor functions
//!
//! Primary factory methods for creating path error types with proper context.

use std::fmt::Display;

use super::super::types::{ErrorKind, JsonPathError};

impl JsonPathError {
    /// Creates an invalid path expression error
    ///
    /// # Arguments
    /// * `expression` - The invalid path expression
    /// * `reason` - Specific reason why the expression is invalid
    /// * `position` - Optional 0-based character position where the error occurred
    ///
    /// # Examples
    /// ```
    /// use jsonq_engine::jsonpath::error::JsonPathError;
    ///
    /// let error = JsonPathError::invalid_expression(
    ///     "a[abc]",
    ///     "invalid character 'a'",
    ///     Some(2)
    /// );
    /// assert!(error.is_parse());
    /// ```
    pub fn invalid_expression(
        expression: impl Into<String>,
        reason: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        let expression = expression.into();
        let reason = reason.into();
        let message = match position {
            Some(pos) => format!("invalid path '{expression}': {reason} at position {pos}"),
            None => format!("invalid path '{expression}': {reason}"),
        };
        JsonPathError::new(ErrorKind::InvalidPath, message)
    }

    /// Creates an error for a character that no production accepts
    pub fn unexpected_character(expression: &str, found: char, position: usize) -> Self {
        Self::invalid_expression(
            expression,
            format!("invalid character '{found}'"),
            Some(position),
        )
    }

    /// Creates an error for input that stops in the middle of a segment
    pub fn unexpected_end(expression: &str, position: usize) -> Self {
        Self::invalid_expression(expression, "unexpected end of path", Some(position))
    }

    /// Creates a selector mismatch error
    ///
    /// Raised when a field selector is applied to a value kind that has no
    /// named fields.
    pub fn field_mismatch(selector: &str, kind: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("failed to get field '{selector}' from {kind}"),
        )
    }

    /// Creates an error for a selector that found no matching key
    pub fn field_not_found(selector: &str, kind: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("field '{selector}' not found in {kind}"),
        )
    }

    /// Creates an index mismatch error for non-sequence values
    pub fn index_mismatch(index: usize, kind: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("failed to get index [{index}] from {kind}"),
        )
    }

    /// Creates an out of range index error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("failed to get index [{index}] from sequence of length {len}"),
        )
    }

    /// Creates a wildcard index mismatch error
    pub fn index_all_mismatch(kind: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("failed to get all values [*] from {kind}"),
        )
    }

    /// Creates a recursive descent mismatch error
    pub fn recursive_mismatch(selector: &str, kind: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Match,
            format!("failed to get '..{selector}' from {kind}"),
        )
    }

    /// Creates a coercion error
    ///
    /// # Examples
    /// ```
    /// use jsonq_engine::jsonpath::error::JsonPathError;
    ///
    /// let error = JsonPathError::type_mismatch("bool", "i64");
    /// assert!(error.is_type());
    /// ```
    pub fn type_mismatch(source: impl Display, destination: impl Display) -> Self {
        JsonPathError::new(
            ErrorKind::Type,
            format!("cannot assign value of kind {source} to destination of kind {destination}"),
        )
    }

    /// Creates a recursion depth error
    pub fn depth_limit(selector: &str, max_depth: usize) -> Self {
        JsonPathError::new(
            ErrorKind::DepthLimit,
            format!("recursive descent '..{selector}' exceeded maximum depth {max_depth}"),
        )
    }
}
