//! Error constructor functions module
//!
//! Provides convenient factory functions for creating path error types
//! with proper context and formatting.

mod core;

use std::fmt::Display;

use super::types::JsonPathError;

pub fn invalid_expression_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    JsonPathError::invalid_expression(expression, reason, position)
}

pub fn type_error(source: impl Display, destination: impl Display) -> JsonPathError {
    JsonPathError::type_mismatch(source, destination)
}
