//! Path expression compiler and entry point
//!
//! Provides the main parser interface for compiling path expressions
//! into node chains.

use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    expression::Path,
    selector_parser::SelectorParser,
};

/// Path expression parser and compiler
pub struct PathParser;

impl PathParser {
    /// Compile a path expression into a node chain
    ///
    /// # Arguments
    ///
    /// * `expression` - path expression string (e.g., "a.b", "a[*].b", "..id")
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPath` error naming the offending character and its
    /// position for the first malformed segment. No partial path is produced.
    pub fn compile(expression: &str) -> JsonPathResult<Path> {
        if expression.is_empty() {
            return Err(invalid_expression_error(
                expression,
                "empty path expression",
                Some(0),
            ));
        }

        let root = SelectorParser::new(expression).parse().inspect_err(|e| {
            log::debug!("path compilation failed: {e}");
        })?;

        log::trace!("compiled path '{expression}' as '{root}'");
        Ok(Path::from_parts(root, expression.to_string()))
    }

    /// Validate path syntax without keeping the compiled chain
    ///
    /// # Errors
    ///
    /// See [`PathParser::compile`].
    pub fn validate(expression: &str) -> JsonPathResult<()> {
        Self::compile(expression).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_expression_is_rejected() {
        let err = PathParser::compile("").expect_err("empty path must fail");
        assert!(err.is_parse());
        assert!(err.message.contains("empty path expression"));
    }

    #[test]
    fn malformed_expressions_produce_no_path() {
        for expr in ["a.$", "a[abc]", "a["] {
            assert!(PathParser::compile(expr).is_err(), "{expr} should be rejected");
            assert!(PathParser::validate(expr).is_err());
        }
    }
}
