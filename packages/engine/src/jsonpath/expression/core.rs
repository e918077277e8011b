//! Core `Path` structure and basic methods

use std::fmt;
use std::str::FromStr;

use crate::jsonpath::{
    ast::{PathNode, Segments},
    compiler::PathParser,
    error::{JsonPathError, JsonPathResult},
};

/// Compiled path expression.
///
/// Owns its node chain exclusively and never changes after compilation, so a
/// `Path` can be shared read-only between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    root: PathNode,
    original: String,
}

impl Path {
    /// Compile `expression`
    ///
    /// # Errors
    ///
    /// See [`PathParser::compile`].
    pub fn new(expression: &str) -> JsonPathResult<Self> {
        PathParser::compile(expression)
    }

    #[inline]
    pub(crate) fn from_parts(root: PathNode, original: String) -> Self {
        Self { root, original }
    }

    /// First node of the chain
    #[inline]
    #[must_use]
    pub fn root(&self) -> &PathNode {
        &self.root
    }

    /// Expression the path was compiled from
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        self.root.iter()
    }

    #[inline]
    #[must_use]
    pub fn has_recursive_descent(&self) -> bool {
        self.segments()
            .any(|node| matches!(node, PathNode::Recursive { .. }))
    }

    /// Whether applying the path can write to the destination more than once
    #[inline]
    #[must_use]
    pub fn is_fan_out(&self) -> bool {
        self.segments().any(PathNode::is_fan_out)
    }
}

/// Canonical expression, which compiles back to an equal chain.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl FromStr for Path {
    type Err = JsonPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathParser::compile(s)
    }
}

/// Uncompiled path expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathString(pub String);

impl PathString {
    /// Compile the expression
    ///
    /// # Errors
    ///
    /// See [`PathParser::compile`].
    pub fn build(&self) -> JsonPathResult<Path> {
        PathParser::compile(&self.0)
    }
}

impl From<&str> for PathString {
    fn from(s: &str) -> Self {
        PathString(s.to_string())
    }
}

impl From<String> for PathString {
    fn from(s: String) -> Self {
        PathString(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_round_trips() {
        for expr in ["a.b", "A[0].B", "x[*]..Id[3]", "..b", "[1].c"] {
            let path = Path::new(expr).expect("valid expression");
            let again: Path = path.to_string().parse().expect("canonical form compiles");
            assert_eq!(path.root(), again.root(), "{expr}");
        }
    }

    #[test]
    fn accessors() {
        let path = PathString::from("a[*].b").build().expect("valid expression");
        assert_eq!(path.original(), "a[*].b");
        assert_eq!(path.segments().count(), 3);
        assert!(path.is_fan_out());
        assert!(!path.has_recursive_descent());

        let single = Path::new("a[0].b").expect("valid expression");
        assert!(!single.is_fan_out());
    }
}
