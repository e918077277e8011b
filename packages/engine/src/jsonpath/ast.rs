//! Path expression Abstract Syntax Tree (AST) definitions
//!
//! A compiled path is a singly linked chain of [`PathNode`]s. Every node has
//! at most one child; a node without a child is terminal, and reaching it
//! means the matched value is assigned to the destination.

use std::fmt;

/// Characters rejected in `.name` and `..name` segments
#[inline]
pub(crate) fn is_reserved(c: char) -> bool {
    matches!(c, '$' | '*' | ']')
}

/// Individual path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathNode {
    /// Child field access (`.name` or a bare leading `name`)
    Selector {
        /// ASCII-lowercased field name
        name: String,
        child: Option<Box<PathNode>>,
    },

    /// Sequence position (`[N]`)
    Index {
        index: usize,
        child: Option<Box<PathNode>>,
    },

    /// Every sequence position (`[*]`)
    IndexAll { child: Option<Box<PathNode>> },

    /// Field at any depth (`..name`)
    ///
    /// The node always targets `name`: a match continues with `child`, or is
    /// assigned directly when the node is terminal.
    Recursive {
        /// ASCII-lowercased field name
        name: String,
        child: Option<Box<PathNode>>,
    },
}

impl PathNode {
    #[must_use]
    pub fn selector(name: &str) -> Self {
        PathNode::Selector {
            name: name.to_ascii_lowercase(),
            child: None,
        }
    }

    #[must_use]
    pub fn index(index: usize) -> Self {
        PathNode::Index { index, child: None }
    }

    #[must_use]
    pub fn index_all() -> Self {
        PathNode::IndexAll { child: None }
    }

    #[must_use]
    pub fn recursive(name: &str) -> Self {
        PathNode::Recursive {
            name: name.to_ascii_lowercase(),
            child: None,
        }
    }

    /// Next node in the chain
    #[inline]
    #[must_use]
    pub fn child(&self) -> Option<&PathNode> {
        match self {
            PathNode::Selector { child, .. }
            | PathNode::Index { child, .. }
            | PathNode::IndexAll { child }
            | PathNode::Recursive { child, .. } => child.as_deref(),
        }
    }

    /// Replace the next node in the chain
    pub(crate) fn set_child(&mut self, next: Option<Box<PathNode>>) {
        match self {
            PathNode::Selector { child, .. }
            | PathNode::Index { child, .. }
            | PathNode::IndexAll { child }
            | PathNode::Recursive { child, .. } => *child = next,
        }
    }

    /// Whether reaching this node assigns instead of descending
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.child().is_none()
    }

    /// Whether this node may write to the destination more than once
    #[inline]
    #[must_use]
    pub fn is_fan_out(&self) -> bool {
        matches!(self, PathNode::IndexAll { .. } | PathNode::Recursive { .. })
    }

    /// Field name targeted by selector and recursive nodes
    #[inline]
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            PathNode::Selector { name, .. } | PathNode::Recursive { name, .. } => Some(name.as_str()),
            PathNode::Index { .. } | PathNode::IndexAll { .. } => None,
        }
    }

    /// Match a source key against this node.
    ///
    /// Returns `Some(next)` when the node selects `key` (compared
    /// ASCII-case-insensitively), where `next` is the node to continue with
    /// or `None` when the match is terminal.
    #[must_use]
    pub fn match_field(&self, key: &str) -> Option<Option<&PathNode>> {
        match self.field_name() {
            Some(name) if name.eq_ignore_ascii_case(key) => Some(self.child()),
            _ => None,
        }
    }

    /// Match a sequence position against this node.
    #[must_use]
    pub fn match_index(&self, position: usize) -> Option<Option<&PathNode>> {
        match self {
            PathNode::Index { index, .. } if *index == position => Some(self.child()),
            PathNode::IndexAll { .. } => Some(self.child()),
            _ => None,
        }
    }

    /// Iterate over this node and every node after it
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments { next: Some(self) }
    }

    fn fmt_segment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Reserved characters only parse in a bare segment.
            PathNode::Selector { name, .. } if name.contains(is_reserved) => f.write_str(name),
            PathNode::Selector { name, .. } => write!(f, ".{name}"),
            PathNode::Index { index, .. } => write!(f, "[{index}]"),
            PathNode::IndexAll { .. } => f.write_str("[*]"),
            PathNode::Recursive { name, .. } => write!(f, "..{name}"),
        }
    }
}

/// Renders the canonical expression for this node and its descendants.
impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            node.fmt_segment(f)?;
        }
        Ok(())
    }
}

/// Iterator over a node chain
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    next: Option<&'a PathNode>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.child();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(mut nodes: Vec<PathNode>) -> PathNode {
        let mut next = None;
        while let Some(mut node) = nodes.pop() {
            node.set_child(next.map(Box::new));
            next = Some(node);
        }
        next.expect("chain needs at least one node")
    }

    #[test]
    fn display_renders_canonical_form() {
        let node = chain(vec![
            PathNode::selector("A"),
            PathNode::index_all(),
            PathNode::recursive("B"),
            PathNode::index(2),
        ]);
        assert_eq!(node.to_string(), ".a[*]..b[2]");
    }

    #[test]
    fn display_keeps_reserved_names_bare() {
        let node = chain(vec![PathNode::selector("$"), PathNode::selector("a")]);
        assert_eq!(node.to_string(), "$.a");

        let node = chain(vec![
            PathNode::selector("a"),
            PathNode::index(0),
            PathNode::selector("b$"),
        ]);
        assert_eq!(node.to_string(), ".a[0]b$");
    }

    #[test]
    fn field_matching_ignores_ascii_case() {
        let node = PathNode::selector("Name");
        assert!(node.match_field("NAME").is_some());
        assert!(node.match_field("nam").is_none());
        assert_eq!(node.match_field("name"), Some(None));
    }

    #[test]
    fn index_matching() {
        let node = chain(vec![PathNode::index(1), PathNode::selector("x")]);
        assert!(node.match_index(0).is_none());
        let next = node.match_index(1).expect("index 1 matches");
        assert_eq!(next.and_then(PathNode::field_name), Some("x"));
        assert!(PathNode::index_all().match_index(99).is_some());
    }

    #[test]
    fn terminal_and_fan_out() {
        let node = chain(vec![PathNode::recursive("b"), PathNode::selector("c")]);
        assert!(!node.is_terminal());
        assert!(node.is_fan_out());
        assert_eq!(node.iter().count(), 2);
        assert!(node.iter().last().is_some_and(PathNode::is_terminal));
    }
}
