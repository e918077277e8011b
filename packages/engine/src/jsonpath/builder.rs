//! Incremental construction of a path node chain

use super::ast::PathNode;

/// Collects parsed segments in order and links them into a chain.
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<PathNode>,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&mut self, name: &str) -> &mut Self {
        self.segments.push(PathNode::selector(name));
        self
    }

    pub fn index(&mut self, index: usize) -> &mut Self {
        self.segments.push(PathNode::index(index));
        self
    }

    pub fn index_all(&mut self) -> &mut Self {
        self.segments.push(PathNode::index_all());
        self
    }

    pub fn recursive(&mut self, name: &str) -> &mut Self {
        self.segments.push(PathNode::recursive(name));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Link the segments, each one becoming the child of the one before it.
    ///
    /// Returns the root node, or `None` when nothing was added.
    #[must_use]
    pub fn build(self) -> Option<PathNode> {
        self.segments.into_iter().rev().fold(None, |next, mut node| {
            node.set_child(next.map(Box::new));
            Some(node)
        })
    }
}
