//! Core path evaluator struct and node dispatch
//!
//! Walks a dynamic value according to a node chain and hands terminal matches
//! to the coercion layer.

use crate::coercion::{Slot, assign};
use crate::config::PathOptions;
use crate::jsonpath::ast::PathNode;
use crate::jsonpath::error::JsonPathResult;
use crate::value::DynamicValue;

/// Interpreter for compiled node chains.
///
/// Holds no state besides the options it was created with, so one evaluator
/// can serve any number of independent calls.
#[derive(Debug, Clone, Copy)]
pub struct PathEvaluator<'o> {
    pub(super) options: &'o PathOptions,
}

impl<'o> PathEvaluator<'o> {
    #[inline]
    #[must_use]
    pub fn new(options: &'o PathOptions) -> Self {
        Self { options }
    }

    /// Apply `node` and its descendants to `value`, writing matches into `dest`.
    ///
    /// Indirections in front of `value` are unwrapped before dispatch.
    ///
    /// # Errors
    ///
    /// Returns a `Match` error when a single-result segment cannot be
    /// resolved against the value's kind, a `Type` error when a match cannot
    /// be coerced into `dest`, and a `DepthLimit` error when recursive descent
    /// exceeds the configured depth.
    pub fn get<D: Slot + ?Sized>(
        &self,
        node: &PathNode,
        value: DynamicValue<'_>,
        dest: &mut D,
    ) -> JsonPathResult<()> {
        match node {
            PathNode::Selector { .. } => self.get_field(node, value, dest),
            PathNode::Index { index, child } => {
                self.get_index(*index, child.as_deref(), value, dest)
            }
            PathNode::IndexAll { child } => self.get_index_all(child.as_deref(), value, dest),
            PathNode::Recursive { .. } => self.get_recursive(node, value, dest, 0),
        }
    }

    /// Continue with `child`, or assign when the matched node was terminal
    #[inline]
    pub(super) fn resolve_child<D: Slot + ?Sized>(
        &self,
        child: Option<&PathNode>,
        value: DynamicValue<'_>,
        dest: &mut D,
    ) -> JsonPathResult<()> {
        match child {
            Some(next) => self.get(next, value, dest),
            None => assign(value, dest),
        }
    }

    /// Contain a per-branch failure inside a fan-out segment.
    ///
    /// Only fatal errors escape; anything else means "no match in this branch".
    pub(super) fn contain(&self, result: JsonPathResult<()>, branch: &dyn std::fmt::Display) -> JsonPathResult<()> {
        match result {
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                log::debug!("no match in branch {branch}: {e}");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }
}
