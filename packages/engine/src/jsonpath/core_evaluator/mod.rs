//! Path interpreter
//!
//! Applies compiled node chains to dynamic values:
//!
//! - `engine`: evaluator struct and per-node dispatch
//! - `property_operations`: selector nodes over mappings and structures
//! - `array_operations`: index and wildcard index nodes
//! - `recursive_descent`: `..name` nodes

pub mod array_operations;
pub mod engine;
pub mod property_operations;
pub mod recursive_descent;

pub use engine::PathEvaluator;

use crate::coercion::Slot;
use crate::config::PathOptions;
use crate::jsonpath::ast::PathNode;
use crate::jsonpath::error::JsonPathResult;
use crate::value::DynamicValue;

/// Apply `node` to `value` with default options
///
/// # Errors
///
/// See [`PathEvaluator::get`].
pub fn get<D: Slot + ?Sized>(
    node: &PathNode,
    value: DynamicValue<'_>,
    dest: &mut D,
) -> JsonPathResult<()> {
    PathEvaluator::new(&PathOptions::default()).get(node, value, dest)
}
