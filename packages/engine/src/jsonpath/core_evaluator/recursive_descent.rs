//! Recursive descent for `..name` nodes
//!
//! At each level the fields whose name matches are resolved through the rest
//! of the chain and not searched any deeper; every other field, and every
//! sequence element, is searched with the same node. Matches accumulate
//! depth-first, left to right.

use serde_json::Value;

use super::engine::PathEvaluator;
use super::property_operations::FieldSet;
use crate::coercion::Slot;
use crate::jsonpath::ast::PathNode;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};
use crate::value::{DynamicValue, ValueKind};

/// Whether recursive descent has anything to look at below `value`
#[inline]
fn is_container(value: DynamicValue<'_>) -> bool {
    let kind = value.kind();
    kind.has_fields() || kind == ValueKind::Sequence
}

impl PathEvaluator<'_> {
    pub(super) fn get_recursive<D: Slot + ?Sized>(
        &self,
        node: &PathNode,
        value: DynamicValue<'_>,
        dest: &mut D,
        depth: usize,
    ) -> JsonPathResult<()> {
        let name = node.field_name().unwrap_or_default();
        if depth > self.options.max_depth {
            log::warn!("recursive descent '..{name}' stopped at depth {depth}");
            return Err(JsonPathError::depth_limit(name, self.options.max_depth));
        }

        let value = value.resolve();

        if let Some(fields) = FieldSet::of(value) {
            for (key, field) in fields.iter() {
                if let Some(next) = node.match_field(key) {
                    let result = self.resolve_child(next, field, dest);
                    self.contain(result, &key)?;
                } else if is_container(field) {
                    let result = self.get_recursive(node, field, dest, depth + 1);
                    self.contain(result, &key)?;
                }
            }
            return Ok(());
        }

        if let DynamicValue::Json(Value::Array(elements)) = value {
            for (position, element) in elements.iter().enumerate() {
                let element = DynamicValue::Json(element);
                if is_container(element) {
                    let result = self.get_recursive(node, element, dest, depth + 1);
                    self.contain(result, &format_args!("[{position}]"))?;
                }
            }
            return Ok(());
        }

        Err(JsonPathError::recursive_mismatch(name, value.kind()))
    }
}
