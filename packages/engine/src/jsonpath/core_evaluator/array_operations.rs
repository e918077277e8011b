//! Sequence access for index and wildcard index nodes

use serde_json::Value;

use super::engine::PathEvaluator;
use crate::coercion::Slot;
use crate::jsonpath::ast::PathNode;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};
use crate::value::DynamicValue;

impl PathEvaluator<'_> {
    /// Resolve `[index]` against `value`
    pub(super) fn get_index<D: Slot + ?Sized>(
        &self,
        index: usize,
        child: Option<&PathNode>,
        value: DynamicValue<'_>,
        dest: &mut D,
    ) -> JsonPathResult<()> {
        let value = value.resolve();
        match value {
            DynamicValue::Json(Value::Array(elements)) => match elements.get(index) {
                Some(element) => self.resolve_child(child, DynamicValue::Json(element), dest),
                None => Err(JsonPathError::index_out_of_bounds(index, elements.len())),
            },
            other => Err(JsonPathError::index_mismatch(index, other.kind())),
        }
    }

    /// Resolve `[*]` against `value`, applying the rest of the chain to every
    /// element in order. Failures on one element do not stop the others.
    pub(super) fn get_index_all<D: Slot + ?Sized>(
        &self,
        child: Option<&PathNode>,
        value: DynamicValue<'_>,
        dest: &mut D,
    ) -> JsonPathResult<()> {
        let value = value.resolve();
        let DynamicValue::Json(Value::Array(elements)) = value else {
            return Err(JsonPathError::index_all_mismatch(value.kind()));
        };

        for (position, element) in elements.iter().enumerate() {
            let result = self.resolve_child(child, DynamicValue::Json(element), dest);
            self.contain(result, &format_args!("[{position}]"))?;
        }
        Ok(())
    }
}
