//! Field access for selector nodes
//!
//! Mappings are matched by key, host structures by wire name, both
//! ASCII-case-insensitively. The first matching entry wins.

use std::sync::Arc;

use serde_json::{Map, Value, map};

use super::engine::PathEvaluator;
use crate::coercion::Slot;
use crate::jsonpath::ast::PathNode;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};
use crate::value::{DynamicValue, FIELD_NAME_CACHE, StructuredValue};

/// Named children of a mapping or host structure
pub(super) enum FieldSet<'v> {
    Mapping(&'v Map<String, Value>),
    Structured(&'v dyn StructuredValue, Arc<[String]>),
}

impl<'v> FieldSet<'v> {
    /// Fields of an already resolved value, if it has any
    pub(super) fn of(value: DynamicValue<'v>) -> Option<Self> {
        match value {
            DynamicValue::Json(Value::Object(object)) => Some(FieldSet::Mapping(object)),
            DynamicValue::Structured(structured) => Some(FieldSet::Structured(
                structured,
                FIELD_NAME_CACHE.lowered_names(structured),
            )),
            _ => None,
        }
    }

    /// Entries in source order as `(key, value)`
    pub(super) fn iter(&self) -> FieldIter<'_, 'v> {
        match self {
            FieldSet::Mapping(object) => FieldIter::Mapping(object.iter()),
            FieldSet::Structured(structured, names) => FieldIter::Structured {
                structured: *structured,
                names,
                position: 0,
            },
        }
    }
}

pub(super) enum FieldIter<'s, 'v: 's> {
    Mapping(map::Iter<'v>),
    Structured {
        structured: &'v dyn StructuredValue,
        names: &'s [String],
        position: usize,
    },
}

impl<'s, 'v: 's> Iterator for FieldIter<'s, 'v> {
    type Item = (&'s str, DynamicValue<'v>);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FieldIter::Mapping(entries) => entries
                .next()
                .map(|(key, value)| (key.as_str(), DynamicValue::Json(value))),
            FieldIter::Structured {
                structured,
                names,
                position,
            } => {
                let names: &'s [String] = *names;
                let structured: &'v dyn StructuredValue = *structured;
                let name = names.get(*position)?;
                let value = structured
                    .field_value(*position)
                    .unwrap_or_else(|| DynamicValue::null());
                *position += 1;
                Some((name.as_str(), value))
            }
        }
    }
}

impl PathEvaluator<'_> {
    /// Resolve a selector node against `value`
    pub(super) fn get_field<D: Slot + ?Sized>(
        &self,
        node: &PathNode,
        value: DynamicValue<'_>,
        dest: &mut D,
    ) -> JsonPathResult<()> {
        let value = value.resolve();
        let name = node.field_name().unwrap_or_default();

        let Some(fields) = FieldSet::of(value) else {
            return Err(JsonPathError::field_mismatch(name, value.kind()));
        };

        for (key, field) in fields.iter() {
            if let Some(next) = node.match_field(key) {
                return self.resolve_child(next, field, dest);
            }
        }

        if self.options.strict_missing {
            return Err(JsonPathError::field_not_found(name, value.kind()));
        }
        log::trace!("field '{name}' not present in {}", value.kind());
        Ok(())
    }
}
