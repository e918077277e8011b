//! Borrowed view over decoded documents and host structures
//!
//! `DynamicValue` unifies the shapes a path can walk: a decoded
//! `serde_json::Value`, a host structure exposing field metadata, and an
//! optional/reference indirection in front of either.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::kind::ValueKind;

static NULL: Value = Value::Null;

/// A host structure whose fields are addressed by wire name.
///
/// Implementors describe their fields once through `field_names` (wire names
/// in declaration order) and hand out each field as a `DynamicValue`.
///
/// ```
/// use jsonq_engine::value::{AsDynamic, DynamicValue, StructuredValue};
///
/// struct Point {
///     x: serde_json::Value,
///     y: serde_json::Value,
/// }
///
/// impl StructuredValue for Point {
///     fn type_name(&self) -> &'static str {
///         "Point"
///     }
///
///     fn field_names(&self) -> &'static [&'static str] {
///         &["X", "Y"]
///     }
///
///     fn field_value(&self, index: usize) -> Option<DynamicValue<'_>> {
///         match index {
///             0 => Some(self.x.as_dynamic()),
///             1 => Some(self.y.as_dynamic()),
///             _ => None,
///         }
///     }
/// }
///
/// impl AsDynamic for Point {
///     fn as_dynamic(&self) -> DynamicValue<'_> {
///         DynamicValue::Structured(self)
///     }
/// }
/// ```
pub trait StructuredValue {
    /// Name of the structure type, used for metadata caching and errors
    fn type_name(&self) -> &'static str;

    /// Wire names of the fields in declaration order
    fn field_names(&self) -> &'static [&'static str];

    /// Value of the field at `index` in `field_names`
    fn field_value(&self, index: usize) -> Option<DynamicValue<'_>>;
}

/// Conversion into a borrowed dynamic view
pub trait AsDynamic {
    fn as_dynamic(&self) -> DynamicValue<'_>;
}

/// Borrowed, copyable view over a dynamic value
#[derive(Clone, Copy)]
pub enum DynamicValue<'a> {
    /// Decoded JSON document node
    Json(&'a Value),
    /// Host structure exposing wire-named fields
    Structured(&'a dyn StructuredValue),
    /// Optional or reference wrapper; `None` reads as null
    Indirect(Option<&'a dyn AsDynamic>),
}

impl<'a> DynamicValue<'a> {
    /// The JSON null value
    #[inline]
    #[must_use]
    pub fn null() -> DynamicValue<'static> {
        DynamicValue::Json(&NULL)
    }

    /// Unwrap every indirection in front of the value
    #[must_use]
    pub fn resolve(self) -> DynamicValue<'a> {
        let mut current = self;
        loop {
            match current {
                DynamicValue::Indirect(Some(inner)) => current = inner.as_dynamic(),
                DynamicValue::Indirect(None) => return DynamicValue::Json(&NULL),
                resolved => return resolved,
            }
        }
    }

    /// Kind of the value after resolving indirections
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self.resolve() {
            DynamicValue::Json(value) => json_kind(value),
            DynamicValue::Structured(structured) => ValueKind::Structured(structured.type_name()),
            DynamicValue::Indirect(_) => ValueKind::Null,
        }
    }

    /// The underlying JSON node, if the value is (or points at) one
    #[must_use]
    pub fn as_json(self) -> Option<&'a Value> {
        match self.resolve() {
            DynamicValue::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Materialise the view as an owned JSON value.
    ///
    /// Structures become objects keyed by their wire names.
    #[must_use]
    pub fn to_json(self) -> Value {
        match self.resolve() {
            DynamicValue::Json(value) => value.clone(),
            DynamicValue::Structured(structured) => {
                let mut object = Map::new();
                for (index, name) in structured.field_names().iter().enumerate() {
                    let field = structured
                        .field_value(index)
                        .map_or(Value::Null, DynamicValue::to_json);
                    object.insert((*name).to_string(), field);
                }
                Value::Object(object)
            }
            DynamicValue::Indirect(_) => Value::Null,
        }
    }
}

impl std::fmt::Debug for DynamicValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DynamicValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            DynamicValue::Structured(structured) => f
                .debug_tuple("Structured")
                .field(&structured.type_name())
                .finish(),
            DynamicValue::Indirect(inner) => f
                .debug_tuple("Indirect")
                .field(&inner.map(|v| v.as_dynamic()))
                .finish(),
        }
    }
}

#[inline]
pub(crate) fn json_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Sequence,
        Value::Object(_) => ValueKind::Mapping,
    }
}

impl AsDynamic for Value {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        DynamicValue::Json(self)
    }
}

impl<T: AsDynamic> AsDynamic for Option<T> {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        DynamicValue::Indirect(self.as_ref().map(|inner| inner as &dyn AsDynamic))
    }
}

impl<T: AsDynamic + ?Sized> AsDynamic for Box<T> {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        (**self).as_dynamic()
    }
}

impl<T: AsDynamic + ?Sized> AsDynamic for Arc<T> {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        (**self).as_dynamic()
    }
}

impl<T: AsDynamic + ?Sized> AsDynamic for &T {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        (**self).as_dynamic()
    }
}

impl AsDynamic for DynamicValue<'_> {
    #[inline]
    fn as_dynamic(&self) -> DynamicValue<'_> {
        *self
    }
}

impl<'a> From<&'a Value> for DynamicValue<'a> {
    #[inline]
    fn from(value: &'a Value) -> Self {
        DynamicValue::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_indirection_reads_as_null() {
        let missing: Option<Value> = None;
        assert_eq!(missing.as_dynamic().kind(), ValueKind::Null);
        assert_eq!(missing.as_dynamic().to_json(), Value::Null);
    }

    #[test]
    fn nested_indirections_resolve_to_the_target() {
        let value = Some(Box::new(Some(json!(3))));
        let resolved = value.as_dynamic().resolve();
        assert_eq!(resolved.as_json(), Some(&json!(3)));
        assert_eq!(value.as_dynamic().kind(), ValueKind::Number);
    }
}
