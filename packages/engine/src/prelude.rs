//! jsonq prelude
//!
//! The types most callers need to compile paths, apply them and build field
//! queries.

// Path engine
pub use crate::jsonpath::{JsonPathError, JsonPathResult, Path, PathString};
pub use crate::config::PathOptions;

// Values and destinations
pub use crate::coercion::Slot;
pub use crate::value::{AsDynamic, DynamicValue, StructuredValue};

// Field queries
pub use crate::query::{FieldQueryDef, FieldQueryString, QueryContext, field_query, sub_field_query};
