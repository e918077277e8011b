//! Dynamic value model walked by the path engine
//!
//! The decoded document is a `serde_json::Value`; host structures join in
//! through [`StructuredValue`], and optional/reference wrappers through
//! [`DynamicValue::Indirect`].

pub mod dynamic;
pub mod kind;
pub mod metadata;

pub use dynamic::{AsDynamic, DynamicValue, StructuredValue};
pub use kind::ValueKind;
pub use metadata::{FIELD_NAME_CACHE, FieldNameCache};
