//! jsonq public API
//!
//! Extract values from decoded JSON with compact path expressions, and build
//! field selection queries for later serialization.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": 10, "c": true}});
//! let mut n = 0i64;
//! jsonq::get("a.b", &doc, &mut n)?;
//! assert_eq!(n, 10);
//!
//! let mut ids: Vec<u32> = Vec::new();
//! jsonq::unmarshal_path("items[*].id", br#"{"items":[{"id":1},{"id":2}]}"#, &mut ids)?;
//! assert_eq!(ids, vec![1, 2]);
//! # Ok::<(), jsonq::JsonPathError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::Arc;

// Re-export the engine surface
pub use jsonq_engine::{
    AsDynamic, ConfigurationError, DynamicValue, ErrorKind, FieldQueryDef, FieldQueryString,
    JsonPathError, JsonPathResult, Path, PathNode, PathOptions, PathStatsSnapshot, PathString,
    QueryContext, QueryError, Slot, StructuredValue, Validator, ValueKind, field_query,
    sub_field_query,
};
pub use jsonq_engine::prelude;
pub use serde_json::Value;

use jsonq_engine::PATH_CACHE;

/// Compile `expression`, reusing a previously compiled path when cached
///
/// # Errors
///
/// Returns an `InvalidPath` error for a malformed expression.
pub fn compile(expression: &str) -> JsonPathResult<Arc<Path>> {
    PATH_CACHE.get_or_compile(expression)
}

/// Apply the path `expression` to an already decoded value
///
/// # Errors
///
/// Returns the parse error for a malformed expression, otherwise the errors
/// of [`Path::get`].
pub fn get<V, D>(expression: &str, value: &V, dest: &mut D) -> JsonPathResult<()>
where
    V: AsDynamic + ?Sized,
    D: Slot + ?Sized,
{
    compile(expression)?.get(value, dest)
}

/// Like [`get`], with explicit evaluation options
///
/// # Errors
///
/// See [`get`] and [`Path::get_with`].
pub fn get_with<V, D>(
    expression: &str,
    value: &V,
    dest: &mut D,
    options: &PathOptions,
) -> JsonPathResult<()>
where
    V: AsDynamic + ?Sized,
    D: Slot + ?Sized,
{
    compile(expression)?.get_with(value, dest, options)
}

/// Decode `data` as JSON and apply the path `expression` in one step
///
/// # Errors
///
/// Returns the parse error for a malformed expression, an `InvalidJson`
/// error for undecodable data, otherwise the errors of [`Path::get`].
pub fn unmarshal_path<D: Slot + ?Sized>(expression: &str, data: &[u8], dest: &mut D) -> JsonPathResult<()> {
    let path = compile(expression)?;
    log::trace!("decoding {} bytes for path '{expression}'", data.len());
    path.unmarshal(data, dest)
}

/// Compilation and cache counters for [`compile`]
#[must_use]
pub fn path_stats() -> PathStatsSnapshot {
    PATH_CACHE.stats().snapshot()
}

/// Derive a context carrying `query`
#[must_use]
pub fn with_field_query(ctx: &QueryContext, query: FieldQueryDef) -> QueryContext {
    ctx.with_field_query(query)
}

/// Query attached to `ctx`, if any
#[must_use]
pub fn field_query_from(ctx: &QueryContext) -> Option<&FieldQueryDef> {
    ctx.field_query()
}
