//! # jsonq engine
//!
//! Path queries and field queries over decoded JSON documents.
//!
//! ## Features
//!
//! - **Path expressions** (`a.b`, `a[0]`, `a[*].b`, `..id`) compiled once into
//!   immutable node chains and applied to any number of values
//! - **Typed destinations**: matches are coerced into integers, floats,
//!   strings, booleans or raw values, and appended into `Vec`s for fan-out paths
//! - **Case-insensitive** key and field matching
//! - **Host structures** join documents through [`value::StructuredValue`]
//! - **Field query DSL** built into a [`query::FieldQueryDef`] tree and carried
//!   on a request-scoped [`query::QueryContext`]
//!
//! ## Usage
//!
//! ```
//! use jsonq_engine::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({"a": [{"b": 1}, {"b": 2}], "c": {"b": 3}});
//! let mut all: Vec<i64> = Vec::new();
//! Path::new("..b")?.get(&doc, &mut all)?;
//! all.sort_unstable();
//! assert_eq!(all, vec![1, 2, 3]);
//! # Ok::<(), JsonPathError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod coercion;
pub mod config;
pub mod jsonpath;
pub mod prelude;
pub mod query;
pub mod telemetry;
pub mod value;

pub use coercion::{Slot, assign};
pub use config::{ConfigurationError, PathOptions, Validator};
pub use jsonpath::{
    ErrorKind, JsonPathError, JsonPathResult, PATH_CACHE, Path, PathCache, PathNode, PathParser,
    PathString,
};
pub use query::{
    FieldQueryDef, FieldQueryString, QueryContext, QueryError, field_query, sub_field_query,
};
pub use telemetry::{PathStats, PathStatsSnapshot};
pub use value::{AsDynamic, DynamicValue, StructuredValue, ValueKind};
