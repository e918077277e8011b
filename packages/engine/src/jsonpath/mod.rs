//! Path query engine
//!
//! Compiles dotted path expressions such as `a.b`, `a[0].b`, `a[*].b` and
//! `..id` into node chains and applies them to dynamic values, coercing
//! matches into typed destinations.
//!
//! ```
//! use jsonq_engine::jsonpath::Path;
//! use serde_json::json;
//!
//! let doc = json!({"a": [{"b": 1}, {"b": 2}]});
//! let mut values: Vec<i64> = Vec::new();
//! Path::new("a[*].b")?.get(&doc, &mut values)?;
//! assert_eq!(values, vec![1, 2]);
//! # Ok::<(), jsonq_engine::jsonpath::JsonPathError>(())
//! ```

pub mod ast;
pub mod builder;
pub mod cache;
pub mod compiler;
pub mod core_evaluator;
pub mod error;
pub mod expression;
pub mod selector_parser;

pub use self::{
    ast::PathNode,
    builder::PathBuilder,
    cache::{PATH_CACHE, PathCache},
    compiler::PathParser,
    core_evaluator::PathEvaluator,
    error::{ErrorKind, JsonPathError, JsonPathResult},
    expression::{Path, PathString},
};
