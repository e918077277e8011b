//! Path error handling module
//!
//! Error types, constructors and conversions for path parsing,
//! traversal and value coercion.

pub mod constructors;
mod conversions;
mod types;

pub use constructors::{invalid_expression_error, type_error};
pub use types::{ErrorKind, JsonPathError, JsonPathResult};
