//! Type conversions for path errors
//!
//! From trait implementations for converting external error types
//! into `JsonPathError` variants.

mod std_conversions;
