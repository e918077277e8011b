//! Field query DSL and its request-scoped carrier
//!
//! A field query selects which fields a later serialization includes. It is
//! written in a small JSON DSL, built into a [`FieldQueryDef`] tree, and
//! attached to a [`QueryContext`] for the encoder to pick up.

pub mod builder;
pub mod context;
pub mod def;
pub mod dsl;
pub mod error;

pub use builder::{FieldQueryString, build_dynamic, build_value};
pub use context::QueryContext;
pub use def::FieldQueryDef;
pub use dsl::{SubFieldQuery, field_query, sub_field_query};
pub use error::{QueryError, QueryResult};
