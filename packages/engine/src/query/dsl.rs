//! Composing field query DSL text
//!
//! Composed pieces are embedded as JSON strings; the builder decodes them
//! again, so pieces nest to any depth.
//!
//! ```
//! use jsonq_engine::query::{field_query, sub_field_query};
//!
//! let query = field_query(["id", sub_field_query("user").fields(["name"]).as_str()]);
//! let def = query.build()?;
//! assert_eq!(def.query_string()?.as_str(), r#"["id",{"user":["name"]}]"#);
//! # Ok::<(), jsonq_engine::query::QueryError>(())
//! ```

use serde_json::{Map, Value};

use super::builder::FieldQueryString;

fn encode_all<I, F>(fields: I) -> Value
where
    I: IntoIterator<Item = F>,
    F: Into<FieldQueryString>,
{
    Value::Array(
        fields
            .into_iter()
            .map(|field| Value::String(field.into().0))
            .collect(),
    )
}

/// List of sibling fields
pub fn field_query<I, F>(fields: I) -> FieldQueryString
where
    I: IntoIterator<Item = F>,
    F: Into<FieldQueryString>,
{
    FieldQueryString(encode_all(fields).to_string())
}

/// Start a field with sub-fields
pub fn sub_field_query(name: impl Into<String>) -> SubFieldQuery {
    SubFieldQuery { name: name.into() }
}

/// Named field awaiting its sub-fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubFieldQuery {
    name: String,
}

impl SubFieldQuery {
    pub fn fields<I, F>(&self, fields: I) -> FieldQueryString
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldQueryString>,
    {
        let mut object = Map::with_capacity(1);
        object.insert(self.name.clone(), encode_all(fields));
        FieldQueryString(Value::Object(object).to_string())
    }
}
