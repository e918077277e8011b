//! Building field selection trees from the DSL
//!
//! The DSL is JSON: a string is a leaf field, an array is a list of sibling
//! fields, and an object with exactly one key names a field whose value lists
//! its sub-fields. A string starting with `[` or `{` holds an already encoded
//! sub-query and is decoded again.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::def::FieldQueryDef;
use super::error::{QueryError, QueryResult};
use crate::value::DynamicValue;

/// Field query DSL text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldQueryString(pub String);

impl FieldQueryString {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode and build the selection tree
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Decode` for text that is not JSON and the errors
    /// of [`build_value`] for JSON that is not a field query.
    pub fn build(&self) -> QueryResult<FieldQueryDef> {
        let query: Value = serde_json::from_str(&self.0)?;
        let def = build_value(&query)?;
        tracing::debug!(query = %self.0, fields = def.fields.len(), "built field query");
        Ok(def)
    }
}

impl fmt::Display for FieldQueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldQueryString {
    fn from(s: &str) -> Self {
        FieldQueryString(s.to_string())
    }
}

impl From<String> for FieldQueryString {
    fn from(s: String) -> Self {
        FieldQueryString(s)
    }
}

/// Build a selection tree from a decoded DSL value
///
/// # Errors
///
/// - `EmptyString` for an empty field name,
/// - `AmbiguousObject` for an object without exactly one key,
/// - `UnsupportedKind` for null, bool and number values,
/// - `Decode` when an embedded sub-query is not valid JSON.
pub fn build_value(query: &Value) -> QueryResult<FieldQueryDef> {
    match query {
        Value::String(s) => build_string(s),
        Value::Array(elements) => elements
            .iter()
            .map(build_value)
            .collect::<QueryResult<Vec<_>>>()
            .map(FieldQueryDef::list),
        Value::Object(object) => {
            let mut entries = object.iter();
            let (Some((name, nested)), None) = (entries.next(), entries.next()) else {
                return Err(QueryError::AmbiguousObject(object.len()));
            };
            if name.is_empty() {
                return Err(QueryError::EmptyString);
            }
            let nested = build_value(nested)?;
            Ok(FieldQueryDef::group(name.as_str(), nested.fields))
        }
        other => Err(QueryError::UnsupportedKind(DynamicValue::Json(other).kind())),
    }
}

/// Build from any dynamic value, converting host structures to JSON first
///
/// # Errors
///
/// See [`build_value`].
pub fn build_dynamic(query: DynamicValue<'_>) -> QueryResult<FieldQueryDef> {
    let query = query.resolve();
    match query.as_json() {
        Some(value) => build_value(value),
        None => build_value(&query.to_json()),
    }
}

fn build_string(s: &str) -> QueryResult<FieldQueryDef> {
    match s.as_bytes().first() {
        None => Err(QueryError::EmptyString),
        Some(b'[' | b'{') => match serde_json::from_str::<Value>(s)? {
            Value::String(name) => Ok(FieldQueryDef::leaf(name)),
            nested => build_value(&nested),
        },
        Some(_) => Ok(FieldQueryDef::leaf(s)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_is_leaf() {
        let def = FieldQueryString::from(r#""name""#).build().expect("leaf");
        assert_eq!(def, FieldQueryDef::leaf("name"));
    }

    #[test]
    fn object_keeps_only_nested_fields() {
        let def = build_value(&json!({"user": {"ignored": ["id", "email"]}})).expect("group");
        assert_eq!(def.name, "user");
        assert!(def.fields.is_empty());

        let def = build_value(&json!({"user": ["id", "email"]})).expect("group");
        assert_eq!(
            def,
            FieldQueryDef::group(
                "user",
                vec![FieldQueryDef::leaf("id"), FieldQueryDef::leaf("email")]
            )
        );
    }

    #[test]
    fn embedded_sub_queries_are_decoded_again() {
        let def = build_value(&json!(["a", r#"{"b":["c"]}"#, r#"["d"]"#])).expect("embedded");
        assert_eq!(def.fields[0], FieldQueryDef::leaf("a"));
        assert_eq!(
            def.fields[1],
            FieldQueryDef::group("b", vec![FieldQueryDef::leaf("c")])
        );
        assert_eq!(def.fields[2], FieldQueryDef::list(vec![FieldQueryDef::leaf("d")]));
    }

    struct Selection {
        user: Value,
    }

    impl crate::value::StructuredValue for Selection {
        fn type_name(&self) -> &'static str {
            "builder::tests::Selection"
        }

        fn field_names(&self) -> &'static [&'static str] {
            &["user"]
        }

        fn field_value(&self, index: usize) -> Option<DynamicValue<'_>> {
            use crate::value::AsDynamic;

            (index == 0).then(|| self.user.as_dynamic())
        }
    }

    #[test]
    fn builds_from_dynamic_values() {
        use crate::value::AsDynamic;

        let doc = Some(json!(["id", {"user": ["name"]}]));
        let def = build_dynamic(doc.as_dynamic()).expect("wrapped document");
        assert_eq!(def.query_string().expect("serializable").as_str(), r#"["id",{"user":["name"]}]"#);

        // Structures become objects; the single field names the group.
        let selection = Selection {
            user: json!(["name"]),
        };
        let def = build_dynamic(DynamicValue::Structured(&selection)).expect("structure");
        assert_eq!(
            def,
            FieldQueryDef::group("user", vec![FieldQueryDef::leaf("name")])
        );

        let empty: Option<Value> = None;
        assert!(matches!(
            build_dynamic(empty.as_dynamic()),
            Err(QueryError::UnsupportedKind(_))
        ));
    }

    #[test]
    fn rejects_malformed_queries() {
        assert!(matches!(
            build_value(&json!({"a": [], "b": []})),
            Err(QueryError::AmbiguousObject(2))
        ));
        assert!(matches!(
            build_value(&json!({})),
            Err(QueryError::AmbiguousObject(0))
        ));
        assert!(matches!(build_value(&json!("")), Err(QueryError::EmptyString)));
        assert!(matches!(
            build_value(&json!(["a", 1])),
            Err(QueryError::UnsupportedKind(_))
        ));
        assert!(build_value(&json!("[oops")).is_err_and(|e| e.is_decode()));
        assert!(FieldQueryString::from("not json").build().is_err());
    }
}
