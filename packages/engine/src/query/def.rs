//! Field selection tree

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::builder::{FieldQueryString, build_value};
use super::error::QueryResult;

/// Field selection tree built from the field query DSL
///
/// A node is one of:
/// - a leaf: a field name without sub-fields,
/// - a named group: a field name with its sub-fields,
/// - an anonymous list: no name, the fields are siblings. Only used at the root.
///
/// Serializing produces the canonical DSL form, which builds back into an
/// equal tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldQueryDef {
    pub name: String,
    pub fields: Vec<FieldQueryDef>,
}

impl FieldQueryDef {
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn group(name: impl Into<String>, fields: Vec<FieldQueryDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    #[must_use]
    pub fn list(fields: Vec<FieldQueryDef>) -> Self {
        Self {
            name: String::new(),
            fields,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.name.is_empty() && self.fields.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// First direct sub-field called `name` (exact match)
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldQueryDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Canonical DSL text for this tree
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Decode` if serialization fails.
    pub fn query_string(&self) -> QueryResult<FieldQueryString> {
        Ok(FieldQueryString(serde_json::to_string(self)?))
    }
}

impl Serialize for FieldQueryDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_anonymous() {
            return self.fields.serialize(serializer);
        }
        if self.fields.is_empty() {
            return serializer.serialize_str(&self.name);
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.fields)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldQueryDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        build_value(&value).map_err(de::Error::custom)
    }
}
