//! Request-scoped carrier for a built field query
//!
//! Backed by `http::Extensions`, so a context can be lifted from or handed to
//! an HTTP request. Attaching never modifies an existing context.

use std::sync::Arc;

use http::Extensions;

use super::def::FieldQueryDef;

/// Reserved slot for the attached query. Private, so no other value can
/// occupy or read it.
#[derive(Clone)]
struct FieldQueryKey(Arc<FieldQueryDef>);

/// Immutable request-scoped values
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    extensions: Extensions,
}

impl QueryContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_extensions(extensions: Extensions) -> Self {
        Self { extensions }
    }

    #[must_use]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    #[must_use]
    pub fn into_extensions(self) -> Extensions {
        self.extensions
    }

    /// Derive a context carrying `query`, shadowing any query already attached
    #[must_use]
    pub fn with_field_query(&self, query: impl Into<Arc<FieldQueryDef>>) -> Self {
        let query = query.into();
        tracing::debug!(fields = query.fields.len(), "attaching field query to context");
        self.with_value(FieldQueryKey(query))
    }

    /// Query attached to this context, if any
    #[must_use]
    pub fn field_query(&self) -> Option<&FieldQueryDef> {
        self.extensions
            .get::<FieldQueryKey>()
            .map(|key| key.0.as_ref())
    }

    /// Shared handle to the attached query
    #[must_use]
    pub fn field_query_arc(&self) -> Option<Arc<FieldQueryDef>> {
        self.extensions
            .get::<FieldQueryKey>()
            .map(|key| Arc::clone(&key.0))
    }

    /// Derive a context carrying `value` under its type
    #[must_use]
    pub fn with_value<T: Clone + Send + Sync + 'static>(&self, value: T) -> Self {
        let mut extensions = self.extensions.clone();
        extensions.insert(value);
        Self { extensions }
    }

    #[must_use]
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }
}

impl From<Extensions> for QueryContext {
    fn from(extensions: Extensions) -> Self {
        Self::from_extensions(extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_derives_new_context() {
        let base = QueryContext::new();
        let first = base.with_field_query(FieldQueryDef::leaf("a"));
        let second = first.with_field_query(FieldQueryDef::leaf("b"));

        assert!(base.field_query().is_none());
        assert_eq!(first.field_query(), Some(&FieldQueryDef::leaf("a")));
        assert_eq!(second.field_query(), Some(&FieldQueryDef::leaf("b")));
    }

    #[test]
    fn other_values_do_not_collide() {
        #[derive(Clone, Debug, PartialEq)]
        struct RequestId(u64);

        let ctx = QueryContext::new()
            .with_value(RequestId(7))
            .with_field_query(FieldQueryDef::leaf("id"))
            .with_value(Arc::new(FieldQueryDef::leaf("decoy")));

        assert_eq!(ctx.get::<RequestId>(), Some(&RequestId(7)));
        assert_eq!(ctx.field_query(), Some(&FieldQueryDef::leaf("id")));
    }

    #[test]
    fn round_trips_through_request_extensions() {
        let ctx = QueryContext::new().with_field_query(FieldQueryDef::leaf("id"));
        let mut request = http::Request::new(());
        *request.extensions_mut() = ctx.into_extensions();

        let lifted = QueryContext::from(request.extensions().clone());
        assert!(lifted.field_query().is_some_and(FieldQueryDef::is_leaf));
    }
}
