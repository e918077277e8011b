//! Run-time kinds of dynamic values, used in error messages.

use std::fmt;

/// Kind of a resolved dynamic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
    /// Host structure, carrying its type name
    Structured(&'static str),
}

impl ValueKind {
    /// Kinds that expose named children (mapping keys or structure fields)
    #[inline]
    #[must_use]
    pub fn has_fields(self) -> bool {
        matches!(self, ValueKind::Mapping | ValueKind::Structured(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => f.write_str("null"),
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Number => f.write_str("number"),
            ValueKind::String => f.write_str("string"),
            ValueKind::Sequence => f.write_str("sequence"),
            ValueKind::Mapping => f.write_str("mapping"),
            ValueKind::Structured(name) => write!(f, "struct {name}"),
        }
    }
}
