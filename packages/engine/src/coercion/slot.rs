//! Destination slot trait

use crate::jsonpath::error::{JsonPathResult, type_error};
use crate::value::DynamicValue;

/// A statically typed destination that dynamic values are coerced into
pub trait Slot {
    /// Coerce `src` into this destination.
    ///
    /// Mutates only `self`; the source is never modified.
    ///
    /// # Errors
    ///
    /// Returns a `Type` error when the source kind cannot be represented by
    /// the destination.
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()>;

    /// Name of the destination kind used in error messages
    fn slot_kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Coerce `src` into `dest`
///
/// # Errors
///
/// See [`Slot::assign`].
#[inline]
pub fn assign<D: Slot + ?Sized>(src: DynamicValue<'_>, dest: &mut D) -> JsonPathResult<()> {
    dest.assign(src)
}

/// Shared rejection used by every implementation
#[inline]
pub(super) fn reject<D: Slot + ?Sized>(src: DynamicValue<'_>, dest: &D) -> JsonPathResult<()> {
    Err(type_error(src.kind(), dest.slot_kind()))
}
