//! Value coercion into statically typed destinations
//!
//! A [`Slot`] is a typed, writable destination. Matched values are handed to
//! [`Slot::assign`], which converts from the dynamic kind of the source or
//! rejects the combination with a type error.
//!
//! Growable sequences append: every `assign` on a `Vec<T>` coerces the source
//! into a fresh `T` and pushes it, so fan-out segments can accumulate many
//! matches into one collection.

mod collections;
mod scalars;
mod slot;

pub use slot::{Slot, assign};
