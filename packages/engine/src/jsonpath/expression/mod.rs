//! Compiled path expressions
//!
//! - `core`: the `Path` struct, its accessors and string forms
//! - `evaluation`: applying a path to decoded values and raw bytes

pub mod core;
pub mod evaluation;

pub use core::{Path, PathString};
