//! Path expression scanning
//!
//! Single pass, left to right over the characters of the expression:
//!
//! - `core`: main loop, bare segments and the shared scanning state
//! - `dot`: `.name` child selectors and `..name` recursive selectors
//! - `bracket`: `[N]` indices and `[*]` wildcards

mod bracket;
mod core;
mod dot;

pub use core::SelectorParser;
