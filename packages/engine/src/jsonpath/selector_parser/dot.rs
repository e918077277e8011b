//! Dot notation selector parsing
//!
//! Handles `.name` child selectors and `..name` recursive descent.

use super::core::SelectorParser;
use crate::jsonpath::error::{JsonPathError, JsonPathResult, invalid_expression_error};

impl SelectorParser<'_> {
    /// Parse the segment starting at the `.` at `cursor`.
    ///
    /// Returns the position of the delimiter that ended the segment.
    pub(super) fn parse_dot(&mut self, cursor: usize) -> JsonPathResult<usize> {
        if self.chars.get(cursor + 1) == Some(&'.') {
            return self.parse_recursive(cursor);
        }

        let start = cursor + 1;
        let input = self.input;
        let (name, end) = self.scan_name(start, |c, pos| {
            JsonPathError::invalid_expression(
                input,
                format!("reserved character '{c}' after '.'"),
                Some(pos),
            )
        })?;
        if name.is_empty() {
            return Err(invalid_expression_error(
                input,
                "no child selector found",
                Some(start),
            ));
        }
        self.builder.child(&name);
        Ok(end)
    }

    fn parse_recursive(&mut self, cursor: usize) -> JsonPathResult<usize> {
        let start = cursor + 2;
        let input = self.input;
        let (name, end) = self.scan_name(start, |c, pos| {
            JsonPathError::invalid_expression(
                input,
                format!("reserved character '{c}' after '..'"),
                Some(pos),
            )
        })?;
        if name.is_empty() {
            return Err(invalid_expression_error(
                input,
                "no recursive selector found",
                Some(start),
            ));
        }
        self.builder.recursive(&name);
        Ok(end)
    }
}
