//! Bracket notation selector parsing
//!
//! Handles `[N]` sequence indices and the `[*]` wildcard.

use super::core::SelectorParser;
use crate::jsonpath::error::{JsonPathError, JsonPathResult, invalid_expression_error};

impl SelectorParser<'_> {
    /// Parse the segment starting at the `[` at `cursor`.
    ///
    /// Returns the position just past the closing `]`.
    pub(super) fn parse_bracket(&mut self, cursor: usize) -> JsonPathResult<usize> {
        let length = self.chars.len();
        let open = cursor + 1;
        let Some(&first) = self.chars.get(open) else {
            return Err(JsonPathError::unexpected_end(self.input, open));
        };

        match first {
            '*' => {
                self.expect_close(open + 1)?;
                self.builder.index_all();
                Ok(open + 2)
            }
            '0'..='9' => {
                let mut end = open;
                while end < length && self.chars[end].is_ascii_digit() {
                    end += 1;
                }
                self.expect_close(end)?;
                let digits: String = self.chars[open..end].iter().collect();
                let index = digits.parse::<usize>().map_err(|_| {
                    invalid_expression_error(
                        self.input,
                        format!("index {digits} out of range"),
                        Some(open),
                    )
                })?;
                self.builder.index(index);
                Ok(end + 1)
            }
            other => Err(JsonPathError::unexpected_character(self.input, other, open)),
        }
    }

    fn expect_close(&self, position: usize) -> JsonPathResult<()> {
        match self.chars.get(position) {
            Some(']') => Ok(()),
            Some(&other) => Err(JsonPathError::unexpected_character(
                self.input, other, position,
            )),
            None => Err(JsonPathError::unexpected_end(self.input, position)),
        }
    }
}
