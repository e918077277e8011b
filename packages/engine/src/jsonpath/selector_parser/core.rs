//! Core selector parser structure and main scanning loop

use crate::jsonpath::{
    ast::{PathNode, is_reserved},
    builder::PathBuilder,
    error::{JsonPathResult, invalid_expression_error},
};

/// Scanner turning a path expression into a node chain
pub struct SelectorParser<'a> {
    pub(super) input: &'a str,
    pub(super) chars: Vec<char>,
    pub(super) builder: PathBuilder,
}

impl<'a> SelectorParser<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            builder: PathBuilder::new(),
        }
    }

    /// Parse the whole expression.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed segment, naming the offending character
    /// and its 0-based position.
    pub fn parse(mut self) -> JsonPathResult<PathNode> {
        let length = self.chars.len();
        let mut cursor = 0;
        let mut start = 0;

        while cursor < length {
            match self.chars[cursor] {
                '.' => {
                    self.flush_bare(start, cursor);
                    cursor = self.parse_dot(cursor)?;
                    start = cursor;
                }
                '[' => {
                    self.flush_bare(start, cursor);
                    cursor = self.parse_bracket(cursor)?;
                    start = cursor;
                }
                _ => cursor += 1,
            }
        }
        self.flush_bare(start, length);

        self.builder.build().ok_or_else(|| {
            invalid_expression_error(self.input, "no path segment found", Some(0))
        })
    }

    /// Emit the characters in `start..end` as a plain child selector
    fn flush_bare(&mut self, start: usize, end: usize) {
        if start < end {
            let name: String = self.chars[start..end].iter().collect();
            self.builder.child(&name);
        }
    }

    /// Collect `start..` up to the next `.`, `[` or end of input.
    ///
    /// Returns the name and the position of the delimiter. A reserved
    /// character is reported through `reserved`.
    pub(super) fn scan_name(
        &self,
        start: usize,
        reserved: impl Fn(char, usize) -> crate::jsonpath::error::JsonPathError,
    ) -> JsonPathResult<(String, usize)> {
        let mut cursor = start;
        while cursor < self.chars.len() {
            match self.chars[cursor] {
                c if is_reserved(c) => return Err(reserved(c, cursor)),
                '.' | '[' => break,
                _ => cursor += 1,
            }
        }
        Ok((self.chars[start..cursor].iter().collect(), cursor))
    }
}
