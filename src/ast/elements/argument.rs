//! Word-like command arguments

use super::super::location::SourceRange;

/// One word-like argument of an inline or block command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'a> {
    pub range: SourceRange,
    pub text: &'a str,
}

impl<'a> Argument<'a> {
    pub fn new(range: SourceRange, text: &'a str) -> Self {
        Self { range, text }
    }
}
