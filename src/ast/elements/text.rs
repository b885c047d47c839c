//! Plain text
//!
//! A text node is a borrowed span of comment text with no markup in it. Whether the span is
//! whitespace-only is asked for every paragraph during rendering, so the answer is computed
//! on first use and cached on the node.

use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, InlineNode, Visitor};
use once_cell::unsync::OnceCell;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Text<'a> {
    range: SourceRange,
    location: SourceLocation,
    text: &'a str,
    has_trailing_newline: bool,
    is_whitespace: OnceCell<bool>,
}

impl<'a> Text<'a> {
    pub fn new(begin: SourceLocation, end: SourceLocation, text: &'a str) -> Self {
        Self {
            range: SourceRange::new(begin, end),
            location: begin,
            text,
            has_trailing_newline: false,
            is_whitespace: OnceCell::new(),
        }
    }

    /// Mark the text as the last thing on its line.
    pub fn with_trailing_newline(mut self) -> Self {
        self.has_trailing_newline = true;
        self
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// True if the text holds nothing but blanks, tabs and line breaks.
    pub fn is_whitespace(&self) -> bool {
        *self.is_whitespace.get_or_init(|| is_whitespace_uncached(self.text))
    }
}

/// Characters the comment lexer treats as horizontal or vertical whitespace.
pub(crate) fn is_comment_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_whitespace_uncached(text: &str) -> bool {
    #[cfg(test)]
    super::super::probe::hit(super::super::probe::TEXT_WHITESPACE_SCAN);
    text.chars().all(is_comment_whitespace)
}

impl<'a> CommentNode<'a> for Text<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::Text
    }

    fn location(&self) -> SourceLocation {
        self.location
    }

    fn source_range(&self) -> SourceRange {
        self.range
    }

    fn children<'n>(&'n self) -> Children<'n, 'a>
    where
        'a: 'n,
    {
        Children::empty()
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_text(self);
    }
}

impl<'a> InlineNode<'a> for Text<'a> {
    fn has_trailing_newline(&self) -> bool {
        self.has_trailing_newline
    }
}

impl PartialEq for Text<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
            && self.text == other.text
            && self.has_trailing_newline == other.has_trailing_newline
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}')", self.text)
    }
}
