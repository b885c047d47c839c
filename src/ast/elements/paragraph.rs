//! Paragraph element
//!
//! A paragraph is a run of inline content. It is the only block that holds inline nodes
//! directly; block commands reach inline content through their paragraph argument.
//!
//! The range of a paragraph spans from the start of its first child to the end of its last
//! one. An empty paragraph has no range at all and counts as whitespace.

use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::inline_content::InlineContent;
use once_cell::unsync::OnceCell;

#[derive(Debug, Clone)]
pub struct Paragraph<'a> {
    range: SourceRange,
    content: Vec<InlineContent<'a>>,
    is_whitespace: OnceCell<bool>,
}

impl<'a> Paragraph<'a> {
    /// The range spans the valid ranges of `content`. An empty paragraph has no range and
    /// is whitespace without a scan.
    pub fn new(content: Vec<InlineContent<'a>>) -> Self {
        let range = SourceRange::bounding_box(content.iter().map(InlineContent::source_range))
            .unwrap_or_default();
        let is_whitespace = if content.is_empty() {
            OnceCell::with_value(true)
        } else {
            OnceCell::new()
        };
        Self {
            range,
            content,
            is_whitespace,
        }
    }

    pub fn content(&self) -> &[InlineContent<'a>] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True if the paragraph holds only whitespace text.
    ///
    /// Any inline command or HTML tag makes the paragraph non-whitespace.
    pub fn is_whitespace(&self) -> bool {
        *self.is_whitespace.get_or_init(|| self.is_whitespace_uncached())
    }

    fn is_whitespace_uncached(&self) -> bool {
        #[cfg(test)]
        super::super::probe::hit(super::super::probe::PARAGRAPH_WHITESPACE_SCAN);
        self.content.iter().all(|item| match item {
            InlineContent::Text(text) => text.is_whitespace(),
            _ => false,
        })
    }
}

impl<'a> CommentNode<'a> for Paragraph<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::Paragraph
    }

    fn location(&self) -> SourceLocation {
        self.range.begin
    }

    fn source_range(&self) -> SourceRange {
        self.range
    }

    fn children<'n>(&'n self) -> Children<'n, 'a>
    where
        'a: 'n,
    {
        Children::inline(&self.content)
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_paragraph(self);
        for item in &self.content {
            item.as_comment().accept(visitor);
        }
        visitor.leave_paragraph(self);
    }
}

impl PartialEq for Paragraph<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range && self.content == other.content
    }
}
