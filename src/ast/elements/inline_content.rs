//! Inline content of a paragraph

use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Comment;
use super::super::traits::{CommentNode, InlineNode};
use super::html_tag::{HtmlEndTag, HtmlStartTag};
use super::inline_command::InlineCommand;
use super::text::Text;

/// Any node that can appear inside a [`Paragraph`](super::Paragraph).
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent<'a> {
    Text(Text<'a>),
    InlineCommand(InlineCommand<'a>),
    HtmlStartTag(HtmlStartTag<'a>),
    HtmlEndTag(HtmlEndTag<'a>),
}

impl<'a> InlineContent<'a> {
    /// Borrow as a generic node reference.
    pub fn as_comment<'n>(&'n self) -> Comment<'n, 'a> {
        Comment::from(self)
    }

    fn as_inline(&self) -> &dyn InlineNode<'a> {
        match self {
            InlineContent::Text(text) => text,
            InlineContent::InlineCommand(command) => command,
            InlineContent::HtmlStartTag(tag) => tag,
            InlineContent::HtmlEndTag(tag) => tag,
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.as_inline().location()
    }

    pub fn source_range(&self) -> SourceRange {
        self.as_inline().source_range()
    }

    pub fn has_trailing_newline(&self) -> bool {
        self.as_inline().has_trailing_newline()
    }

    pub fn as_text(&self) -> Option<&Text<'a>> {
        match self {
            InlineContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_inline_command(&self) -> Option<&InlineCommand<'a>> {
        match self {
            InlineContent::InlineCommand(command) => Some(command),
            _ => None,
        }
    }

    pub fn as_html_start_tag(&self) -> Option<&HtmlStartTag<'a>> {
        match self {
            InlineContent::HtmlStartTag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_html_end_tag(&self) -> Option<&HtmlEndTag<'a>> {
        match self {
            InlineContent::HtmlEndTag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl<'a> From<Text<'a>> for InlineContent<'a> {
    fn from(text: Text<'a>) -> Self {
        InlineContent::Text(text)
    }
}

impl<'a> From<InlineCommand<'a>> for InlineContent<'a> {
    fn from(command: InlineCommand<'a>) -> Self {
        InlineContent::InlineCommand(command)
    }
}

impl<'a> From<HtmlStartTag<'a>> for InlineContent<'a> {
    fn from(tag: HtmlStartTag<'a>) -> Self {
        InlineContent::HtmlStartTag(tag)
    }
}

impl<'a> From<HtmlEndTag<'a>> for InlineContent<'a> {
    fn from(tag: HtmlEndTag<'a>) -> Self {
        InlineContent::HtmlEndTag(tag)
    }
}
