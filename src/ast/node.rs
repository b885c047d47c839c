//! Borrowed node references and child enumeration
//!
//! [`Comment`] is the abstract "any node" of the tree: a copyable reference with one case per
//! concrete variant. Generic tooling walks the tree through it, and the `as_*` helpers are the
//! only downcasts there are. Family checks (`is_inline_content`, `is_block_command`, ...) go
//! through the kind ranges in [`kind`](super::kind).

use super::elements::{
    BlockCommand, BlockCommandBase, BlockContent, FullComment, HtmlEndTag, HtmlStartTag,
    InlineCommand, InlineContent, ParamCommand, Paragraph, TParamCommand, Text, VerbatimBlock,
    VerbatimBlockLine, VerbatimLine,
};
use super::kind::CommentKind;
use super::location::{SourceLocation, SourceRange};
use super::traits::{CommentNode, HtmlTag, InlineNode, Visitor};
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Reference to any node in a comment tree.
#[derive(Clone, Copy)]
pub enum Comment<'n, 'a: 'n> {
    Text(&'n Text<'a>),
    InlineCommand(&'n InlineCommand<'a>),
    HtmlStartTag(&'n HtmlStartTag<'a>),
    HtmlEndTag(&'n HtmlEndTag<'a>),
    Paragraph(&'n Paragraph<'a>),
    BlockCommand(&'n BlockCommand<'a>),
    ParamCommand(&'n ParamCommand<'a>),
    TParamCommand(&'n TParamCommand<'a>),
    VerbatimBlock(&'n VerbatimBlock<'a>),
    VerbatimLine(&'n VerbatimLine<'a>),
    VerbatimBlockLine(&'n VerbatimBlockLine<'a>),
    FullComment(&'n FullComment<'a>),
}

macro_rules! each_node {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            Comment::Text($node) => $body,
            Comment::InlineCommand($node) => $body,
            Comment::HtmlStartTag($node) => $body,
            Comment::HtmlEndTag($node) => $body,
            Comment::Paragraph($node) => $body,
            Comment::BlockCommand($node) => $body,
            Comment::ParamCommand($node) => $body,
            Comment::TParamCommand($node) => $body,
            Comment::VerbatimBlock($node) => $body,
            Comment::VerbatimLine($node) => $body,
            Comment::VerbatimBlockLine($node) => $body,
            Comment::FullComment($node) => $body,
        }
    };
}

impl<'n, 'a: 'n> Comment<'n, 'a> {
    pub fn kind(self) -> CommentKind {
        each_node!(self, node => node.kind())
    }

    pub fn location(self) -> SourceLocation {
        each_node!(self, node => node.location())
    }

    pub fn source_range(self) -> SourceRange {
        each_node!(self, node => node.source_range())
    }

    pub fn kind_name(self) -> &'static str {
        self.kind().name()
    }

    /// Direct children, borrowed for as long as the node itself.
    pub fn children(self) -> Children<'n, 'a> {
        each_node!(self, node => node.children())
    }

    pub fn child_count(self) -> usize {
        self.children().len()
    }

    pub fn accept(self, visitor: &mut dyn Visitor<'a>) {
        each_node!(self, node => node.accept(visitor))
    }

    pub fn is_inline_content(self) -> bool {
        self.kind().is_inline_content()
    }

    pub fn is_html_tag(self) -> bool {
        self.kind().is_html_tag()
    }

    pub fn is_block_content(self) -> bool {
        self.kind().is_block_content()
    }

    pub fn is_block_command(self) -> bool {
        self.kind().is_block_command()
    }

    /// View of any inline content node.
    pub fn as_inline(self) -> Option<&'n dyn InlineNode<'a>> {
        match self {
            Comment::Text(text) => Some(text),
            Comment::InlineCommand(command) => Some(command),
            Comment::HtmlStartTag(tag) => Some(tag),
            Comment::HtmlEndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// View of either kind of HTML tag.
    pub fn as_html_tag(self) -> Option<&'n dyn HtmlTag<'a>> {
        match self {
            Comment::HtmlStartTag(tag) => Some(tag),
            Comment::HtmlEndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The shared block command part of any node in the block command family.
    ///
    /// The view keeps the kind of the node it came from. Traverse and visit through `self`.
    pub fn as_block_command(self) -> Option<&'n BlockCommandBase<'a>> {
        match self {
            Comment::BlockCommand(command) => Some(command.command()),
            Comment::ParamCommand(param) => Some(param.command()),
            Comment::TParamCommand(tparam) => Some(tparam.command()),
            Comment::VerbatimBlock(block) => Some(block.command()),
            Comment::VerbatimLine(line) => Some(line.command()),
            _ => None,
        }
    }

    pub fn as_text(self) -> Option<&'n Text<'a>> {
        match self {
            Comment::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_inline_command(self) -> Option<&'n InlineCommand<'a>> {
        match self {
            Comment::InlineCommand(command) => Some(command),
            _ => None,
        }
    }

    pub fn as_html_start_tag(self) -> Option<&'n HtmlStartTag<'a>> {
        match self {
            Comment::HtmlStartTag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_html_end_tag(self) -> Option<&'n HtmlEndTag<'a>> {
        match self {
            Comment::HtmlEndTag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_paragraph(self) -> Option<&'n Paragraph<'a>> {
        match self {
            Comment::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_param_command(self) -> Option<&'n ParamCommand<'a>> {
        match self {
            Comment::ParamCommand(param) => Some(param),
            _ => None,
        }
    }

    pub fn as_tparam_command(self) -> Option<&'n TParamCommand<'a>> {
        match self {
            Comment::TParamCommand(tparam) => Some(tparam),
            _ => None,
        }
    }

    pub fn as_verbatim_block(self) -> Option<&'n VerbatimBlock<'a>> {
        match self {
            Comment::VerbatimBlock(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_verbatim_line(self) -> Option<&'n VerbatimLine<'a>> {
        match self {
            Comment::VerbatimLine(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_verbatim_block_line(self) -> Option<&'n VerbatimBlockLine<'a>> {
        match self {
            Comment::VerbatimBlockLine(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_full_comment(self) -> Option<&'n FullComment<'a>> {
        match self {
            Comment::FullComment(full) => Some(full),
            _ => None,
        }
    }
}

impl<'n, 'a: 'n> CommentNode<'a> for Comment<'n, 'a> {
    fn kind(&self) -> CommentKind {
        Comment::kind(*self)
    }

    fn location(&self) -> SourceLocation {
        Comment::location(*self)
    }

    fn source_range(&self) -> SourceRange {
        Comment::source_range(*self)
    }

    fn children<'m>(&'m self) -> Children<'m, 'a>
    where
        'a: 'm,
    {
        Comment::children(*self)
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        Comment::accept(*self, visitor)
    }
}

impl fmt::Debug for Comment<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind_name(), self.source_range())
    }
}

impl<'n, 'a: 'n> From<&'n InlineContent<'a>> for Comment<'n, 'a> {
    fn from(content: &'n InlineContent<'a>) -> Self {
        match content {
            InlineContent::Text(text) => Comment::Text(text),
            InlineContent::InlineCommand(command) => Comment::InlineCommand(command),
            InlineContent::HtmlStartTag(tag) => Comment::HtmlStartTag(tag),
            InlineContent::HtmlEndTag(tag) => Comment::HtmlEndTag(tag),
        }
    }
}

impl<'n, 'a: 'n> From<&'n BlockContent<'a>> for Comment<'n, 'a> {
    fn from(content: &'n BlockContent<'a>) -> Self {
        match content {
            BlockContent::Paragraph(paragraph) => Comment::Paragraph(paragraph),
            BlockContent::BlockCommand(command) => Comment::BlockCommand(command),
            BlockContent::ParamCommand(param) => Comment::ParamCommand(param),
            BlockContent::TParamCommand(tparam) => Comment::TParamCommand(tparam),
            BlockContent::VerbatimBlock(block) => Comment::VerbatimBlock(block),
            BlockContent::VerbatimLine(line) => Comment::VerbatimLine(line),
        }
    }
}

/// Lazy iterator over the direct children of a node.
///
/// Cloning it restarts enumeration from the current point; `children()` can be
/// called again at any time for a fresh pass.
#[derive(Clone)]
pub struct Children<'n, 'a: 'n> {
    inner: ChildrenInner<'n, 'a>,
}

#[derive(Clone)]
enum ChildrenInner<'n, 'a: 'n> {
    Empty,
    Inline(slice::Iter<'n, InlineContent<'a>>),
    Paragraph(Option<&'n Paragraph<'a>>),
    Lines(slice::Iter<'n, VerbatimBlockLine<'a>>),
    Blocks(slice::Iter<'n, BlockContent<'a>>),
}

impl<'n, 'a: 'n> Children<'n, 'a> {
    pub(crate) fn empty() -> Self {
        Self {
            inner: ChildrenInner::Empty,
        }
    }

    pub(crate) fn inline(content: &'n [InlineContent<'a>]) -> Self {
        Self {
            inner: ChildrenInner::Inline(content.iter()),
        }
    }

    pub(crate) fn paragraph(paragraph: Option<&'n Paragraph<'a>>) -> Self {
        Self {
            inner: ChildrenInner::Paragraph(paragraph),
        }
    }

    pub(crate) fn lines(lines: &'n [VerbatimBlockLine<'a>]) -> Self {
        Self {
            inner: ChildrenInner::Lines(lines.iter()),
        }
    }

    pub(crate) fn blocks(blocks: &'n [BlockContent<'a>]) -> Self {
        Self {
            inner: ChildrenInner::Blocks(blocks.iter()),
        }
    }
}

impl<'n, 'a: 'n> Iterator for Children<'n, 'a> {
    type Item = Comment<'n, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Empty => None,
            ChildrenInner::Inline(iter) => iter.next().map(Comment::from),
            ChildrenInner::Paragraph(paragraph) => paragraph.take().map(Comment::Paragraph),
            ChildrenInner::Lines(iter) => iter.next().map(Comment::VerbatimBlockLine),
            ChildrenInner::Blocks(iter) => iter.next().map(Comment::from),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            ChildrenInner::Empty => 0,
            ChildrenInner::Inline(iter) => iter.len(),
            ChildrenInner::Paragraph(paragraph) => usize::from(paragraph.is_some()),
            ChildrenInner::Lines(iter) => iter.len(),
            ChildrenInner::Blocks(iter) => iter.len(),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Children<'_, '_> {}

impl FusedIterator for Children<'_, '_> {}

/// Depth-first pre-order traversal of `root` and everything below it.
pub fn descendants<'n, 'a: 'n>(root: Comment<'n, 'a>) -> impl Iterator<Item = Comment<'n, 'a>> {
    let mut stack = vec![root];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
        Some(node)
    })
}
