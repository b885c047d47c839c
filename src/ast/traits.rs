//! Comment traits - common interfaces for uniform node access
//!
//! Every concrete node implements [`CommentNode`], which is enough to write a printer or a
//! checker once against any node. [`Visitor`] is the push-style alternative: `accept` calls
//! `visit_*` on the way down and `leave_*` on the way back up for nodes with children.

use super::elements::{
    BlockCommand, FullComment, HtmlEndTag, HtmlStartTag, InlineCommand, ParamCommand, Paragraph,
    TParamCommand, Text, VerbatimBlock, VerbatimBlockLine, VerbatimLine,
};
use super::kind::CommentKind;
use super::location::{SourceLocation, SourceRange};
use super::node::Children;

/// Visitor trait for traversing a comment tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct ParamNames<'a>(Vec<&'a str>);
///
/// impl<'a> Visitor<'a> for ParamNames<'a> {
///     fn visit_param_command(&mut self, param: &ParamCommand<'a>) {
///         if param.has_param_name() {
///             self.0.push(param.param_name());
///         }
///     }
/// }
/// ```
pub trait Visitor<'a> {
    fn visit_full_comment(&mut self, _full: &FullComment<'a>) {}
    fn leave_full_comment(&mut self, _full: &FullComment<'a>) {}

    fn visit_paragraph(&mut self, _paragraph: &Paragraph<'a>) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph<'a>) {}

    fn visit_block_command(&mut self, _command: &BlockCommand<'a>) {}
    fn leave_block_command(&mut self, _command: &BlockCommand<'a>) {}

    fn visit_param_command(&mut self, _param: &ParamCommand<'a>) {}
    fn leave_param_command(&mut self, _param: &ParamCommand<'a>) {}

    fn visit_tparam_command(&mut self, _tparam: &TParamCommand<'a>) {}
    fn leave_tparam_command(&mut self, _tparam: &TParamCommand<'a>) {}

    fn visit_verbatim_block(&mut self, _block: &VerbatimBlock<'a>) {}
    fn leave_verbatim_block(&mut self, _block: &VerbatimBlock<'a>) {}

    // Leaves
    fn visit_text(&mut self, _text: &Text<'a>) {}
    fn visit_inline_command(&mut self, _command: &InlineCommand<'a>) {}
    fn visit_html_start_tag(&mut self, _tag: &HtmlStartTag<'a>) {}
    fn visit_html_end_tag(&mut self, _tag: &HtmlEndTag<'a>) {}
    fn visit_verbatim_block_line(&mut self, _line: &VerbatimBlockLine<'a>) {}
    fn visit_verbatim_line(&mut self, _line: &VerbatimLine<'a>) {}
}

/// Common interface for all comment nodes
pub trait CommentNode<'a> {
    fn kind(&self) -> CommentKind;

    /// Preferred location to show a caret at.
    fn location(&self) -> SourceLocation;

    fn source_range(&self) -> SourceRange;

    fn begin(&self) -> SourceLocation {
        self.source_range().begin
    }

    fn end(&self) -> SourceLocation {
        self.source_range().end
    }

    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Direct children in source order.
    fn children<'n>(&'n self) -> Children<'n, 'a>
    where
        'a: 'n;

    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor<'a>);
}

/// Content that is laid out inside a paragraph.
pub trait InlineNode<'a>: CommentNode<'a> {
    /// True if a newline follows this node. Newlines have no node of their own.
    fn has_trailing_newline(&self) -> bool;
}

/// Opening and closing HTML tags. Tags are inline content whatever their HTML meaning,
/// and start tags are never matched with end tags.
pub trait HtmlTag<'a>: InlineNode<'a> {
    fn tag_name(&self) -> &'a str;

    /// Range of the tag name. The location of a tag node is the start of its name.
    fn tag_name_range(&self) -> SourceRange {
        let location = self.location();
        SourceRange::new(location, location.advanced_by(self.tag_name().len()))
    }
}
