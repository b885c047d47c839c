//! Block commands
//!
//! A block command is a command like `\brief` or `\returns` followed by word-like arguments
//! and one paragraph argument. The same shape is the base of the parameter, template
//! parameter and verbatim commands. The shared part is a [`BlockCommandBase`]; every member
//! of the block command family exposes it through `command()`, and
//! [`Comment::as_block_command`](super::super::node::Comment::as_block_command) hands it out
//! as the family view.
//!
//! The base is not a node by itself. It records the concrete kind of the node that owns it,
//! but traversal and visiting always go through the owning node.
//!
//! The node is built in steps: first the command name, then its arguments, then its
//! paragraph. Each step may move the end of the range forward.

use super::super::commands::{CommandId, CommandTraits};
use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::argument::Argument;
use super::paragraph::Paragraph;

/// Name, arguments and paragraph shared by every block command family member.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCommandBase<'a> {
    kind: CommentKind,
    range: SourceRange,
    command_id: CommandId,
    args: Vec<Argument<'a>>,
    paragraph: Option<Paragraph<'a>>,
}

impl<'a> BlockCommandBase<'a> {
    fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        Self {
            kind: CommentKind::BlockCommand,
            range: SourceRange::new(begin, end),
            command_id,
            args: Vec::new(),
            paragraph: None,
        }
    }

    /// Kind of the node that owns this base.
    pub fn kind(&self) -> CommentKind {
        self.kind
    }

    /// Location of the command name, one past the `\` or `@` marker.
    pub fn location(&self) -> SourceLocation {
        self.command_name_begin_loc()
    }

    /// Range of the owning node.
    pub fn source_range(&self) -> SourceRange {
        self.range
    }

    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    /// Canonical name of the command, looked up in `traits`.
    pub fn command_name<'t>(&self, traits: &'t dyn CommandTraits) -> &'t str {
        traits.command_name(self.command_id)
    }

    pub fn command_name_begin_loc(&self) -> SourceLocation {
        self.range.begin.with_offset(1)
    }

    /// Range of the command name without its marker.
    pub fn command_name_range(&self, traits: &dyn CommandTraits) -> SourceRange {
        let begin = self.command_name_begin_loc();
        SourceRange::new(begin, begin.advanced_by(self.command_name(traits).len()))
    }

    pub fn args(&self) -> &[Argument<'a>] {
        &self.args
    }

    pub fn num_args(&self) -> usize {
        self.args.len()
    }

    /// # Panics
    ///
    /// Panics if `index >= num_args()`.
    pub fn arg_text(&self, index: usize) -> &'a str {
        self.args[index].text
    }

    /// # Panics
    ///
    /// Panics if `index >= num_args()`.
    pub fn arg_range(&self, index: usize) -> SourceRange {
        self.args[index].range
    }

    /// The paragraph argument, if the parser attached one.
    pub fn paragraph(&self) -> Option<&Paragraph<'a>> {
        self.paragraph.as_ref()
    }

    /// True if there is a paragraph and it holds more than whitespace.
    pub fn has_non_whitespace_paragraph(&self) -> bool {
        self.paragraph
            .as_ref()
            .is_some_and(|paragraph| !paragraph.is_whitespace())
    }

    fn set_args(&mut self, args: Vec<Argument<'a>>) {
        if let Some(last) = args.last() {
            self.extend_to(last.range.end);
        }
        self.args = args;
    }

    fn set_paragraph(&mut self, paragraph: Paragraph<'a>) {
        assert!(
            self.paragraph.is_none(),
            "paragraph of a block command is set only once"
        );
        self.extend_to(paragraph.source_range().end);
        self.paragraph = Some(paragraph);
    }

    fn extend_to(&mut self, end: SourceLocation) {
        if end.is_valid() {
            self.range.end = end;
        }
    }

    /// Like `extend_to`, but never moves the end backwards.
    pub(crate) fn stretch_to(&mut self, end: SourceLocation) {
        if end.is_valid() && (!self.range.end.is_valid() || end > self.range.end) {
            self.range.end = end;
        }
    }

    pub(crate) fn paragraph_children<'n>(&'n self) -> Children<'n, 'a>
    where
        'a: 'n,
    {
        Children::paragraph(self.paragraph.as_ref())
    }

    pub(crate) fn accept_paragraph(&self, visitor: &mut dyn Visitor<'a>) {
        if let Some(paragraph) = &self.paragraph {
            paragraph.accept(visitor);
        }
    }
}

/// A plain block command node such as `\brief` or `\returns`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCommand<'a> {
    command: BlockCommandBase<'a>,
}

impl<'a> BlockCommand<'a> {
    /// `begin` is the location of the `\` or `@` marker.
    pub fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        Self {
            command: BlockCommandBase::new(begin, end, command_id),
        }
    }

    pub fn with_args(mut self, args: Vec<Argument<'a>>) -> Self {
        self.command.set_args(args);
        self
    }

    /// # Panics
    ///
    /// Panics if the paragraph was already set.
    pub fn with_paragraph(mut self, paragraph: Paragraph<'a>) -> Self {
        self.command.set_paragraph(paragraph);
        self
    }

    pub fn command(&self) -> &BlockCommandBase<'a> {
        &self.command
    }

    /// Hand the base over to a specialized command of `kind`.
    pub(crate) fn into_base(self, kind: CommentKind) -> BlockCommandBase<'a> {
        debug_assert!(kind.is_block_command(), "{kind} is not a block command");
        BlockCommandBase { kind, ..self.command }
    }
}

impl<'a> CommentNode<'a> for BlockCommand<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::BlockCommand
    }

    fn location(&self) -> SourceLocation {
        self.command.location()
    }

    fn source_range(&self) -> SourceRange {
        self.command.source_range()
    }

    fn children<'n>(&'n self) -> Children<'n, 'a>
    where
        'a: 'n,
    {
        self.command.paragraph_children()
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_block_command(self);
        self.command.accept_paragraph(visitor);
        visitor.leave_block_command(self);
    }
}
