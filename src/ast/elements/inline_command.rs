//! Inline commands
//!
//! An inline command such as `\b word` or `\c code` marks up its word-like arguments. The
//! node keeps the command ID and a render style; the canonical name comes from the command
//! registry on demand.

use super::super::commands::{CommandId, CommandTraits};
use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, InlineNode, Visitor};
use super::argument::Argument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the arguments of an inline command are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderKind {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

impl RenderKind {
    /// Lowercase name used in dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            RenderKind::Normal => "normal",
            RenderKind::Bold => "bold",
            RenderKind::Monospaced => "monospaced",
            RenderKind::Emphasized => "emphasized",
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineCommand<'a> {
    range: SourceRange,
    location: SourceLocation,
    command_id: CommandId,
    render_kind: RenderKind,
    args: Vec<Argument<'a>>,
    has_trailing_newline: bool,
}

impl<'a> InlineCommand<'a> {
    /// `begin` is the first character of the command name, one past the `\` or `@` marker.
    pub fn new(
        begin: SourceLocation,
        end: SourceLocation,
        command_id: CommandId,
        render_kind: RenderKind,
        args: Vec<Argument<'a>>,
    ) -> Self {
        Self {
            range: SourceRange::new(begin, end),
            location: begin,
            command_id,
            render_kind,
            args,
            has_trailing_newline: false,
        }
    }

    pub fn with_trailing_newline(mut self) -> Self {
        self.has_trailing_newline = true;
        self
    }

    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    pub fn command_name<'t>(&self, traits: &'t dyn CommandTraits) -> &'t str {
        traits.command_name(self.command_id)
    }

    /// Range of the command including its marker character.
    pub fn command_name_range(&self) -> SourceRange {
        SourceRange::new(self.range.begin.with_offset(-1), self.range.end)
    }

    /// How the parser decided the arguments should be rendered.
    pub fn render_kind(&self) -> RenderKind {
        self.render_kind
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
}

impl<'a> CommentNode<'a> for InlineCommand<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::InlineCommand
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
        visitor.visit_inline_command(self);
    }
}

impl<'a> InlineNode<'a> for InlineCommand<'a> {
    fn has_trailing_newline(&self) -> bool {
        self.has_trailing_newline
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::commands::CommandTable;
    use super::*;

    #[test]
    fn test_arguments_and_name() {
        let mut table = CommandTable::new();
        let bold = table.register("b", 1);
        // "\b word"
        let command = InlineCommand::new(
            SourceLocation::new(1),
            SourceLocation::new(7),
            bold,
            RenderKind::Bold,
            vec![Argument::new(SourceRange::from_offsets(3, 7), "word")],
        );

        assert_eq!(command.command_name(&table), "b");
        assert_eq!(command.command_name_range(), SourceRange::from_offsets(0, 7));
        assert_eq!(command.num_args(), 1);
        assert_eq!(command.arg_text(0), "word");
        assert_eq!(command.arg_range(0), SourceRange::from_offsets(3, 7));
        assert_eq!(command.render_kind(), RenderKind::Bold);
        assert!(!command.has_trailing_newline());
        assert_eq!(command.child_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_arg_out_of_range_panics() {
        let command = InlineCommand::new(
            SourceLocation::new(1),
            SourceLocation::new(2),
            CommandId(0),
            RenderKind::Normal,
            Vec::new(),
        );
        let _ = command.arg_text(0);
    }
}
