//! Single-line verbatim commands
//!
//! A command like `\fn void f(int)` takes the rest of its line as text, with no closing
//! command and no markup inside.

use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::block_command::{BlockCommand, BlockCommandBase};

#[derive(Debug, Clone, PartialEq)]
pub struct VerbatimLine<'a> {
    command: BlockCommandBase<'a>,
    text: &'a str,
    text_begin: SourceLocation,
}

impl<'a> VerbatimLine<'a> {
    pub fn new(command: BlockCommand<'a>, text_begin: SourceLocation, text: &'a str) -> Self {
        Self {
            command: command.into_base(CommentKind::VerbatimLine),
            text,
            text_begin,
        }
    }

    pub fn command(&self) -> &BlockCommandBase<'a> {
        &self.command
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// From the start of the text to the end of the command.
    pub fn text_range(&self) -> SourceRange {
        SourceRange::new(self.text_begin, self.command.source_range().end)
    }
}

impl<'a> CommentNode<'a> for VerbatimLine<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::VerbatimLine
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
        Children::empty()
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_verbatim_line(self);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::commands::CommandId;
    use super::*;

    #[test]
    fn test_text_range() {
        // \fn void f();
        let line = VerbatimLine::new(
            BlockCommand::new(SourceLocation::new(0), SourceLocation::new(13), CommandId(4)),
            SourceLocation::new(4),
            "void f();",
        );
        assert_eq!(line.text(), "void f();");
        assert_eq!(line.text_range(), SourceRange::from_offsets(4, 13));
        assert_eq!(line.location(), SourceLocation::new(1));
        assert_eq!(line.child_count(), 0);
    }
}
