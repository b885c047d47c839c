//! Verbatim blocks
//!
//! A verbatim block is fenced by an opening command (`\code`, `\verbatim`, ...) and a matching
//! closing command. Its content is kept line by line, untouched: no inline markup is
//! recognized inside. Unlike other block commands it has no paragraph; its children are
//! the lines.
//!
//! The range of the block covers the opening command, every line and the closing command
//! name, so the lines always fall inside it.

use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::block_command::{BlockCommand, BlockCommandBase};

/// One line of text inside a verbatim block.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbatimBlockLine<'a> {
    range: SourceRange,
    text: &'a str,
}

impl<'a> VerbatimBlockLine<'a> {
    pub fn new(begin: SourceLocation, text: &'a str) -> Self {
        Self {
            range: SourceRange::new(begin, begin.advanced_by(text.len())),
            text,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<'a> CommentNode<'a> for VerbatimBlockLine<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::VerbatimBlockLine
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
        Children::empty()
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_verbatim_block_line(self);
    }
}

/// A fenced verbatim block such as `\code` ... `\endcode`.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbatimBlock<'a> {
    command: BlockCommandBase<'a>,
    close_name: &'a str,
    close_name_loc_begin: SourceLocation,
    lines: Vec<VerbatimBlockLine<'a>>,
}

impl<'a> VerbatimBlock<'a> {
    /// Wrap the opening command. The block starts out unclosed and empty.
    pub fn new(command: BlockCommand<'a>) -> Self {
        Self {
            command: command.into_base(CommentKind::VerbatimBlock),
            close_name: "",
            close_name_loc_begin: SourceLocation::INVALID,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<VerbatimBlockLine<'a>>) -> Self {
        if let Some(last) = lines.last() {
            self.command.stretch_to(last.source_range().end);
        }
        self.lines = lines;
        self
    }

    /// Record the closing command. `loc_begin` is the start of its name.
    pub fn with_close_name(mut self, name: &'a str, loc_begin: SourceLocation) -> Self {
        self.close_name = name;
        self.close_name_loc_begin = loc_begin;
        self.command.stretch_to(loc_begin.advanced_by(name.len()));
        self
    }

    pub fn command(&self) -> &BlockCommandBase<'a> {
        &self.command
    }

    /// Name of the closing command, or `""` if the block was never closed.
    pub fn close_name(&self) -> &'a str {
        self.close_name
    }

    pub fn close_name_loc_begin(&self) -> SourceLocation {
        self.close_name_loc_begin
    }

    pub fn lines(&self) -> &[VerbatimBlockLine<'a>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// # Panics
    ///
    /// Panics if `index >= line_count()`.
    pub fn line_text(&self, index: usize) -> &'a str {
        self.lines[index].text
    }
}

impl<'a> CommentNode<'a> for VerbatimBlock<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::VerbatimBlock
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
        Children::lines(&self.lines)
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_verbatim_block(self);
        for line in &self.lines {
            line.accept(visitor);
        }
        visitor.leave_verbatim_block(self);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::commands::CommandId;
    use super::*;

    fn loc(offset: u32) -> SourceLocation {
        SourceLocation::new(offset)
    }

    #[test]
    fn test_block_lines_and_close_name() {
        // \code\n  int x;\n  x++;\n\endcode
        let block = VerbatimBlock::new(BlockCommand::new(loc(0), loc(5), CommandId(2)))
            .with_lines(vec![
                VerbatimBlockLine::new(loc(6), "  int x;"),
                VerbatimBlockLine::new(loc(15), "  x++;"),
            ])
            .with_close_name("endcode", loc(23));

        assert_eq!(block.line_count(), 2);
        assert_eq!(block.line_text(1), "  x++;");
        assert_eq!(block.close_name(), "endcode");
        assert_eq!(block.close_name_loc_begin(), loc(23));
        assert_eq!(block.source_range(), SourceRange::from_offsets(0, 30));
        assert_eq!(block.location(), loc(1));

        let lines: Vec<_> = block.children().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert_eq!(line.kind(), CommentKind::VerbatimBlockLine);
            assert!(block.source_range().contains_range(&line.source_range()));
        }
    }

    #[test]
    fn test_line_range_follows_text() {
        let line = VerbatimBlockLine::new(loc(10), "abc");
        assert_eq!(line.source_range(), SourceRange::from_offsets(10, 13));
        assert_eq!(line.child_count(), 0);
    }

    #[test]
    fn test_unclosed_block() {
        let block = VerbatimBlock::new(BlockCommand::new(loc(0), loc(9), CommandId(2)))
            .with_lines(vec![VerbatimBlockLine::new(loc(3), "ab")]);
        assert_eq!(block.close_name(), "");
        assert!(!block.close_name_loc_begin().is_valid());
        assert_eq!(block.source_range(), SourceRange::from_offsets(0, 9));
    }
}
