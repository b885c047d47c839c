//! `\tparam` commands
//!
//! A template parameter is located by a path of indices, one per level of nested template
//! parameter lists. For
//!
//! ```text
//! template<typename C, template<typename T> class TT>
//! void test(TT<int> aaa);
//! ```
//!
//! `C` is at `[0]`, `TT` at `[1]` and `T` at `[1, 0]`. The path is bound once after parsing;
//! an empty path means unresolved.

use super::super::error::{CommentError, CommentResult};
use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::block_command::{BlockCommand, BlockCommandBase};
use once_cell::unsync::OnceCell;
use tracing::trace;

/// A `\tparam` command and the bound path of its template parameter.
#[derive(Debug, Clone)]
pub struct TParamCommand<'a> {
    command: BlockCommandBase<'a>,
    position: OnceCell<Vec<usize>>,
}

impl<'a> TParamCommand<'a> {
    /// Wrap a block command whose first argument, if any, is the parameter name.
    pub fn new(command: BlockCommand<'a>) -> Self {
        Self {
            command: command.into_base(CommentKind::TParamCommand),
            position: OnceCell::new(),
        }
    }

    pub fn command(&self) -> &BlockCommandBase<'a> {
        &self.command
    }

    pub fn has_param_name(&self) -> bool {
        self.command.num_args() > 0
    }

    /// # Panics
    ///
    /// Panics if the command has no parameter name.
    pub fn param_name(&self) -> &'a str {
        self.command.arg_text(0)
    }

    /// # Panics
    ///
    /// Panics if the command has no parameter name.
    pub fn param_name_range(&self) -> SourceRange {
        self.command.arg_range(0)
    }

    /// True once a non-empty position has been bound.
    pub fn is_position_valid(&self) -> bool {
        self.position.get().is_some()
    }

    /// # Panics
    ///
    /// Panics if the position is not bound.
    pub fn position(&self) -> &[usize] {
        match self.position.get() {
            Some(position) => position,
            None => panic!("position of TParamCommandComment is not bound"),
        }
    }

    /// Number of nested template parameter lists on the path.
    ///
    /// # Panics
    ///
    /// Panics if the position is not bound.
    pub fn depth(&self) -> usize {
        self.position().len()
    }

    /// Index within the template parameter list at `depth`.
    ///
    /// # Panics
    ///
    /// Panics if the position is not bound or `depth` is past the end of the path.
    pub fn index(&self, depth: usize) -> usize {
        self.position()[depth]
    }

    /// Bind the path of the documented template parameter, outermost list first.
    pub fn try_bind(&self, position: Vec<usize>) -> CommentResult<()> {
        if position.is_empty() {
            return Err(CommentError::EmptyPosition);
        }
        self.position
            .set(position)
            .map_err(|_| CommentError::AlreadyBound {
                node: CommentKind::TParamCommand.name(),
            })?;
        trace!(position = ?self.position(), "bound tparam command");
        Ok(())
    }

    /// # Panics
    ///
    /// Panics on a second bind or if `position` is empty.
    pub fn bind(&self, position: Vec<usize>) {
        if let Err(err) = self.try_bind(position) {
            panic!("{err}");
        }
    }
}

impl<'a> CommentNode<'a> for TParamCommand<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::TParamCommand
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
        visitor.visit_tparam_command(self);
        self.command.accept_paragraph(visitor);
        visitor.leave_tparam_command(self);
    }
}

impl PartialEq for TParamCommand<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.position.get() == other.position.get()
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::commands::CommandId;
    use super::super::argument::Argument;
    use super::*;

    fn tparam(name: &str) -> TParamCommand<'_> {
        TParamCommand::new(
            BlockCommand::new(SourceLocation::new(0), SourceLocation::new(7), CommandId(1))
                .with_args(vec![Argument::new(SourceRange::from_offsets(8, 10), name)]),
        )
    }

    #[test]
    fn test_bind_nested_position() {
        let command = tparam("T");
        assert!(!command.is_position_valid());
        command.bind(vec![1, 0]);
        assert!(command.is_position_valid());
        assert_eq!(command.depth(), 2);
        assert_eq!(command.index(0), 1);
        assert_eq!(command.index(1), 0);
        assert_eq!(command.position(), &[1, 0]);
        assert_eq!(command.param_name(), "T");
    }

    #[test]
    fn test_try_bind_errors() {
        let command = tparam("C");
        assert!(matches!(
            command.try_bind(Vec::new()),
            Err(CommentError::EmptyPosition)
        ));
        assert!(!command.is_position_valid());
        command.bind(vec![0]);
        assert!(matches!(
            command.try_bind(vec![1]),
            Err(CommentError::AlreadyBound { .. })
        ));
        assert_eq!(command.position(), &[0]);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_bind_panics() {
        tparam("C").bind(Vec::new());
    }

    #[test]
    #[should_panic(expected = "not bound")]
    fn test_unbound_depth_panics() {
        let _ = tparam("C").depth();
    }
}
