//! `\param` commands
//!
//! A parameter command documents one function parameter. The parser only knows the name as
//! written; the index of the parameter in the declaration is bound later, exactly once, by
//! whoever resolves names against the declaration. Until then (and forever, if the name
//! matches nothing) the index is unresolved.

use super::super::error::{CommentError, CommentResult};
use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::block_command::{BlockCommand, BlockCommandBase};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Direction written in `\param[in]`, `\param[out]` or `\param[in,out]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PassDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl PassDirection {
    /// Bracketed spelling, as written after `\param`.
    pub fn as_str(self) -> &'static str {
        match self {
            PassDirection::In => "[in]",
            PassDirection::Out => "[out]",
            PassDirection::InOut => "[in,out]",
        }
    }
}

impl fmt::Display for PassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `\param` command with its direction and resolved parameter index.
#[derive(Debug, Clone)]
pub struct ParamCommand<'a> {
    command: BlockCommandBase<'a>,
    direction: PassDirection,
    is_direction_explicit: bool,
    param_index: OnceCell<usize>,
}

impl<'a> ParamCommand<'a> {
    /// Wrap a block command whose first argument, if any, is the parameter name.
    pub fn new(command: BlockCommand<'a>) -> Self {
        Self {
            command: command.into_base(CommentKind::ParamCommand),
            direction: PassDirection::In,
            is_direction_explicit: false,
            param_index: OnceCell::new(),
        }
    }

    /// Set the direction, and whether it was written out or defaulted.
    pub fn with_direction(mut self, direction: PassDirection, explicit: bool) -> Self {
        self.direction = direction;
        self.is_direction_explicit = explicit;
        self
    }

    /// Name, arguments and paragraph shared with the other block commands.
    pub fn command(&self) -> &BlockCommandBase<'a> {
        &self.command
    }

    /// `In` unless the command carried a direction.
    pub fn direction(&self) -> PassDirection {
        self.direction
    }

    pub fn is_direction_explicit(&self) -> bool {
        self.is_direction_explicit
    }

    /// True if the command has at least one argument.
    pub fn has_param_name(&self) -> bool {
        self.command.num_args() > 0
    }

    /// # Panics
    ///
    /// Panics if the command has no parameter name; check
    /// [`has_param_name`](Self::has_param_name).
    pub fn param_name(&self) -> &'a str {
        self.command.arg_text(0)
    }

    /// # Panics
    ///
    /// Panics if the command has no parameter name.
    pub fn param_name_range(&self) -> SourceRange {
        self.command.arg_range(0)
    }

    pub fn is_param_index_valid(&self) -> bool {
        self.param_index.get().is_some()
    }

    /// # Panics
    ///
    /// Panics if the index was never bound; check
    /// [`is_param_index_valid`](Self::is_param_index_valid).
    pub fn param_index(&self) -> usize {
        match self.param_index.get() {
            Some(index) => *index,
            None => panic!("parameter index of ParamCommandComment is not bound"),
        }
    }

    /// Bind the position of the documented parameter in the declaration.
    pub fn try_bind(&self, index: usize) -> CommentResult<()> {
        if index == usize::MAX {
            return Err(CommentError::InvalidParamIndex { index });
        }
        self.param_index
            .set(index)
            .map_err(|_| CommentError::AlreadyBound {
                node: CommentKind::ParamCommand.name(),
            })?;
        trace!(index, name = self.name_for_log(), "bound param command");
        Ok(())
    }

    /// # Panics
    ///
    /// Panics on a second bind or if `index` is `usize::MAX`.
    pub fn bind(&self, index: usize) {
        if let Err(err) = self.try_bind(index) {
            panic!("{err}");
        }
    }

    fn name_for_log(&self) -> &'a str {
        if self.has_param_name() {
            self.param_name()
        } else {
            ""
        }
    }
}

impl<'a> CommentNode<'a> for ParamCommand<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::ParamCommand
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
        visitor.visit_param_command(self);
        self.command.accept_paragraph(visitor);
        visitor.leave_param_command(self);
    }
}

impl PartialEq for ParamCommand<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command
            && self.direction == other.direction
            && self.is_direction_explicit == other.is_direction_explicit
            && self.param_index.get() == other.param_index.get()
    }
}
