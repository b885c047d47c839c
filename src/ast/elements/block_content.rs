//! Block-level content of a full comment

use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Comment;
use super::block_command::{BlockCommand, BlockCommandBase};
use super::param_command::ParamCommand;
use super::paragraph::Paragraph;
use super::tparam_command::TParamCommand;
use super::verbatim::VerbatimBlock;
use super::verbatim_line::VerbatimLine;

/// Any node that can stand on its own at the top level of a comment.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent<'a> {
    Paragraph(Paragraph<'a>),
    BlockCommand(BlockCommand<'a>),
    ParamCommand(ParamCommand<'a>),
    TParamCommand(TParamCommand<'a>),
    VerbatimBlock(VerbatimBlock<'a>),
    VerbatimLine(VerbatimLine<'a>),
}

impl<'a> BlockContent<'a> {
    pub fn as_comment<'n>(&'n self) -> Comment<'n, 'a> {
        Comment::from(self)
    }

    pub fn location(&self) -> SourceLocation {
        self.as_comment().location()
    }

    pub fn source_range(&self) -> SourceRange {
        self.as_comment().source_range()
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph<'a>> {
        match self {
            BlockContent::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    /// The block-command part of any block in the block command family.
    pub fn as_block_command(&self) -> Option<&BlockCommandBase<'a>> {
        self.as_comment().as_block_command()
    }

    pub fn as_param_command(&self) -> Option<&ParamCommand<'a>> {
        match self {
            BlockContent::ParamCommand(param) => Some(param),
            _ => None,
        }
    }

    pub fn as_tparam_command(&self) -> Option<&TParamCommand<'a>> {
        match self {
            BlockContent::TParamCommand(tparam) => Some(tparam),
            _ => None,
        }
    }

    pub fn as_verbatim_block(&self) -> Option<&VerbatimBlock<'a>> {
        match self {
            BlockContent::VerbatimBlock(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_verbatim_line(&self) -> Option<&VerbatimLine<'a>> {
        match self {
            BlockContent::VerbatimLine(line) => Some(line),
            _ => None,
        }
    }
}

impl<'a> From<Paragraph<'a>> for BlockContent<'a> {
    fn from(paragraph: Paragraph<'a>) -> Self {
        BlockContent::Paragraph(paragraph)
    }
}

impl<'a> From<BlockCommand<'a>> for BlockContent<'a> {
    fn from(command: BlockCommand<'a>) -> Self {
        BlockContent::BlockCommand(command)
    }
}

impl<'a> From<ParamCommand<'a>> for BlockContent<'a> {
    fn from(param: ParamCommand<'a>) -> Self {
        BlockContent::ParamCommand(param)
    }
}

impl<'a> From<TParamCommand<'a>> for BlockContent<'a> {
    fn from(tparam: TParamCommand<'a>) -> Self {
        BlockContent::TParamCommand(tparam)
    }
}

impl<'a> From<VerbatimBlock<'a>> for BlockContent<'a> {
    fn from(block: VerbatimBlock<'a>) -> Self {
        BlockContent::VerbatimBlock(block)
    }
}

impl<'a> From<VerbatimLine<'a>> for BlockContent<'a> {
    fn from(line: VerbatimLine<'a>) -> Self {
        BlockContent::VerbatimLine(line)
    }
}
