//! The root of a comment tree
//!
//! A full comment owns the top-level blocks of one documentation comment and the summary of
//! the declaration it documents. It is built once the blocks are complete, and a declaration
//! is required: there is no full comment for a comment that documents nothing.

use super::super::decl::Decl;
use super::super::decl_info::DeclInfo;
use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, Visitor};
use super::block_content::BlockContent;

#[derive(Debug)]
pub struct FullComment<'a> {
    range: SourceRange,
    blocks: Vec<BlockContent<'a>>,
    decl_info: DeclInfo<'a>,
}

impl<'a> FullComment<'a> {
    /// Root of the tree for the comment attached to `decl`. The decl info is not filled yet.
    pub fn new(blocks: Vec<BlockContent<'a>>, decl: &'a Decl) -> Self {
        let range = SourceRange::bounding_box(blocks.iter().map(BlockContent::source_range))
            .unwrap_or_default();
        Self {
            range,
            blocks,
            decl_info: DeclInfo::new(decl),
        }
    }

    pub fn blocks(&self) -> &[BlockContent<'a>] {
        &self.blocks
    }

    pub fn decl(&self) -> &'a Decl {
        self.decl_info.decl()
    }

    /// The declaration summary, filled on first access.
    pub fn decl_info(&self) -> &DeclInfo<'a> {
        self.decl_info.fill();
        &self.decl_info
    }

    /// Whether [`decl_info`](Self::decl_info) has run. Never triggers the fill itself.
    pub fn is_decl_info_filled(&self) -> bool {
        self.decl_info.is_filled()
    }
}

impl<'a> CommentNode<'a> for FullComment<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::FullComment
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
        Children::blocks(&self.blocks)
    }

    fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit_full_comment(self);
        for block in &self.blocks {
            block.as_comment().accept(visitor);
        }
        visitor.leave_full_comment(self);
    }
}
