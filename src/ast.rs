//! Documentation comment AST
//!
//!     This module defines the in-memory tree for one structured documentation comment:
//!     free text mixed with Doxygen-style commands, inline markup, HTML tags and verbatim
//!     blocks. A parser builds the tree bottom-up, once; after that the tree is read-only
//!     apart from the few one-shot completions described below.
//!
//! Node Kinds and Families
//!
//!     Every node has a [`CommentKind`]. The kinds are numbered so that each abstract family
//!     is a contiguous range, and a family check is two comparisons:
//!
//!         - inline content: text, inline command, HTML start tag, HTML end tag
//!         - HTML tag: HTML start tag, HTML end tag
//!         - block content: paragraph, block command and its specialized forms
//!         - block command: block command, `\param`, `\tparam`, verbatim block, verbatim line
//!
//!     A new kind must be placed inside the ranges of every family it belongs to. See
//!     [`kind`] for the table.
//!
//! Tree Shape
//!
//!     The concrete nodes live in [`elements`]. Containers hold typed children: a
//!     [`FullComment`] holds [`BlockContent`], a [`Paragraph`] holds [`InlineContent`], a block
//!     command holds at most one paragraph and a [`VerbatimBlock`] holds its lines. Nesting
//!     that makes no sense (a paragraph inside a paragraph) cannot be expressed.
//!
//!     Generic code walks the tree through [`Comment`], a copyable reference to any node, and
//!     its [`children`](Comment::children) iterator, or pushes a [`Visitor`] through it with
//!     `accept`.
//!
//! Deferred Completion
//!
//!     Three things are filled in after a node is built, each at most once:
//!
//!         - the declaration index of a `\param` ([`ParamCommand::bind`])
//!         - the nested position of a `\tparam` ([`TParamCommand::bind`])
//!         - the [`DeclInfo`] of a full comment, computed when first read
//!
//!     Whitespace checks on text and paragraphs are cached the same way. The caches are
//!     `once_cell::unsync` cells, so trees are not `Sync` and a first-read race cannot happen.
//!
//! Locations
//!
//!     Locations are byte offsets ([`SourceLocation`]) into the comment source, and can be
//!     invalid. A node's range grows as the parser attaches arguments and children to it;
//!     once construction is finished it covers all of its children.

pub mod commands;
pub mod decl;
pub mod decl_info;
pub mod elements;
pub mod error;
pub mod kind;
pub mod location;
pub mod node;
pub mod snapshot;
pub mod traits;

#[cfg(test)]
mod probe;

pub use commands::{CommandId, CommandInfo, CommandTable, CommandTraits};
pub use decl::{
    Decl, FunctionDecl, MethodKind, ParmVarDecl, QualType, TemplateParameter,
    TemplateParameterList, TypeLoc,
};
pub use decl_info::{DeclInfo, DeclKind, DeclSummary, TemplateDeclKind};
pub use elements::{
    Argument, Attribute, AttributeValue, BlockCommand, BlockCommandBase, BlockContent,
    FullComment, HtmlEndTag, HtmlStartTag, InlineCommand, InlineContent, ParamCommand, Paragraph,
    PassDirection, RenderKind, TParamCommand, Text, VerbatimBlock, VerbatimBlockLine,
    VerbatimLine,
};
pub use error::{CommentError, CommentResult};
pub use kind::{CommentFamily, CommentKind};
pub use location::{SourceLocation, SourceRange};
pub use node::{descendants, Children, Comment};
pub use snapshot::{snapshot_from_comment, snapshot_from_full_comment, CommentSnapshot};
pub use traits::{CommentNode, HtmlTag, InlineNode, Visitor};
