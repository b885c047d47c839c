//! Concrete comment nodes
//!
//! Inline content ([`Text`], [`InlineCommand`], [`HtmlStartTag`], [`HtmlEndTag`]) lives in
//! paragraphs. Block content ([`Paragraph`], [`BlockCommand`] and its specialized forms) lives
//! in a [`FullComment`] or, for paragraphs, inside a block command. Verbatim block lines only
//! appear inside a [`VerbatimBlock`].

pub mod argument;
pub mod block_command;
pub mod block_content;
pub mod full_comment;
pub mod html_tag;
pub mod inline_command;
pub mod inline_content;
pub mod param_command;
pub mod paragraph;
pub mod text;
pub mod tparam_command;
pub mod verbatim;
pub mod verbatim_line;

pub use argument::Argument;
pub use block_command::{BlockCommand, BlockCommandBase};
pub use block_content::BlockContent;
pub use full_comment::FullComment;
pub use html_tag::{Attribute, AttributeValue, HtmlEndTag, HtmlStartTag};
pub use inline_command::{InlineCommand, RenderKind};
pub use inline_content::InlineContent;
pub use param_command::{ParamCommand, PassDirection};
pub use paragraph::Paragraph;
pub use text::Text;
pub use tparam_command::TParamCommand;
pub use verbatim::{VerbatimBlock, VerbatimBlockLine};
pub use verbatim_line::VerbatimLine;
