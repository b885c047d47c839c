//! Node kind taxonomy
//!
//!     Every concrete comment node has exactly one [`CommentKind`]. The abstract families
//!     (inline content, HTML tags, block content, block commands) are not separate types but
//!     contiguous ranges of kind values, so asking "is this node a block command?" is two integer
//!     comparisons against the family bounds.
//!
//!     The numbering is fixed by declaration order:
//!
//!         1  TextComment              ┐
//!         2  InlineCommandComment     │ InlineContent
//!         3  HTMLStartTagComment  ┐   │
//!         4  HTMLEndTagComment    ┘   ┘ HtmlTag
//!         5  ParagraphComment         ┐
//!         6  BlockCommandComment  ┐   │
//!         7  ParamCommandComment  │   │ BlockContent
//!         8  TParamCommandComment │   │
//!         9  VerbatimBlockComment │   │
//!        10  VerbatimLineComment  ┘   ┘ BlockCommand
//!        11  VerbatimBlockLineComment
//!        12  FullComment
//!
//!     A new leaf variant must be given a value inside the range of every family it belongs to,
//!     and the family bounds below must be moved accordingly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator of a concrete comment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CommentKind {
    Text = 1,
    InlineCommand = 2,
    HtmlStartTag = 3,
    HtmlEndTag = 4,
    Paragraph = 5,
    BlockCommand = 6,
    ParamCommand = 7,
    TParamCommand = 8,
    VerbatimBlock = 9,
    VerbatimLine = 10,
    VerbatimBlockLine = 11,
    FullComment = 12,
}

impl CommentKind {
    /// All kinds in declaration order.
    pub const ALL: [CommentKind; 12] = [
        CommentKind::Text,
        CommentKind::InlineCommand,
        CommentKind::HtmlStartTag,
        CommentKind::HtmlEndTag,
        CommentKind::Paragraph,
        CommentKind::BlockCommand,
        CommentKind::ParamCommand,
        CommentKind::TParamCommand,
        CommentKind::VerbatimBlock,
        CommentKind::VerbatimLine,
        CommentKind::VerbatimBlockLine,
        CommentKind::FullComment,
    ];

    /// The one-byte discriminant, 1 through 12 in declaration order.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8). Returns `None` for 0 and anything past the
    /// last kind.
    pub fn from_u8(value: u8) -> Option<CommentKind> {
        CommentKind::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Name of the node class, as shown in dumps.
    pub fn name(self) -> &'static str {
        match self {
            CommentKind::Text => "TextComment",
            CommentKind::InlineCommand => "InlineCommandComment",
            CommentKind::HtmlStartTag => "HTMLStartTagComment",
            CommentKind::HtmlEndTag => "HTMLEndTagComment",
            CommentKind::Paragraph => "ParagraphComment",
            CommentKind::BlockCommand => "BlockCommandComment",
            CommentKind::ParamCommand => "ParamCommandComment",
            CommentKind::TParamCommand => "TParamCommandComment",
            CommentKind::VerbatimBlock => "VerbatimBlockComment",
            CommentKind::VerbatimLine => "VerbatimLineComment",
            CommentKind::VerbatimBlockLine => "VerbatimBlockLineComment",
            CommentKind::FullComment => "FullComment",
        }
    }

    /// Range check against the family's first and last kinds.
    #[inline]
    pub fn is_in(self, family: CommentFamily) -> bool {
        family.contains(self)
    }

    pub fn is_inline_content(self) -> bool {
        self.is_in(CommentFamily::InlineContent)
    }

    /// Start and end tags.
    pub fn is_html_tag(self) -> bool {
        self.is_in(CommentFamily::HtmlTag)
    }

    pub fn is_block_content(self) -> bool {
        self.is_in(CommentFamily::BlockContent)
    }

    /// Block commands and their specialized forms, `\param` through `\fn`.
    pub fn is_block_command(self) -> bool {
        self.is_in(CommentFamily::BlockCommand)
    }

    /// Families this kind belongs to, outermost first.
    pub fn families(self) -> impl Iterator<Item = CommentFamily> {
        CommentFamily::ALL
            .into_iter()
            .filter(move |family| family.contains(self))
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract node family, defined as a closed range of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentFamily {
    InlineContent,
    HtmlTag,
    BlockContent,
    BlockCommand,
}

impl CommentFamily {
    pub const ALL: [CommentFamily; 4] = [
        CommentFamily::InlineContent,
        CommentFamily::HtmlTag,
        CommentFamily::BlockContent,
        CommentFamily::BlockCommand,
    ];

    pub const fn first(self) -> CommentKind {
        match self {
            CommentFamily::InlineContent => CommentKind::Text,
            CommentFamily::HtmlTag => CommentKind::HtmlStartTag,
            CommentFamily::BlockContent => CommentKind::Paragraph,
            CommentFamily::BlockCommand => CommentKind::BlockCommand,
        }
    }

    pub const fn last(self) -> CommentKind {
        match self {
            CommentFamily::InlineContent => CommentKind::HtmlEndTag,
            CommentFamily::HtmlTag => CommentKind::HtmlEndTag,
            CommentFamily::BlockContent => CommentKind::VerbatimLine,
            CommentFamily::BlockCommand => CommentKind::VerbatimLine,
        }
    }

    /// True if `kind` lies between [`first`](Self::first) and [`last`](Self::last).
    #[inline]
    pub fn contains(self, kind: CommentKind) -> bool {
        let value = kind as u8;
        value >= self.first() as u8 && value <= self.last() as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            CommentFamily::InlineContent => "InlineContentComment",
            CommentFamily::HtmlTag => "HTMLTagComment",
            CommentFamily::BlockContent => "BlockContentComment",
            CommentFamily::BlockCommand => "BlockCommandComment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CommentKind::Text, &[CommentFamily::InlineContent])]
    #[case(CommentKind::InlineCommand, &[CommentFamily::InlineContent])]
    #[case(CommentKind::HtmlStartTag, &[CommentFamily::InlineContent, CommentFamily::HtmlTag])]
    #[case(CommentKind::HtmlEndTag, &[CommentFamily::InlineContent, CommentFamily::HtmlTag])]
    #[case(CommentKind::Paragraph, &[CommentFamily::BlockContent])]
    #[case(CommentKind::BlockCommand, &[CommentFamily::BlockContent, CommentFamily::BlockCommand])]
    #[case(CommentKind::ParamCommand, &[CommentFamily::BlockContent, CommentFamily::BlockCommand])]
    #[case(CommentKind::TParamCommand, &[CommentFamily::BlockContent, CommentFamily::BlockCommand])]
    #[case(CommentKind::VerbatimBlock, &[CommentFamily::BlockContent, CommentFamily::BlockCommand])]
    #[case(CommentKind::VerbatimLine, &[CommentFamily::BlockContent, CommentFamily::BlockCommand])]
    #[case(CommentKind::VerbatimBlockLine, &[])]
    #[case(CommentKind::FullComment, &[])]
    fn test_family_membership(#[case] kind: CommentKind, #[case] expected: &[CommentFamily]) {
        let families: Vec<_> = kind.families().collect();
        assert_eq!(families, expected);
    }

    #[test]
    fn test_kind_values_follow_declaration_order() {
        for (index, kind) in CommentKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.as_u8()), index + 1);
            assert_eq!(CommentKind::from_u8(kind.as_u8()), Some(*kind));
        }
        assert_eq!(CommentKind::from_u8(0), None);
        assert_eq!(CommentKind::from_u8(13), None);
    }

    #[test]
    fn test_family_ranges_are_nested() {
        assert!(CommentFamily::InlineContent.contains(CommentFamily::HtmlTag.first()));
        assert!(CommentFamily::InlineContent.contains(CommentFamily::HtmlTag.last()));
        assert!(CommentFamily::BlockContent.contains(CommentFamily::BlockCommand.first()));
        assert!(CommentFamily::BlockContent.contains(CommentFamily::BlockCommand.last()));
        assert!(CommentFamily::InlineContent.last() < CommentFamily::BlockContent.first());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CommentKind::HtmlStartTag.to_string(), "HTMLStartTagComment");
        assert_eq!(CommentFamily::HtmlTag.name(), "HTMLTagComment");
    }
}
