//! HTML tags
//!
//! Tags are inline content whatever their HTML meaning. A start tag and the end tag that
//! would close it in a browser are two unrelated nodes; nothing pairs them up here.
//!
//! Ranges grow as the parser learns more about a start tag: the name alone first, then the
//! attributes, then the closing `>`.

use super::super::kind::CommentKind;
use super::super::location::{SourceLocation, SourceRange};
use super::super::node::Children;
use super::super::traits::{CommentNode, HtmlTag, InlineNode, Visitor};

/// The `="value"` part of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValue<'a> {
    pub equals_loc: SourceLocation,
    pub range: SourceRange,
    pub text: &'a str,
}

/// One attribute of a start tag. Attributes without a value have `value == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name_loc_begin: SourceLocation,
    pub name: &'a str,
    pub value: Option<AttributeValue<'a>>,
}

impl<'a> Attribute<'a> {
    pub fn new(name_loc_begin: SourceLocation, name: &'a str) -> Self {
        Self {
            name_loc_begin,
            name,
            value: None,
        }
    }

    pub fn with_value(
        mut self,
        equals_loc: SourceLocation,
        range: SourceRange,
        text: &'a str,
    ) -> Self {
        self.value = Some(AttributeValue {
            equals_loc,
            range,
            text,
        });
        self
    }

    /// One past the last character of the attribute name.
    pub fn name_loc_end(&self) -> SourceLocation {
        self.name_loc_begin.advanced_by(self.name.len())
    }

    pub fn name_range(&self) -> SourceRange {
        SourceRange::new(self.name_loc_begin, self.name_loc_end())
    }

    /// Text of the value, or `None` for a bare attribute like `disabled`.
    pub fn value_text(&self) -> Option<&'a str> {
        self.value.map(|value| value.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlStartTag<'a> {
    range: SourceRange,
    location: SourceLocation,
    tag_name: &'a str,
    attributes: Vec<Attribute<'a>>,
    is_self_closing: bool,
    has_trailing_newline: bool,
}

impl<'a> HtmlStartTag<'a> {
    /// `begin` is the location of the `<`.
    pub fn new(begin: SourceLocation, tag_name: &'a str) -> Self {
        let location = begin.with_offset(1);
        Self {
            range: SourceRange::new(begin, location.advanced_by(tag_name.len())),
            location,
            tag_name,
            attributes: Vec::new(),
            is_self_closing: false,
            has_trailing_newline: false,
        }
    }

    /// Attach the attributes and stretch the range over the last one.
    pub fn with_attributes(mut self, attributes: Vec<Attribute<'a>>) -> Self {
        if let Some(last) = attributes.last() {
            self.range.end = match last.value {
                Some(value) if value.range.end.is_valid() => value.range.end,
                _ => last.name_loc_end(),
            };
        }
        self.attributes = attributes;
        self
    }

    /// Record where the closing `>` is.
    pub fn with_greater_loc(mut self, greater_loc: SourceLocation) -> Self {
        self.range.end = greater_loc;
        self
    }

    pub fn with_self_closing(mut self) -> Self {
        self.is_self_closing = true;
        self
    }

    pub fn with_trailing_newline(mut self) -> Self {
        self.has_trailing_newline = true;
        self
    }

    pub fn attributes(&self) -> &[Attribute<'a>] {
        &self.attributes
    }

    pub fn num_attrs(&self) -> usize {
        self.attributes.len()
    }

    /// # Panics
    ///
    /// Panics if `index >= num_attrs()`.
    pub fn attr(&self, index: usize) -> &Attribute<'a> {
        &self.attributes[index]
    }

    /// True for `<br/>`.
    pub fn is_self_closing(&self) -> bool {
        self.is_self_closing
    }
}

impl<'a> CommentNode<'a> for HtmlStartTag<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::HtmlStartTag
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
        visitor.visit_html_start_tag(self);
    }
}

impl<'a> InlineNode<'a> for HtmlStartTag<'a> {
    fn has_trailing_newline(&self) -> bool {
        self.has_trailing_newline
    }
}

impl<'a> HtmlTag<'a> for HtmlStartTag<'a> {
    fn tag_name(&self) -> &'a str {
        self.tag_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlEndTag<'a> {
    range: SourceRange,
    location: SourceLocation,
    tag_name: &'a str,
    has_trailing_newline: bool,
}

impl<'a> HtmlEndTag<'a> {
    /// `begin` is the location of the `<` of `</name>`.
    pub fn new(begin: SourceLocation, end: SourceLocation, tag_name: &'a str) -> Self {
        Self {
            range: SourceRange::new(begin, end),
            location: begin.with_offset(2),
            tag_name,
            has_trailing_newline: false,
        }
    }

    pub fn with_trailing_newline(mut self) -> Self {
        self.has_trailing_newline = true;
        self
    }
}

impl<'a> CommentNode<'a> for HtmlEndTag<'a> {
    fn kind(&self) -> CommentKind {
        CommentKind::HtmlEndTag
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
        visitor.visit_html_end_tag(self);
    }
}

impl<'a> InlineNode<'a> for HtmlEndTag<'a> {
    fn has_trailing_newline(&self) -> bool {
        self.has_trailing_newline
    }
}

impl<'a> HtmlTag<'a> for HtmlEndTag<'a> {
    fn tag_name(&self) -> &'a str {
        self.tag_name
    }
}
