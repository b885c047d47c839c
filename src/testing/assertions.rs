//! Assertion builders, one per node type

use crate::ast::{
    BlockCommandBase, BlockContent, CommentKind, CommentNode, DeclKind, FullComment, InlineContent,
    ParamCommand, Paragraph, PassDirection, TParamCommand, VerbatimBlock, VerbatimLine,
};

fn kind_of(block: &BlockContent<'_>) -> &'static str {
    block.as_comment().kind_name()
}

// ============================================================================
// Full comment
// ============================================================================

pub struct FullCommentAssertion<'n, 'a> {
    pub(crate) full: &'n FullComment<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> FullCommentAssertion<'n, 'a> {
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.full.blocks().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {} blocks: [{}]",
            self.context,
            expected,
            actual,
            self.full
                .blocks()
                .iter()
                .map(kind_of)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'n, 'a>),
    {
        let blocks = self.full.blocks();
        assert!(
            index < blocks.len(),
            "{}: Block index {} out of bounds ({} blocks)",
            self.context,
            index,
            blocks.len()
        );
        assertion(BlockAssertion {
            block: &blocks[index],
            context: format!("{}:blocks[{}]", self.context, index),
        });
        self
    }

    pub fn decl_kind(self, expected: DeclKind) -> Self {
        let actual = self.full.decl_info().kind();
        assert_eq!(
            actual, expected,
            "{}: Expected decl kind '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }
}

// ============================================================================
// Block dispatch
// ============================================================================

pub struct BlockAssertion<'n, 'a> {
    pub(crate) block: &'n BlockContent<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> BlockAssertion<'n, 'a> {
    pub fn kind(self, expected: CommentKind) -> Self {
        let actual = self.block.as_comment().kind();
        assert_eq!(
            actual, expected,
            "{}: Expected {}, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'n, 'a> {
        match self.block {
            BlockContent::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            other => panic!(
                "{}: Expected ParagraphComment, found {}",
                self.context,
                kind_of(other)
            ),
        }
    }

    /// Any member of the block command family.
    pub fn assert_block_command(self) -> BlockCommandAssertion<'n, 'a> {
        match self.block.as_block_command() {
            Some(command) => BlockCommandAssertion {
                command,
                context: self.context,
            },
            None => panic!(
                "{}: Expected a block command, found {}",
                self.context,
                kind_of(self.block)
            ),
        }
    }

    pub fn assert_param_command(self) -> ParamCommandAssertion<'n, 'a> {
        match self.block {
            BlockContent::ParamCommand(param) => ParamCommandAssertion {
                param,
                context: self.context,
            },
            other => panic!(
                "{}: Expected ParamCommandComment, found {}",
                self.context,
                kind_of(other)
            ),
        }
    }

    pub fn assert_tparam_command(self) -> TParamCommandAssertion<'n, 'a> {
        match self.block {
            BlockContent::TParamCommand(tparam) => TParamCommandAssertion {
                tparam,
                context: self.context,
            },
            other => panic!(
                "{}: Expected TParamCommandComment, found {}",
                self.context,
                kind_of(other)
            ),
        }
    }

    pub fn assert_verbatim_block(self) -> VerbatimBlockAssertion<'n, 'a> {
        match self.block {
            BlockContent::VerbatimBlock(block) => VerbatimBlockAssertion {
                block,
                context: self.context,
            },
            other => panic!(
                "{}: Expected VerbatimBlockComment, found {}",
                self.context,
                kind_of(other)
            ),
        }
    }

    pub fn assert_verbatim_line(self) -> VerbatimLineAssertion<'n, 'a> {
        match self.block {
            BlockContent::VerbatimLine(line) => VerbatimLineAssertion {
                line,
                context: self.context,
            },
            other => panic!(
                "{}: Expected VerbatimLineComment, found {}",
                self.context,
                kind_of(other)
            ),
        }
    }
}

// ============================================================================
// Paragraph and inline content
// ============================================================================

pub struct ParagraphAssertion<'n, 'a> {
    pub(crate) paragraph: &'n Paragraph<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> ParagraphAssertion<'n, 'a> {
    /// Concatenated text of the plain text children.
    fn plain_text(&self) -> String {
        self.paragraph
            .content()
            .iter()
            .filter_map(InlineContent::as_text)
            .map(|text| text.text())
            .collect()
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = self.plain_text();
        assert_eq!(
            actual, expected,
            "{}: Expected paragraph text to be '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        let actual = self.plain_text();
        assert!(
            actual.contains(substring),
            "{}: Expected paragraph text to contain '{}', but got '{}'",
            self.context,
            substring,
            actual
        );
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        let actual = self.paragraph.content().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} inline nodes, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn whitespace(self, expected: bool) -> Self {
        let actual = self.paragraph.is_whitespace();
        assert_eq!(
            actual, expected,
            "{}: Expected is_whitespace() == {}, but got {}",
            self.context, expected, actual
        );
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'n, 'a>),
    {
        let content = self.paragraph.content();
        assert!(
            index < content.len(),
            "{}: Inline index {} out of bounds ({} nodes)",
            self.context,
            index,
            content.len()
        );
        assertion(InlineAssertion {
            item: &content[index],
            context: format!("{}:inline[{}]", self.context, index),
        });
        self
    }
}

pub struct InlineAssertion<'n, 'a> {
    pub(crate) item: &'n InlineContent<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> InlineAssertion<'n, 'a> {
    pub fn kind(self, expected: CommentKind) -> Self {
        let actual = self.item.as_comment().kind();
        assert_eq!(
            actual, expected,
            "{}: Expected {}, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        match self.item.as_text() {
            Some(text) => assert_eq!(
                text.text(),
                expected,
                "{}: Expected text '{}', but got '{}'",
                self.context,
                expected,
                text.text()
            ),
            None => panic!(
                "{}: Expected TextComment, found {}",
                self.context,
                self.item.as_comment().kind_name()
            ),
        }
        self
    }

    pub fn args(self, expected: &[&str]) -> Self {
        match self.item.as_inline_command() {
            Some(command) => {
                let actual: Vec<_> = command.args().iter().map(|arg| arg.text).collect();
                assert_eq!(
                    actual, expected,
                    "{}: Expected inline command arguments {:?}, but got {:?}",
                    self.context, expected, actual
                );
            }
            None => panic!(
                "{}: Expected InlineCommandComment, found {}",
                self.context,
                self.item.as_comment().kind_name()
            ),
        }
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        let actual = self.item.has_trailing_newline();
        assert_eq!(
            actual, expected,
            "{}: Expected has_trailing_newline() == {}, but got {}",
            self.context, expected, actual
        );
        self
    }
}

// ============================================================================
// Block commands
// ============================================================================

fn assert_args(context: &str, command: &BlockCommandBase<'_>, expected: &[&str]) {
    let actual: Vec<_> = command.args().iter().map(|arg| arg.text).collect();
    assert_eq!(
        actual, expected,
        "{}: Expected arguments {:?}, but got {:?}",
        context, expected, actual
    );
}

fn paragraph_of<'n, 'a>(
    context: &str,
    command: &'n BlockCommandBase<'a>,
) -> ParagraphAssertion<'n, 'a> {
    match command.paragraph() {
        Some(paragraph) => ParagraphAssertion {
            paragraph,
            context: format!("{}:paragraph", context),
        },
        None => panic!("{}: Expected a paragraph, but none is set", context),
    }
}

pub struct BlockCommandAssertion<'n, 'a> {
    pub(crate) command: &'n BlockCommandBase<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> BlockCommandAssertion<'n, 'a> {
    pub fn args(self, expected: &[&str]) -> Self {
        assert_args(&self.context, self.command, expected);
        self
    }

    pub fn paragraph<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ParagraphAssertion<'n, 'a>),
    {
        assertion(paragraph_of(&self.context, self.command));
        self
    }

    pub fn no_paragraph(self) -> Self {
        assert!(
            self.command.paragraph().is_none(),
            "{}: Expected no paragraph, but one is set",
            self.context
        );
        self
    }
}

pub struct ParamCommandAssertion<'n, 'a> {
    pub(crate) param: &'n ParamCommand<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> ParamCommandAssertion<'n, 'a> {
    pub fn param_name(self, expected: &str) -> Self {
        assert!(
            self.param.has_param_name(),
            "{}: Expected parameter name '{}', but the command has none",
            self.context,
            expected
        );
        assert_eq!(
            self.param.param_name(),
            expected,
            "{}: Expected parameter name '{}', but got '{}'",
            self.context,
            expected,
            self.param.param_name()
        );
        self
    }

    pub fn direction(self, expected: PassDirection, explicit: bool) -> Self {
        let actual = (self.param.direction(), self.param.is_direction_explicit());
        assert_eq!(
            actual,
            (expected, explicit),
            "{}: Expected direction {} (explicit: {}), but got {} (explicit: {})",
            self.context,
            expected,
            explicit,
            actual.0,
            actual.1
        );
        self
    }

    pub fn index(self, expected: usize) -> Self {
        assert!(
            self.param.is_param_index_valid(),
            "{}: Expected parameter index {}, but it is unresolved",
            self.context,
            expected
        );
        assert_eq!(
            self.param.param_index(),
            expected,
            "{}: Expected parameter index {}, but got {}",
            self.context,
            expected,
            self.param.param_index()
        );
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            !self.param.is_param_index_valid(),
            "{}: Expected an unresolved parameter, but it is bound to {}",
            self.context,
            self.param.param_index()
        );
        self
    }

    pub fn paragraph<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ParagraphAssertion<'n, 'a>),
    {
        assertion(paragraph_of(&self.context, self.param.command()));
        self
    }
}

pub struct TParamCommandAssertion<'n, 'a> {
    pub(crate) tparam: &'n TParamCommand<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> TParamCommandAssertion<'n, 'a> {
    pub fn param_name(self, expected: &str) -> Self {
        assert!(
            self.tparam.has_param_name(),
            "{}: Expected parameter name '{}', but the command has none",
            self.context,
            expected
        );
        assert_eq!(
            self.tparam.param_name(),
            expected,
            "{}: Expected parameter name '{}', but got '{}'",
            self.context,
            expected,
            self.tparam.param_name()
        );
        self
    }

    pub fn position(self, expected: &[usize]) -> Self {
        assert!(
            self.tparam.is_position_valid(),
            "{}: Expected position {:?}, but it is unresolved",
            self.context,
            expected
        );
        assert_eq!(
            self.tparam.position(),
            expected,
            "{}: Expected position {:?}, but got {:?}",
            self.context,
            expected,
            self.tparam.position()
        );
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            !self.tparam.is_position_valid(),
            "{}: Expected an unresolved template parameter, but it is bound to {:?}",
            self.context,
            self.tparam.position()
        );
        self
    }
}

// ============================================================================
// Verbatim
// ============================================================================

pub struct VerbatimBlockAssertion<'n, 'a> {
    pub(crate) block: &'n VerbatimBlock<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> VerbatimBlockAssertion<'n, 'a> {
    pub fn lines(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.block.lines().iter().map(|line| line.text()).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected verbatim lines {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn close_name(self, expected: &str) -> Self {
        assert_eq!(
            self.block.close_name(),
            expected,
            "{}: Expected close name '{}', but got '{}'",
            self.context,
            expected,
            self.block.close_name()
        );
        self
    }
}

pub struct VerbatimLineAssertion<'n, 'a> {
    pub(crate) line: &'n VerbatimLine<'a>,
    pub(crate) context: String,
}

impl<'n, 'a> VerbatimLineAssertion<'n, 'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.line.text(),
            expected,
            "{}: Expected verbatim text '{}', but got '{}'",
            self.context,
            expected,
            self.line.text()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.line.child_count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }
}
