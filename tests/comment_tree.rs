//! End-to-end tests over a hand-built comment
//!
//! The tree below is what a parser would produce for the comment in `SOURCE`, attached to
//!
//!     template<typename T> void copy(T *dst);
//!
//! Offsets are looked up in the source text so ranges line up with it.

use comment_ast::ast::{
    descendants, snapshot_from_full_comment, Argument, BlockCommand, BlockContent, CommandTable,
    Comment, CommentKind, CommentNode, Decl, DeclKind, FullComment, FunctionDecl, HtmlEndTag,
    HtmlStartTag, HtmlTag, ParamCommand, Paragraph, ParmVarDecl, PassDirection, SourceLocation,
    SourceRange, TParamCommand, TemplateDeclKind, TemplateParameter, TemplateParameterList,
    Text, VerbatimBlock, VerbatimBlockLine, VerbatimLine, Visitor,
};
use comment_ast::config::load_defaults;
use comment_ast::testing::assert_comment;

const SOURCE: &str = "\\brief Copies <em>text</em>.\n\
\\param[out] dst Target.\n\
\\tparam T Element.\n\
\\code\n\
x = 1;\n\
\\endcode\n\
\\fn void copy(T *dst)\n";

fn at(needle: &str) -> u32 {
    SOURCE.find(needle).expect("needle in source") as u32
}

fn loc(offset: u32) -> SourceLocation {
    SourceLocation::new(offset)
}

fn text(begin: u32, content: &'static str) -> Text<'static> {
    Text::new(loc(begin), loc(begin + content.len() as u32), content)
}

fn arg(begin: u32, content: &'static str) -> Argument<'static> {
    Argument::new(
        SourceRange::from_offsets(begin, begin + content.len() as u32),
        content,
    )
}

struct Commands {
    table: CommandTable,
}

impl Commands {
    fn new() -> Self {
        let mut table = CommandTable::new();
        for (name, args) in [("brief", 0), ("param", 1), ("tparam", 1), ("code", 0), ("fn", 0)] {
            table.register(name, args);
        }
        Self { table }
    }

    fn id(&self, name: &str) -> comment_ast::ast::CommandId {
        self.table.lookup(name).expect("registered command")
    }
}

fn copy_decl() -> Decl {
    Decl::FunctionTemplate {
        templated: FunctionDecl::new("copy", vec![ParmVarDecl::new("dst", "T *")], "void"),
        parameters: TemplateParameterList::new(vec![TemplateParameter::Type { name: "T".into() }]),
    }
}

fn build<'a>(commands: &Commands, decl: &'a Decl) -> FullComment<'a> {
    let brief = at("\\brief");
    let em = at("<em>");
    let em_end = at("</em>");
    let brief_paragraph = Paragraph::new(vec![
        text(brief + 6, " Copies ").into(),
        HtmlStartTag::new(loc(em), "em")
            .with_greater_loc(loc(em + 3))
            .into(),
        text(em + 4, "text").into(),
        HtmlEndTag::new(loc(em_end), loc(em_end + 5), "em").into(),
        text(em_end + 5, ".").with_trailing_newline().into(),
    ]);
    let brief = BlockCommand::new(loc(brief), loc(brief + 6), commands.id("brief"))
        .with_paragraph(brief_paragraph);

    let param = at("\\param");
    let param = ParamCommand::new(
        BlockCommand::new(loc(param), loc(param + 6), commands.id("param"))
            .with_args(vec![arg(at("dst"), "dst")])
            .with_paragraph(Paragraph::new(vec![text(at(" Target."), " Target.").into()])),
    )
    .with_direction(PassDirection::Out, true);

    let tparam = at("\\tparam");
    let tparam = TParamCommand::new(
        BlockCommand::new(loc(tparam), loc(tparam + 7), commands.id("tparam"))
            .with_args(vec![arg(tparam + 8, "T")])
            .with_paragraph(Paragraph::new(vec![text(at(" Element."), " Element.").into()])),
    );

    let code = at("\\code");
    let code = VerbatimBlock::new(BlockCommand::new(loc(code), loc(code + 5), commands.id("code")))
        .with_lines(vec![VerbatimBlockLine::new(loc(at("x = 1;")), "x = 1;")])
        .with_close_name("endcode", loc(at("endcode")));

    let function = at("\\fn");
    let body = "void copy(T *dst)";
    let body_begin = at(body);
    let verbatim_line = VerbatimLine::new(
        BlockCommand::new(
            loc(function),
            loc(body_begin + body.len() as u32),
            commands.id("fn"),
        ),
        loc(body_begin),
        body,
    );

    FullComment::new(
        vec![
            brief.into(),
            param.into(),
            tparam.into(),
            code.into(),
            verbatim_line.into(),
        ],
        decl,
    )
}

/// Bind every `\param` and `\tparam` whose name matches the declaration.
fn resolve(full: &FullComment<'_>) {
    let info = full.decl_info();
    for block in full.blocks() {
        match block {
            BlockContent::ParamCommand(param) if param.has_param_name() => {
                if let Some(index) = info
                    .param_vars()
                    .iter()
                    .position(|var| var.name == param.param_name())
                {
                    param.bind(index);
                }
            }
            BlockContent::TParamCommand(tparam) if tparam.has_param_name() => {
                if let Some(position) = info
                    .template_parameters()
                    .and_then(|list| list.position_of(tparam.param_name()))
                {
                    tparam.bind(position);
                }
            }
            _ => {}
        }
    }
}

#[test]
fn test_tree_structure() {
    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);
    resolve(&full);

    assert_comment(&full)
        .block_count(5)
        .decl_kind(DeclKind::Function)
        .block(0, |block| {
            block
                .kind(CommentKind::BlockCommand)
                .assert_block_command()
                .args(&[])
                .paragraph(|paragraph| {
                    paragraph
                        .inline_count(5)
                        .text(" Copies text.")
                        .whitespace(false)
                        .inline(1, |inline| {
                            inline.kind(CommentKind::HtmlStartTag);
                        })
                        .inline(4, |inline| {
                            inline.text(".").trailing_newline(true);
                        });
                });
        })
        .block(1, |block| {
            block
                .assert_param_command()
                .param_name("dst")
                .direction(PassDirection::Out, true)
                .index(0)
                .paragraph(|paragraph| {
                    paragraph.text(" Target.");
                });
        })
        .block(2, |block| {
            block.assert_tparam_command().param_name("T").position(&[0]);
        })
        .block(3, |block| {
            block
                .assert_verbatim_block()
                .lines(&["x = 1;"])
                .close_name("endcode");
        })
        .block(4, |block| {
            block
                .assert_verbatim_line()
                .text("void copy(T *dst)")
                .child_count(0);
        });
}

#[test]
fn test_family_views_of_blocks() {
    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);

    let names: Vec<_> = full
        .children()
        .map(|child| {
            assert!(child.is_block_content());
            child
                .as_block_command()
                .map(|command| command.command_name(&commands.table))
        })
        .collect();
    assert_eq!(
        names,
        vec![
            Some("brief"),
            Some("param"),
            Some("tparam"),
            Some("code"),
            Some("fn")
        ]
    );

    for child in full.children() {
        let command = child.as_block_command().expect("block command family");
        assert_eq!(command.kind(), child.kind());
        assert_eq!(command.location(), child.location());
        assert_eq!(command.source_range(), child.source_range());
    }

    let inline: Vec<_> = descendants(Comment::FullComment(&full))
        .filter(|node| node.is_inline_content())
        .collect();
    assert_eq!(inline.len(), 7);
    let tags: Vec<_> = inline
        .iter()
        .filter_map(|node| node.as_html_tag())
        .map(|tag| (tag.tag_name(), tag.tag_name_range()))
        .collect();
    let em = at("<em>");
    let em_end = at("</em>");
    assert_eq!(
        tags,
        vec![
            ("em", SourceRange::from_offsets(em + 1, em + 3)),
            ("em", SourceRange::from_offsets(em_end + 2, em_end + 4)),
        ]
    );
}

#[test]
fn test_ranges_follow_source() {
    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);

    let brief = &full.blocks()[0];
    assert_eq!(
        brief.source_range(),
        SourceRange::from_offsets(0, at(".\n") + 1)
    );
    assert_eq!(brief.location(), loc(1));

    let param = full.blocks()[1].as_param_command().expect("param");
    assert_eq!(
        param.command().command_name_range(&commands.table),
        SourceRange::from_offsets(at("param"), at("param") + 5)
    );
    assert_eq!(
        param.param_name_range(),
        SourceRange::from_offsets(at("dst"), at("dst") + 3)
    );

    let code = full.blocks()[3].as_verbatim_block().expect("code");
    assert_eq!(
        code.source_range().end,
        loc(at("endcode") + "endcode".len() as u32)
    );

    let line = full.blocks()[4].as_verbatim_line().expect("fn");
    assert_eq!(
        &SOURCE[line.text_range().begin.offset().unwrap() as usize
            ..line.text_range().end.offset().unwrap() as usize],
        "void copy(T *dst)"
    );

    assert_eq!(full.source_range().begin, loc(0));
    assert_eq!(full.source_range().end, line.source_range().end);
    for node in descendants(Comment::FullComment(&full)) {
        for child in node.children() {
            assert!(
                node.source_range().contains_range(&child.source_range()),
                "{node:?} does not contain {child:?}"
            );
        }
    }
}

#[test]
fn test_visitor_matches_descendants() {
    #[derive(Default)]
    struct Recorder {
        visited: Vec<CommentKind>,
        left: usize,
        params: Vec<String>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit_full_comment(&mut self, _full: &FullComment<'a>) {
            self.visited.push(CommentKind::FullComment);
        }
        fn leave_full_comment(&mut self, _full: &FullComment<'a>) {
            self.left += 1;
        }
        fn visit_paragraph(&mut self, _paragraph: &Paragraph<'a>) {
            self.visited.push(CommentKind::Paragraph);
        }
        fn leave_paragraph(&mut self, _paragraph: &Paragraph<'a>) {
            self.left += 1;
        }
        fn visit_block_command(&mut self, _command: &BlockCommand<'a>) {
            self.visited.push(CommentKind::BlockCommand);
        }
        fn visit_param_command(&mut self, param: &ParamCommand<'a>) {
            self.visited.push(CommentKind::ParamCommand);
            self.params.push(param.param_name().to_string());
        }
        fn visit_tparam_command(&mut self, _tparam: &TParamCommand<'a>) {
            self.visited.push(CommentKind::TParamCommand);
        }
        fn visit_verbatim_block(&mut self, _block: &VerbatimBlock<'a>) {
            self.visited.push(CommentKind::VerbatimBlock);
        }
        fn visit_text(&mut self, _text: &Text<'a>) {
            self.visited.push(CommentKind::Text);
        }
        fn visit_html_start_tag(&mut self, _tag: &HtmlStartTag<'a>) {
            self.visited.push(CommentKind::HtmlStartTag);
        }
        fn visit_html_end_tag(&mut self, _tag: &HtmlEndTag<'a>) {
            self.visited.push(CommentKind::HtmlEndTag);
        }
        fn visit_verbatim_block_line(&mut self, _line: &VerbatimBlockLine<'a>) {
            self.visited.push(CommentKind::VerbatimBlockLine);
        }
        fn visit_verbatim_line(&mut self, _line: &VerbatimLine<'a>) {
            self.visited.push(CommentKind::VerbatimLine);
        }
    }

    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);

    let mut recorder = Recorder::default();
    full.accept(&mut recorder);

    let expected: Vec<_> = descendants(Comment::FullComment(&full))
        .map(|node| node.kind())
        .collect();
    assert_eq!(recorder.visited, expected);
    // One full comment and three paragraphs.
    assert_eq!(recorder.left, 4);
    assert_eq!(recorder.params, vec!["dst".to_string()]);
}

#[test]
fn test_blocks_dispatch_to_their_own_visit() {
    #[derive(Default)]
    struct Counter {
        block: usize,
        param: usize,
        tparam: usize,
        verbatim: usize,
        lines: usize,
    }

    impl<'a> Visitor<'a> for Counter {
        fn visit_block_command(&mut self, _command: &BlockCommand<'a>) {
            self.block += 1;
        }
        fn visit_param_command(&mut self, _param: &ParamCommand<'a>) {
            self.param += 1;
        }
        fn visit_tparam_command(&mut self, _tparam: &TParamCommand<'a>) {
            self.tparam += 1;
        }
        fn visit_verbatim_block(&mut self, _block: &VerbatimBlock<'a>) {
            self.verbatim += 1;
        }
        fn visit_verbatim_block_line(&mut self, _line: &VerbatimBlockLine<'a>) {
            self.lines += 1;
        }
    }

    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);
    let children: Vec<_> = full.children().collect();

    let mut counter = Counter::default();
    children[1].accept(&mut counter);
    assert_eq!((counter.block, counter.param), (0, 1));

    let mut counter = Counter::default();
    children[2].accept(&mut counter);
    assert_eq!((counter.block, counter.tparam), (0, 1));

    let mut counter = Counter::default();
    children[3].accept(&mut counter);
    assert_eq!((counter.block, counter.verbatim, counter.lines), (0, 1, 1));
    assert_eq!(children[3].child_count(), 1);
    assert_eq!(
        children[3].as_block_command().map(|command| command.kind()),
        Some(CommentKind::VerbatimBlock)
    );
}

#[test]
fn test_unmatched_names_stay_unresolved() {
    let commands = Commands::new();
    let decl = Decl::Function(FunctionDecl::new(
        "copy",
        vec![ParmVarDecl::new("target", "char *")],
        "void",
    ));
    let full = build(&commands, &decl);
    resolve(&full);

    assert_eq!(full.decl_info().template_kind(), TemplateDeclKind::NotTemplate);
    assert_comment(&full)
        .block(1, |block| {
            block.assert_param_command().param_name("dst").unresolved();
        })
        .block(2, |block| {
            block.assert_tparam_command().unresolved();
        });
}

#[test]
fn test_dump_with_default_config() {
    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);
    resolve(&full);

    let config = load_defaults().expect("defaults to load");
    let snapshot = snapshot_from_full_comment(&full, &config.snapshot, Some(&commands.table));
    insta::assert_snapshot!(snapshot.dump(config.snapshot.label_width), @r#"
FullComment "copy" decl=function params=dst template=template
  BlockCommandComment "brief"
    ParagraphComment
      TextComment " Copies "
      HTMLStartTagComment "em"
      TextComment "text"
      HTMLEndTagComment "em"
      TextComment "."
  ParamCommandComment "param" direction=[out] explicit=true index=0 param=dst
    ParagraphComment
      TextComment " Target."
  TParamCommandComment "tparam" param=T position=0
    ParagraphComment
      TextComment " Element."
  VerbatimBlockComment "code" close=endcode
    VerbatimBlockLineComment "x = 1;"
  VerbatimLineComment "fn" text="void copy(T *dst)"
"#);
}

#[test]
fn test_snapshot_serializes() {
    let commands = Commands::new();
    let decl = copy_decl();
    let full = build(&commands, &decl);

    let config = load_defaults().expect("defaults to load");
    let snapshot = snapshot_from_full_comment(&full, &config.snapshot, Some(&commands.table));
    assert_eq!(snapshot.node_count(), 17);

    let json = snapshot.to_json().expect("json");
    let back: comment_ast::ast::CommentSnapshot = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, snapshot);
    let yaml = snapshot.to_yaml().expect("yaml");
    assert!(yaml.contains("node_type: VerbatimLineComment"));
}
