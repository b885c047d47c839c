//! Property-based tests over generated comment trees
//!
//! Trees are laid out left to right over a virtual source: every block is either a bare
//! paragraph or a `\brief`-style command owning one, and every paragraph is a run of text
//! nodes with strictly increasing offsets. The properties below must hold for any such tree.

use comment_ast::ast::{
    descendants, BlockCommand, BlockContent, CommandTable, Comment, CommentKind, Decl,
    FullComment, InlineContent, Paragraph, SourceLocation, Text,
};
use proptest::prelude::*;

/// One block: whether it is wrapped in a command, and the words of its paragraph.
type BlockShape = (bool, Vec<String>);

fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain words
        "[a-z]{1,8}",
        // Whitespace-only runs
        "[ \t]{1,3}",
        // Mixed
        "[a-z ]{1,6}",
    ]
}

fn shape_strategy() -> impl Strategy<Value = Vec<BlockShape>> {
    prop::collection::vec(
        (any::<bool>(), prop::collection::vec(word_strategy(), 1..6)),
        0..6,
    )
}

fn build<'a>(shape: &'a [BlockShape], table: &CommandTable, decl: &'a Decl) -> FullComment<'a> {
    let brief = table.lookup("brief").expect("registered command");
    let mut cursor = 0u32;
    let mut blocks: Vec<BlockContent<'a>> = Vec::new();
    for (wrapped, words) in shape {
        let command_begin = cursor;
        if *wrapped {
            cursor += "\\brief".len() as u32;
        }
        let content = words
            .iter()
            .map(|word| {
                let begin = cursor;
                cursor += word.len() as u32;
                InlineContent::from(Text::new(
                    SourceLocation::new(begin),
                    SourceLocation::new(cursor),
                    word.as_str(),
                ))
            })
            .collect();
        let paragraph = Paragraph::new(content);
        if *wrapped {
            let command = BlockCommand::new(
                SourceLocation::new(command_begin),
                SourceLocation::new(command_begin + "\\brief".len() as u32),
                brief,
            )
            .with_paragraph(paragraph);
            blocks.push(command.into());
        } else {
            blocks.push(paragraph.into());
        }
        cursor += 1;
    }
    FullComment::new(blocks, decl)
}

fn table() -> CommandTable {
    let mut table = CommandTable::new();
    table.register("brief", 0);
    table
}

fn decl() -> Decl {
    Decl::Other {
        name: "generated".into(),
    }
}

proptest! {
    #[test]
    fn child_count_matches_enumeration(shape in shape_strategy()) {
        let table = table();
        let decl = decl();
        let full = build(&shape, &table, &decl);
        for node in descendants(Comment::FullComment(&full)) {
            let children = node.children();
            prop_assert_eq!(children.len(), node.child_count());
            prop_assert_eq!(children.count(), node.child_count());
            // A second pass sees the same children.
            prop_assert_eq!(node.children().count(), node.child_count());
        }
    }

    #[test]
    fn children_lie_inside_their_parent(shape in shape_strategy()) {
        let table = table();
        let decl = decl();
        let full = build(&shape, &table, &decl);
        for node in descendants(Comment::FullComment(&full)) {
            let range = node.source_range();
            for child in node.children() {
                prop_assert!(
                    range.contains_range(&child.source_range()),
                    "{:?} at {} escapes {:?} at {}",
                    child,
                    child.source_range(),
                    node,
                    range
                );
            }
        }
    }

    #[test]
    fn children_belong_to_the_expected_family(shape in shape_strategy()) {
        let table = table();
        let decl = decl();
        let full = build(&shape, &table, &decl);
        for node in descendants(Comment::FullComment(&full)) {
            for child in node.children() {
                match node.kind() {
                    CommentKind::FullComment => prop_assert!(child.is_block_content()),
                    CommentKind::Paragraph => prop_assert!(child.is_inline_content()),
                    CommentKind::BlockCommand => {
                        prop_assert_eq!(child.kind(), CommentKind::Paragraph)
                    }
                    kind => prop_assert!(false, "{} should have no children", kind),
                }
            }
        }
    }

    #[test]
    fn descendants_visit_every_node_once(shape in shape_strategy()) {
        let table = table();
        let decl = decl();
        let full = build(&shape, &table, &decl);
        let expected: usize = 1 + shape
            .iter()
            .map(|(wrapped, words)| usize::from(*wrapped) + 1 + words.len())
            .sum::<usize>();
        prop_assert_eq!(descendants(Comment::FullComment(&full)).count(), expected);
    }

    #[test]
    fn paragraph_whitespace_matches_its_text(shape in shape_strategy()) {
        let table = table();
        let decl = decl();
        let full = build(&shape, &table, &decl);
        for (block, (_, words)) in full.blocks().iter().zip(&shape) {
            let paragraph = match block {
                BlockContent::Paragraph(paragraph) => paragraph,
                BlockContent::BlockCommand(command) => {
                    command
                        .command()
                        .paragraph()
                        .expect("generated commands own a paragraph")
                }
                other => panic!("unexpected block {:?}", other.as_comment()),
            };
            let expected = words
                .iter()
                .all(|word| word.chars().all(|c| c == ' ' || c == '\t'));
            prop_assert_eq!(paragraph.is_whitespace(), expected);
            // Cached answer is stable.
            prop_assert_eq!(paragraph.is_whitespace(), expected);
        }
    }
}
