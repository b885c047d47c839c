//! Comment snapshot - a normalized, serializable view of a comment tree
//!
//! A [`CommentSnapshot`] records each node's kind name, a label and a flat map of
//! attributes, plus its children. It is built by one canonical traversal
//! ([`snapshot_from_comment`]) so the JSON, YAML and text outputs never disagree about what
//! a node contains.
//!
//! Command nodes are labeled with their canonical name when a [`CommandTraits`] registry is
//! supplied, and with their raw ID otherwise.

use super::commands::{CommandId, CommandTraits};
use super::elements::{Attribute, FullComment};
use super::error::CommentResult;
use super::kind::CommentKind;
use super::node::Comment;
use super::traits::HtmlTag;
use crate::config::SnapshotConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A snapshot of one node and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSnapshot {
    /// Kind name of the node, e.g. `"ParagraphComment"`
    pub node_type: String,

    /// Text content or command name
    pub label: String,

    pub attributes: BTreeMap<String, String>,

    pub children: Vec<CommentSnapshot>,
}

impl CommentSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    /// Append `children` after any existing ones.
    pub fn with_children(mut self, children: impl IntoIterator<Item = CommentSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this snapshot, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CommentSnapshot::node_count).sum::<usize>()
    }

    pub fn to_json(&self) -> CommentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> CommentResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Indented text tree, one node per line.
    ///
    /// Each line is the node type, then the quoted label if there is one, then the
    /// attributes as `key=value` in key order. Labels longer than `label_width`
    /// characters are cut and end in `...`; a width of 0 keeps them whole.
    pub fn dump(&self, label_width: usize) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0, label_width);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize, label_width: usize) {
        let _ = write!(out, "{}{}", "  ".repeat(depth), self.node_type);
        if !self.label.is_empty() {
            let _ = write!(out, " \"{}\"", truncate(&self.label, label_width));
        }
        for (key, value) in &self.attributes {
            let _ = write!(out, " {key}={value}");
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1, label_width);
        }
    }
}

fn truncate(label: &str, width: usize) -> String {
    let escaped = label.escape_debug().to_string();
    if width == 0 || escaped.chars().count() <= width {
        return escaped;
    }
    let kept: String = escaped.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn command_label(id: CommandId, traits: Option<&dyn CommandTraits>) -> String {
    match traits {
        Some(traits) => traits.command_name(id).to_string(),
        None => id.to_string(),
    }
}

fn args_attribute<'a>(args: impl IntoIterator<Item = &'a str>) -> String {
    args.into_iter().collect::<Vec<_>>().join(",")
}

fn attributes_attribute(attributes: &[Attribute<'_>]) -> String {
    attributes
        .iter()
        .map(|attribute| match attribute.value_text() {
            Some(value) => format!("{}=\"{}\"", attribute.name, value),
            None => attribute.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a snapshot of `node` and all of its descendants.
pub fn snapshot_from_comment(
    node: Comment<'_, '_>,
    config: &SnapshotConfig,
    traits: Option<&dyn CommandTraits>,
) -> CommentSnapshot {
    let mut snapshot = match node {
        Comment::Text(text) => CommentSnapshot::new(node.kind_name(), text.text()),
        Comment::InlineCommand(command) => {
            let mut snapshot = CommentSnapshot::new(
                node.kind_name(),
                command_label(command.command_id(), traits),
            )
            .with_attribute("render", command.render_kind());
            if command.num_args() > 0 {
                snapshot = snapshot.with_attribute(
                    "args",
                    args_attribute(command.args().iter().map(|arg| arg.text)),
                );
            }
            snapshot
        }
        Comment::HtmlStartTag(tag) => {
            let mut snapshot = CommentSnapshot::new(node.kind_name(), tag.tag_name());
            if tag.num_attrs() > 0 {
                snapshot =
                    snapshot.with_attribute("attrs", attributes_attribute(tag.attributes()));
            }
            if tag.is_self_closing() {
                snapshot = snapshot.with_attribute("self_closing", true);
            }
            snapshot
        }
        Comment::HtmlEndTag(tag) => CommentSnapshot::new(node.kind_name(), tag.tag_name()),
        Comment::Paragraph(paragraph) => {
            let snapshot = CommentSnapshot::new(node.kind_name(), "");
            if paragraph.is_whitespace() {
                snapshot.with_attribute("whitespace", true)
            } else {
                snapshot
            }
        }
        Comment::BlockCommand(_)
        | Comment::ParamCommand(_)
        | Comment::TParamCommand(_)
        | Comment::VerbatimBlock(_)
        | Comment::VerbatimLine(_) => block_command_snapshot(node, traits),
        Comment::VerbatimBlockLine(line) => CommentSnapshot::new(node.kind_name(), line.text()),
        Comment::FullComment(full) => full_comment_snapshot(full, config),
    };

    if config.include_ranges {
        snapshot = snapshot.with_attribute("range", node.source_range());
    }
    snapshot.with_children(
        node.children().map(|child| snapshot_from_comment(child, config, traits)),
    )
}

fn block_command_snapshot(
    node: Comment<'_, '_>,
    traits: Option<&dyn CommandTraits>,
) -> CommentSnapshot {
    let Some(command) = node.as_block_command() else {
        return CommentSnapshot::new(node.kind_name(), "");
    };
    let mut snapshot =
        CommentSnapshot::new(node.kind_name(), command_label(command.command_id(), traits));

    match node {
        Comment::ParamCommand(param) => {
            snapshot = snapshot
                .with_attribute("direction", param.direction())
                .with_attribute("explicit", param.is_direction_explicit());
            if param.has_param_name() {
                snapshot = snapshot.with_attribute("param", param.param_name());
            }
            if param.is_param_index_valid() {
                snapshot = snapshot.with_attribute("index", param.param_index());
            }
        }
        Comment::TParamCommand(tparam) => {
            if tparam.has_param_name() {
                snapshot = snapshot.with_attribute("param", tparam.param_name());
            }
            if tparam.is_position_valid() {
                let position = tparam
                    .position()
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                snapshot = snapshot.with_attribute("position", position);
            }
        }
        Comment::VerbatimBlock(block) => {
            if !block.close_name().is_empty() {
                snapshot = snapshot.with_attribute("close", block.close_name());
            }
        }
        Comment::VerbatimLine(line) => {
            snapshot = snapshot.with_attribute("text", format!("{:?}", line.text()));
        }
        _ => {
            if command.num_args() > 0 {
                snapshot = snapshot.with_attribute(
                    "args",
                    args_attribute(command.args().iter().map(|arg| arg.text)),
                );
            }
        }
    }
    snapshot
}

fn full_comment_snapshot(full: &FullComment<'_>, config: &SnapshotConfig) -> CommentSnapshot {
    let decl = full.decl();
    let snapshot = CommentSnapshot::new(CommentKind::FullComment.name(), decl.name());
    if !config.include_decl_info {
        return snapshot;
    }
    let info = full.decl_info();
    let mut snapshot = snapshot
        .with_attribute("decl", info.kind())
        .with_attribute("template", info.template_kind().as_str());
    if !info.param_vars().is_empty() {
        snapshot = snapshot.with_attribute(
            "params",
            args_attribute(info.param_vars().iter().map(|param| param.name.as_str())),
        );
    }
    if info.is_instance_method() {
        snapshot = snapshot.with_attribute("method", "instance");
    } else if info.is_class_method() {
        snapshot = snapshot.with_attribute("method", "class");
    }
    snapshot
}

/// Snapshot of a whole comment.
pub fn snapshot_from_full_comment(
    full: &FullComment<'_>,
    config: &SnapshotConfig,
    traits: Option<&dyn CommandTraits>,
) -> CommentSnapshot {
    snapshot_from_comment(Comment::FullComment(full), config, traits)
}
