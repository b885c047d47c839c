//! Command identifiers and the registry seam
//!
//! Nodes never store a command spelling, only the [`CommandId`] the parser resolved it to.
//! Anything that needs the canonical name (dumps, name ranges) asks a [`CommandTraits`]
//! implementation. The real registry lives with the parser; [`CommandTable`] is a plain
//! list-backed registry for tools and tests.

use super::error::CommentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle into the command registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommandId(pub u32);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static properties of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    /// Number of word-like arguments the parser collects.
    pub num_args: usize,
}

/// Lookup from command IDs to their properties.
pub trait CommandTraits {
    /// Properties of `id`, or `None` if this registry never handed it out.
    fn command_info(&self, id: CommandId) -> Option<&CommandInfo>;

    /// Canonical name of a command.
    ///
    /// # Panics
    ///
    /// Panics if `id` is unknown to this registry. IDs come from the same registry
    /// that the parser used, so a miss is a programming error.
    fn command_name(&self, id: CommandId) -> &str {
        match self.command_info(id) {
            Some(info) => &info.name,
            None => panic!("{}", CommentError::UnknownCommand { id }),
        }
    }
}

/// Registry that hands out IDs in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<CommandInfo>,
}

impl CommandTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, returning its ID. Re-registering a name returns the existing ID.
    pub fn register(&mut self, name: impl Into<String>, num_args: usize) -> CommandId {
        let name = name.into();
        if let Some(id) = self.lookup(&name) {
            return id;
        }
        self.commands.push(CommandInfo { name, num_args });
        CommandId((self.commands.len() - 1) as u32)
    }

    /// ID of a registered command, matched by exact spelling.
    pub fn lookup(&self, name: &str) -> Option<CommandId> {
        self.commands
            .iter()
            .position(|info| info.name == name)
            .map(|index| CommandId(index as u32))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandTraits for CommandTable {
    fn command_info(&self, id: CommandId) -> Option<&CommandInfo> {
        self.commands.get(id.0 as usize)
    }
}
