//! The fixed command table consulted by dispatch, help and completion.

pub mod expense;
pub mod system;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

/// Commands in the order `help` lists them.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "add",
        description: "Record a new expense",
        usage: expense::ADD_USAGE,
        handler: expense::cmd_add,
    },
    CommandEntry {
        name: "list",
        description: "View expenses sorted by date or amount",
        usage: expense::LIST_USAGE,
        handler: expense::cmd_list,
    },
    CommandEntry {
        name: "find",
        description: "Search expenses by date",
        usage: expense::FIND_USAGE,
        handler: expense::cmd_find,
    },
    CommandEntry {
        name: "analyze",
        description: "Chart spending by category",
        usage: "analyze",
        handler: expense::cmd_analyze,
    },
    CommandEntry {
        name: "config",
        description: "Show or change display settings",
        usage: system::CONFIG_USAGE,
        handler: system::cmd_config,
    },
    CommandEntry {
        name: "version",
        description: "Show build metadata",
        usage: "version",
        handler: system::cmd_version,
    },
    CommandEntry {
        name: "help",
        description: "Show available commands",
        usage: "help [command]",
        handler: system::cmd_help,
    },
    CommandEntry {
        name: "exit",
        description: "Exit the tracker",
        usage: "exit",
        handler: system::cmd_exit,
    },
];

/// Looks up a command by its lowercase name.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|entry| entry.name)
}
