//! Interactive and scripted shell around the expense ledger.

pub mod commands;
pub mod core;
pub mod output;
pub mod render;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV};
