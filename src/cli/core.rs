//! Command dispatch, error reporting and the error types shared by the shell.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::errors::{ConfigError, LedgerError};

use super::output;
use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command; reported to the user without ending the session.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Invalid amount `{0}`! Please enter a number.")]
    InvalidAmount(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that ends the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(entry) = super::commands::lookup(command) {
            match (entry.handler)(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one line of input.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = super::commands::names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Exit the expense tracker?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                tracing::warn!(command = ?self.last_command, %message, "rejected command");
                output::error(&message);
                output::info("Use `help` for usage details.");
            }
            other => {
                tracing::warn!(command = ?self.last_command, error = %other, "command failed");
                output::error(&other);
            }
        }
    }
}

/// Runs a sequence of lines against a fresh script-mode session.
#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> ShellContext {
    let mut context =
        ShellContext::with_config(CliMode::Script, None, crate::config::Config::default());
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_commands_build_a_date_ordered_ledger() {
        let context = process_script(&[
            r#"add 2024-03-05 20.0 Food lunch"#,
            r#"add 2024-03-01 15 Travel "bus ticket""#,
            r#"add 2024-03-05 5 Food coffee"#,
        ]);

        let descriptions: Vec<&str> = context
            .ledger
            .records()
            .iter()
            .map(|record| record.description())
            .collect();
        assert_eq!(descriptions, ["bus ticket", "lunch", "coffee"]);
    }

    #[test]
    fn invalid_input_does_not_touch_ledger() {
        let context = process_script(&[
            "add 2024-02-30 10 Food bad-date",
            "add 2024-03-01 ten Food bad-amount",
            "add 2024-03-01 NaN Food not-a-number",
            "add 2024-03-01",
        ]);
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn exit_stops_processing() {
        let context = process_script(&[
            "add 2024-03-01 1 Food first",
            "exit",
            "add 2024-03-02 1 Food ignored",
        ]);
        assert_eq!(context.ledger.len(), 1);
        assert!(!context.running);
    }

    #[test]
    fn commands_are_case_insensitive() {
        let context = process_script(&["ADD 2024-03-01 1 Food first"]);
        assert_eq!(context.ledger.len(), 1);
        assert_eq!(context.last_command.as_deref(), Some("ADD 2024-03-01 1 Food first"));
    }

    #[test]
    fn unknown_commands_are_not_fatal() {
        let mut context =
            ShellContext::with_config(CliMode::Script, None, crate::config::Config::default());
        let control = context.process_line("lsit").expect("unknown command reported");
        assert_eq!(control, LoopControl::Continue);
        assert!(context.running);
    }
}
