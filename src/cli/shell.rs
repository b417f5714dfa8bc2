use std::io::{self, BufRead, StdinLock};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    history::DefaultHistory,
    Cmd, Context as ReadlineContext, Editor, Helper, Highlighter, Hinter, KeyEvent, Validator,
};

use super::commands;
use super::core::{CliError, LoopControl};
use super::output;
use super::shell_context::{CliMode, ShellContext};

/// Environment variable that switches the shell to line-by-line stdin scripting.
pub const SCRIPT_ENV: &str = "EXPENSE_LEDGER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode);
    let mut input = match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()?;
            editor.set_helper(Some(CommandCompleter));
            editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
            output::section("Personal Expense Tracker");
            output::info("Type `help` to see available commands.");
            LineSource::Editor(Box::new(editor))
        }
        CliMode::Script => LineSource::Stdin(io::stdin().lock()),
    };

    while context.running {
        let Some(line) = input.next_line(&context)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let LineSource::Editor(editor) = &mut input {
            editor.add_history_entry(line).ok();
        }

        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

/// Where shell lines come from: the line editor or piped stdin.
enum LineSource {
    Editor(Box<Editor<CommandCompleter, DefaultHistory>>),
    Stdin(StdinLock<'static>),
}

impl LineSource {
    /// Next line to run, or `None` once the session should end.
    fn next_line(&mut self, context: &ShellContext) -> Result<Option<String>, CliError> {
        match self {
            Self::Stdin(stdin) => {
                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line))
            }
            Self::Editor(editor) => loop {
                match editor.readline(&context.prompt()) {
                    Ok(line) => return Ok(Some(line)),
                    Err(ReadlineError::Interrupted) => {
                        if context.confirm_exit()? {
                            return Ok(None);
                        }
                    }
                    Err(ReadlineError::Eof) => {
                        output::info("Exiting shell.");
                        return Ok(None);
                    }
                    Err(err) => return Err(err.into()),
                }
            },
        }
    }
}

/// Completes the command word from the fixed command table.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_command(line, pos))
    }
}

fn complete_command(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let prefix = line.get(..pos).unwrap_or(line);
    let word = prefix.trim_start();
    // Arguments are free-form.
    if word.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }
    let needle = word.to_ascii_lowercase();
    let candidates = commands::names()
        .filter(|name| name.starts_with(&needle))
        .map(|name| Pair {
            display: name.to_string(),
            replacement: name.to_string(),
        })
        .collect();
    (prefix.len() - word.len(), candidates)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}
