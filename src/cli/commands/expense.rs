use dialoguer::Input;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::render;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::ledger::{category_totals, sort_by_amount, Record};

pub(crate) const ADD_USAGE: &str = "add <YYYY-MM-DD> <amount> <category> [description...]";
pub(crate) const LIST_USAGE: &str = "list [date|amount]";
pub(crate) const FIND_USAGE: &str = "find <YYYY-MM-DD>";

fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}

/// Converts raw amount text, rejecting anything that is not a finite number.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidAmount(raw.to_string()))
}

pub(crate) fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.mode == CliMode::Interactive {
        return prompt_add(context);
    }
    let [date, amount, category, description @ ..] = args else {
        return Err(usage(ADD_USAGE));
    };
    let amount = parse_amount(amount)?;
    add_expense(context, date, amount, category, &description.join(" "))
}

fn prompt_add(context: &mut ShellContext) -> CommandResult {
    let date: String = Input::with_theme(&context.theme)
        .with_prompt("Enter date (YYYY-MM-DD)")
        .interact_text()?;
    let amount: String = Input::with_theme(&context.theme)
        .with_prompt("Enter amount")
        .interact_text()?;
    let amount = parse_amount(&amount)?;
    let category: String = Input::with_theme(&context.theme)
        .with_prompt("Enter category")
        .interact_text()?;
    let description: String = Input::with_theme(&context.theme)
        .with_prompt("Enter description")
        .allow_empty(true)
        .interact_text()?;
    add_expense(context, date.trim(), amount, &category, &description)
}

fn add_expense(
    context: &mut ShellContext,
    date: &str,
    amount: f64,
    category: &str,
    description: &str,
) -> CommandResult {
    let category = category.trim();
    if category.is_empty() {
        return Err(CommandError::InvalidArguments(
            "category must not be empty".into(),
        ));
    }
    context.ledger.insert(date, amount, category, description)?;
    output::success("Expense added successfully!");
    Ok(())
}

pub(crate) fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let by_amount = match args {
        [] => false,
        [order] if order.eq_ignore_ascii_case("date") => false,
        [order] if order.eq_ignore_ascii_case("amount") => true,
        _ => return Err(usage(LIST_USAGE)),
    };

    if context.ledger.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }

    let snapshot = context.ledger.snapshot();
    let records = if by_amount {
        sort_by_amount(&snapshot)
    } else {
        snapshot
    };
    show_records(context, "Expense List", &records);
    Ok(())
}

pub(crate) fn cmd_find(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [date] = args else {
        return Err(usage(FIND_USAGE));
    };
    let found = context.ledger.find_by_date(date)?;
    if found.is_empty() {
        output::info("No expenses found for this date.");
    } else {
        show_records(context, "Found Expenses", &found);
    }
    Ok(())
}

pub(crate) fn cmd_analyze(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.ledger.is_empty() {
        output::info("No expenses to analyze.");
        return Ok(());
    }
    let totals = category_totals(context.ledger.records());
    output::section("Analysis");
    output::block(&render::category_chart(
        &totals,
        &context.config.currency_symbol,
        context.config.chart_width,
    ));
    Ok(())
}

fn show_records(context: &ShellContext, title: &str, records: &[Record]) {
    output::section(title);
    output::block(&render::record_table(
        records,
        &context.config.currency_symbol,
    ));
}
