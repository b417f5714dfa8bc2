//! Plain-text renderers for record tables and the category distribution chart.
//!
//! Renderers only format what they are given; ordering and totals come from
//! the ledger engines.

use std::fmt::Write;

use crate::ledger::{CategoryTotals, Record, DATE_FORMAT};

const RULE_WIDTH: usize = 80;
const DATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 15;
const DESCRIPTION_WIDTH: usize = 30;

pub const CHART_TITLE: &str = "Expense Distribution by Category";
pub const EMPTY_CHART: &str = "Nothing to display.";

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Formats `amount` with two decimals behind `symbol`, padded to `width` columns.
pub fn money(symbol: &str, amount: f64, width: usize) -> String {
    let digits = width.saturating_sub(symbol.chars().count());
    format!("{symbol}{amount:>digits$.2}")
}

/// Renders records as a fixed-width table in the order given.
pub fn record_table(records: &[Record], currency_symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let header = format!(
        "{:<DATE_WIDTH$} {:>AMOUNT_WIDTH$} {:<CATEGORY_WIDTH$} {:<DESCRIPTION_WIDTH$}",
        "Date", "Amount", "Category", "Description"
    );
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", rule());
    for record in records {
        let line = format!(
            "{:<DATE_WIDTH$} {} {:<CATEGORY_WIDTH$} {:<DESCRIPTION_WIDTH$}",
            record.date().format(DATE_FORMAT).to_string(),
            money(currency_symbol, record.amount(), AMOUNT_WIDTH),
            record.category(),
            record.description()
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    let _ = writeln!(out, "{}", rule());
    out
}

/// Renders one bar per category, scaled to `width` columns at 100%.
///
/// Empty totals render a single "nothing to display" line rather than failing.
pub fn category_chart(totals: &CategoryTotals, currency_symbol: &str, width: usize) -> String {
    if totals.is_empty() {
        return format!("{EMPTY_CHART}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    let _ = writeln!(out, "{}", rule());
    for (category, amount) in totals.iter() {
        let percent = totals.share(category).unwrap_or(0.0);
        let line = format!(
            "{:<CATEGORY_WIDTH$} {:<width$} {:>6.1}% {}",
            category,
            bar(percent, width),
            percent,
            money(currency_symbol, amount, AMOUNT_WIDTH)
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    let _ = writeln!(out, "{}", rule());
    let total_line = format!(
        "{:<CATEGORY_WIDTH$} {:<width$} {:>7} {}",
        "Total",
        "",
        "",
        money(currency_symbol, totals.grand_total(), AMOUNT_WIDTH)
    );
    let _ = writeln!(out, "{}", total_line.trim_end());
    out
}

fn bar(percent: f64, width: usize) -> String {
    let fraction = (percent.abs() / 100.0).min(1.0);
    // Rounded fraction of a small terminal width always fits in usize.
    let filled = (fraction * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}
