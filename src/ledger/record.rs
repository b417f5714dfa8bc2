use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Textual pattern accepted for record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date, rejecting impossible calendar days.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields ("2024-3-5"); the ledger format does not.
    let well_formed = raw.len() == 10
        && raw.char_indices().all(|(idx, ch)| match idx {
            4 | 7 => ch == '-',
            _ => ch.is_ascii_digit(),
        });
    if !well_formed {
        return Err(LedgerError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// One immutable expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    date: NaiveDate,
    amount: f64,
    category: String,
    description: String,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Builds a record from the textual date form used at the shell boundary.
    pub fn parse(
        date: &str,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let date = parse_date(date)?;
        Ok(Self::new(date, amount, category, description))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
