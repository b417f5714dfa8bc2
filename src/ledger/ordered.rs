use chrono::NaiveDate;
use tracing::debug;

use super::record::{parse_date, Record};
use crate::errors::Result;

/// Canonical expense collection, kept sorted by date at all times.
///
/// Records sharing a date keep their insertion order. The ledger only grows;
/// callers read through [`OrderedLedger::snapshot`] or the borrowed
/// [`OrderedLedger::records`] view, neither of which can reorder it.
#[derive(Debug, Clone, Default)]
pub struct OrderedLedger {
    records: Vec<Record>,
}

impl OrderedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `date` and places the new record after every record dated on or
    /// before it. A rejected date leaves the ledger untouched.
    pub fn insert(
        &mut self,
        date: &str,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let record = Record::parse(date, amount, category, description)?;
        self.insert_record(record);
        Ok(())
    }

    /// Inserts an already validated record, shifting it left past later dates.
    pub fn insert_record(&mut self, record: Record) {
        let mut idx = self.records.len();
        self.records.push(record);
        while idx > 0 && self.records[idx - 1].date() > self.records[idx].date() {
            self.records.swap(idx - 1, idx);
            idx -= 1;
        }
        debug!(
            index = idx,
            shifts = self.records.len() - 1 - idx,
            "ledger record placed"
        );
    }

    /// Owned copy of the records in date order.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns every record dated `date`.
    ///
    /// Matches come back in discovery order: the binary-search hit first, then
    /// its equal-dated neighbours walking left, then walking right. Within a
    /// run of equal dates the result is therefore not in insertion order.
    pub fn find_by_date(&self, date: &str) -> Result<Vec<Record>> {
        let target = parse_date(date)?;
        let matches = match self.search(target) {
            Some(hit) => self.expand_run(hit, target),
            None => Vec::new(),
        };
        debug!(%target, matches = matches.len(), "ledger date lookup");
        Ok(matches)
    }

    fn search(&self, target: NaiveDate) -> Option<usize> {
        let mut lo = 0usize;
        let mut hi = self.records.len();
        // Half-open bounds; the midpoint matches the inclusive (lo + hi) / 2 form.
        while lo < hi {
            let mid = lo + (hi - 1 - lo) / 2;
            let current = self.records[mid].date();
            if current == target {
                return Some(mid);
            }
            if current < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        None
    }

    fn expand_run(&self, hit: usize, target: NaiveDate) -> Vec<Record> {
        let mut matches = vec![self.records[hit].clone()];
        matches.extend(
            self.records[..hit]
                .iter()
                .rev()
                .take_while(|record| record.date() == target)
                .cloned(),
        );
        matches.extend(
            self.records[hit + 1..]
                .iter()
                .take_while(|record| record.date() == target)
                .cloned(),
        );
        matches
    }
}
