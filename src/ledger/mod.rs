//! Expense records and the in-memory engines that order, sort and summarise them.

pub mod ordered;
pub mod record;
pub mod sort;
pub mod summary;

pub use ordered::OrderedLedger;
pub use record::{parse_date, Record, DATE_FORMAT};
pub use sort::sort_by_amount;
pub use summary::{category_totals, CategoryTotals};
