use std::collections::BTreeMap;

use super::record::Record;

/// Per-category sums, iterated alphabetically by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    totals: BTreeMap<String, f64>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Percentage of the grand total held by `category`, or `None` when the
    /// category is absent or the totals sum to zero.
    pub fn share(&self, category: &str) -> Option<f64> {
        let total = self.grand_total();
        if total == 0.0 {
            return None;
        }
        self.get(category).map(|amount| amount / total * 100.0)
    }
}

/// Sums amounts per exact category label.
pub fn category_totals(records: &[Record]) -> CategoryTotals {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.category().to_string()).or_insert(0.0) += record.amount();
    }
    CategoryTotals { totals }
}
