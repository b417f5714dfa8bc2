use super::record::Record;

/// Returns a new vector ordered by non-decreasing amount.
///
/// Recursive merge sort: the left half takes `len / 2` records and wins ties,
/// so records with equal amounts keep their input order. The input is never
/// touched, which lets callers sort a ledger snapshot without disturbing the
/// canonical date order.
pub fn sort_by_amount(records: &[Record]) -> Vec<Record> {
    if records.len() <= 1 {
        return records.to_vec();
    }
    let (left, right) = records.split_at(records.len() / 2);
    merge(sort_by_amount(left), sort_by_amount(right))
}

fn merge(left: Vec<Record>, right: Vec<Record>) -> Vec<Record> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.amount() <= r.amount(),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
