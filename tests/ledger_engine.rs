use expense_ledger::{
    errors::LedgerError,
    init,
    ledger::{category_totals, sort_by_amount, OrderedLedger, Record},
};
use chrono::{Duration, NaiveDate};

fn labels(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::description).collect()
}

/// Deterministic linear congruential sequence so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn scrambled_ledger(count: usize, seed: u64) -> OrderedLedger {
    let mut rng = Lcg(seed);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut ledger = OrderedLedger::new();
    for idx in 0..count {
        let date = start + Duration::days(rng.next(20) as i64);
        let amount = rng.next(50) as f64 - 10.0;
        let category = ["Food", "Travel", "Rent", "Fun"][rng.next(4) as usize];
        ledger
            .insert(&date.to_string(), amount, category, idx.to_string())
            .unwrap();
    }
    ledger
}

#[test]
fn end_to_end_tracker_flow() {
    init();

    let mut ledger = OrderedLedger::new();
    ledger.insert("2024-03-05", 20.0, "Food", "lunch").unwrap();
    ledger.insert("2024-03-01", 15.0, "Travel", "bus").unwrap();
    ledger.insert("2024-03-05", 5.0, "Food", "coffee").unwrap();

    let snapshot = ledger.snapshot();
    assert_eq!(labels(&snapshot), ["bus", "lunch", "coffee"]);

    let mut found = ledger.find_by_date("2024-03-05").unwrap();
    found.sort_by(|a, b| a.description().cmp(b.description()));
    assert_eq!(labels(&found), ["coffee", "lunch"]);
    assert!(found.iter().all(|record| record.category() == "Food"));

    let by_amount = sort_by_amount(&snapshot);
    let amounts: Vec<f64> = by_amount.iter().map(Record::amount).collect();
    assert_eq!(amounts, [5.0, 15.0, 20.0]);
    assert_eq!(labels(&by_amount), ["coffee", "bus", "lunch"]);

    let totals = category_totals(&snapshot);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Food"), Some(25.0));
    assert_eq!(totals.get("Travel"), Some(15.0));

    // Sorting a snapshot never disturbs the ledger.
    assert_eq!(ledger.snapshot(), snapshot);
}

#[test]
fn snapshot_stays_date_ordered_under_random_insertions() {
    for seed in 1..=8 {
        let ledger = scrambled_ledger(200, seed);
        let snapshot = ledger.snapshot();

        assert_eq!(snapshot.len(), 200);
        assert!(snapshot.windows(2).all(|w| w[0].date() <= w[1].date()));

        // Within a date, insertion order (the numeric description) is kept.
        for pair in snapshot.windows(2) {
            if pair[0].date() == pair[1].date() {
                let first: usize = pair[0].description().parse().unwrap();
                let second: usize = pair[1].description().parse().unwrap();
                assert!(first < second, "unstable run at {}", pair[0].date());
            }
        }
    }
}

#[test]
fn invalid_dates_are_reported_and_ignored() {
    let mut ledger = scrambled_ledger(10, 3);
    let before = ledger.snapshot();

    for raw in ["2024-13-01", "2024-04-31", "not a date", "2024/01/01"] {
        assert_eq!(
            ledger.insert(raw, 1.0, "Food", "bad"),
            Err(LedgerError::InvalidDate(raw.to_string()))
        );
    }
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn amount_sort_is_a_stable_permutation() {
    let ledger = scrambled_ledger(150, 42);
    let snapshot = ledger.snapshot();
    let sorted = sort_by_amount(&snapshot);

    assert_eq!(sorted.len(), snapshot.len());
    assert!(sorted.windows(2).all(|w| w[0].amount() <= w[1].amount()));

    let position = |label: &str| {
        snapshot
            .iter()
            .position(|record| record.description() == label)
            .unwrap()
    };
    for pair in sorted.windows(2) {
        if pair[0].amount() == pair[1].amount() {
            assert!(position(pair[0].description()) < position(pair[1].description()));
        }
    }

    let mut seen = labels(&sorted);
    let mut expected = labels(&snapshot);
    seen.sort_unstable();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn find_by_date_matches_a_linear_scan() {
    let ledger = scrambled_ledger(120, 7);
    let snapshot = ledger.snapshot();
    let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();

    for offset in 0..25 {
        let day = start + Duration::days(offset);
        let mut found = labels(&ledger.find_by_date(&day.to_string()).unwrap())
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let mut expected: Vec<String> = snapshot
            .iter()
            .filter(|record| record.date() == day)
            .map(|record| record.description().to_string())
            .collect();
        found.sort_unstable();
        expected.sort_unstable();
        assert_eq!(found, expected, "mismatch for {day}");
    }
}

#[test]
fn category_totals_sum_each_label() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let records = [
        Record::new(date, 10.0, "A", ""),
        Record::new(date, 5.0, "B", ""),
        Record::new(date, 3.0, "A", ""),
    ];
    let totals = category_totals(&records);
    assert_eq!(totals.get("A"), Some(13.0));
    assert_eq!(totals.get("B"), Some(5.0));
    assert!(category_totals(&[]).is_empty());
}
