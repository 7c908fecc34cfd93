//! Property tests for accumulator and export invariants.
//!
//! Uses proptest to verify:
//! 1. Seed — the most recent record always carries exactly 1.0
//! 2. Chain — every older factor is its own rate plus the previous factor
//! 3. Ordering — normalized output is descending by date
//! 4. Reference period — always day 1, exactly two months back

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use selic_core::export::export_csv;
use selic_core::{accumulate, normalize, reference_period, RawRecord};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_rate() -> impl Strategy<Value = f64> {
    (-1.0..30.0_f64).prop_map(|r| (r * 100.0).round() / 100.0)
}

fn arb_raw_records() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec((arb_date(), arb_rate()), 1..60).prop_map(|rows| {
        rows.into_iter()
            .map(|(date, rate)| RawRecord::new(date.format("%d/%m/%Y").to_string(), format!("{rate:.2}")))
            .collect()
    })
}

// ── 1 & 2. Seed and chain ────────────────────────────────────────────

proptest! {
    #[test]
    fn first_factor_is_exactly_one(raw in arb_raw_records()) {
        let sorted = normalize(raw).unwrap();
        let out = accumulate(&sorted).unwrap();
        prop_assert_eq!(out[0].acumulada, 1.0);
    }

    #[test]
    fn factors_chain_backward(raw in arb_raw_records()) {
        let sorted = normalize(raw).unwrap();
        let out = accumulate(&sorted).unwrap();
        prop_assert_eq!(out.len(), sorted.len());
        for i in 1..out.len() {
            let expected = sorted[i].value + out[i - 1].acumulada;
            prop_assert!((out[i].acumulada - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn first_csv_row_ends_in_seed(raw in arb_raw_records()) {
        let sorted = normalize(raw).unwrap();
        let out = accumulate(&sorted).unwrap();
        let csv = export_csv(&out).unwrap();
        let first_row = csv.lines().nth(1).unwrap();
        prop_assert!(first_row.ends_with(";1.0"), "row was {}", first_row);
    }
}

// ── 3. Ordering ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_is_descending(raw in arb_raw_records()) {
        let sorted = normalize(raw).unwrap();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }
}

// ── 4. Reference period ──────────────────────────────────────────────

proptest! {
    #[test]
    fn reference_is_two_months_back(date in arb_date()) {
        let reference = reference_period(date).unwrap();
        prop_assert_eq!(reference.day(), 1);

        let months = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
        prop_assert_eq!(months(date) - months(reference), 2);

        if date.month() <= 2 {
            prop_assert_eq!(reference.year(), date.year() - 1);
            prop_assert_eq!(reference.month(), date.month() + 10);
        } else {
            prop_assert_eq!(reference.year(), date.year());
            prop_assert_eq!(reference.month(), date.month() - 2);
        }
    }
}
