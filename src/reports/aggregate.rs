//! Grouping and summation over transaction lists
//!
//! Pure functions: no I/O, the input is never mutated, and the result does
//! not depend on the order of the input. Map iteration order is meaningless;
//! the report types in this module's siblings impose display order.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;

/// Sum amounts per `YYYYMM` month
///
/// Months without transactions are absent from the result. A month whose
/// total cannot be represented exactly is a `Validation` error.
pub fn aggregate_by_month(
    transactions: &[Transaction],
) -> ExpenseResult<HashMap<String, Decimal>> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for txn in transactions {
        let month = txn.month_key();
        let total = totals.entry(month.clone()).or_default();
        *total = add_exact(*total, txn.amount).ok_or_else(|| {
            ExpenseError::validation(format!(
                "total for month {} cannot be represented exactly",
                month
            ))
        })?;
    }
    Ok(totals)
}

/// Sum amounts per category within optional inclusive date bounds
///
/// With `start` after `end` no transaction can match and the result is empty.
pub fn aggregate_by_category(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ExpenseResult<HashMap<String, Decimal>> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for txn in transactions.iter().filter(|t| in_range(t.date, start, end)) {
        let total = totals.entry(txn.category.clone()).or_default();
        *total = add_exact(*total, txn.amount).ok_or_else(|| {
            ExpenseError::validation(format!(
                "total for category '{}' cannot be represented exactly",
                txn.category
            ))
        })?;
    }
    Ok(totals)
}

/// Add two amounts, or `None` if the sum overflows or would be rounded
///
/// `Decimal` addition silently drops fractional digits once the mantissa is
/// full; a sum whose scale fell below what either operand needs lost digits.
fn add_exact(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;
    let needed = a.normalize().scale().max(b.normalize().scale());
    (sum.scale() >= needed).then_some(sum)
}

/// Inclusive date range check where a missing bound is unbounded
pub fn in_range(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.map_or(true, |s| s <= date) && end.map_or(true, |e| date <= e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn txn(date: &str, amount: &str, category: &str) -> Transaction {
        Transaction::parse(date, amount, category, "", None).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        crate::models::parse_date_ymd(s).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("20240101", "100.00", "food"),
            txn("20240215", "50.00", "food"),
        ]
    }

    #[test]
    fn test_by_month_example() {
        let totals = aggregate_by_month(&sample()).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["202401"], dec("100.00"));
        assert_eq!(totals["202402"], dec("50.00"));
    }

    #[test]
    fn test_by_category_example() {
        let totals = aggregate_by_category(&sample(), None, None).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["food"], dec("150.00"));
        assert_eq!(totals["food"].to_string(), "150.00");
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_month(&[]).unwrap().is_empty());
        assert!(aggregate_by_category(&[], None, None).unwrap().is_empty());
    }

    #[test]
    fn test_single_month_exact_sum() {
        let transactions: Vec<_> = (0..10).map(|_| txn("20240305", "0.10", "snacks")).collect();
        let totals = aggregate_by_month(&transactions).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["202403"], dec("1.00"));
    }

    #[test]
    fn test_mixed_signs_and_scales() {
        let transactions = vec![
            txn("20240101", "-12.5", "food"),
            txn("20240102", "2.25", "food"),
            txn("20240103", "10", "food"),
        ];
        let totals = aggregate_by_category(&transactions, None, None).unwrap();
        assert_eq!(totals["food"], dec("-0.25"));
    }

    #[test]
    fn test_category_bounds_are_inclusive() {
        let transactions = vec![
            txn("20240101", "1", "a"),
            txn("20240110", "2", "a"),
            txn("20240120", "4", "b"),
        ];

        let totals =
            aggregate_by_category(&transactions, Some(date("20240110")), Some(date("20240120")))
                .unwrap();
        assert_eq!(totals["a"], dec("2"));
        assert_eq!(totals["b"], dec("4"));

        let totals = aggregate_by_category(&transactions, Some(date("20240102")), None).unwrap();
        assert_eq!(totals["a"], dec("2"));

        let totals = aggregate_by_category(&transactions, None, Some(date("20240101"))).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["a"], dec("1"));
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let transactions = vec![txn("20240101", "1", "a"), txn("20240601", "1", "b")];
        let totals =
            aggregate_by_category(&transactions, Some(date("20240601")), Some(date("20240101")))
                .unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_order_independent() {
        let mut transactions = vec![
            txn("20240101", "1.1", "a"),
            txn("20240201", "2.2", "b"),
            txn("20240102", "3.3", "a"),
        ];
        let forward = aggregate_by_month(&transactions).unwrap();
        transactions.reverse();
        assert_eq!(forward, aggregate_by_month(&transactions).unwrap());
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let transactions = vec![
            txn("20240101", "79228162514264337593543950335", "big"),
            txn("20240102", "1", "big"),
        ];

        let err = aggregate_by_month(&transactions).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("202401"));

        let err = aggregate_by_category(&transactions, None, None).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("'big'"));
    }

    #[test]
    fn test_sum_that_would_round_is_an_error() {
        let transactions = vec![
            txn("20240101", "0.1234567890123456789012345678", "fine"),
            txn("20240102", "10", "fine"),
        ];

        let err = aggregate_by_month(&transactions).unwrap_err();
        assert!(err.is_validation());
        assert!(aggregate_by_category(&transactions, None, None).is_err());
    }

    #[test]
    fn test_full_precision_sum_without_rounding_is_kept() {
        let transactions = vec![
            txn("20240101", "0.1234567890123456789012345678", "fine"),
            txn("20240102", "0.0000000000000000000000000002", "fine"),
        ];

        let totals = aggregate_by_month(&transactions).unwrap();
        assert_eq!(totals["202401"].to_string(), "0.1234567890123456789012345680");
    }
}
