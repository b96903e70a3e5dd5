//! Category totals report

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::aggregate::aggregate_by_category;
use super::Report;
use crate::error::ExpenseResult;
use crate::models::Transaction;

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Totals per category, largest absolute total first
#[derive(Debug, Clone, Default)]
pub struct CategoryReport {
    /// Inclusive lower bound the report was generated with
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound the report was generated with
    pub end: Option<NaiveDate>,
    pub categories: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Aggregate `transactions` within the bounds and order the result
    pub fn generate(
        transactions: &[Transaction],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ExpenseResult<Self> {
        let mut report = Self::from_totals(aggregate_by_category(transactions, start, end)?);
        report.start = start;
        report.end = end;
        Ok(report)
    }

    /// Order precomputed totals by descending absolute value
    ///
    /// Equal magnitudes fall back to category name so output is stable.
    pub fn from_totals(totals: HashMap<String, Decimal>) -> Self {
        let mut categories: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        categories.sort_by(|a, b| {
            b.total
                .abs()
                .cmp(&a.total.abs())
                .then_with(|| a.category.cmp(&b.category))
        });
        Self {
            start: None,
            end: None,
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Report for CategoryReport {
    fn headers(&self) -> Vec<String> {
        vec!["category".to_string(), "total".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.categories
            .iter()
            .map(|c| vec![c.category.clone(), c.total.to_string()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, amount: &str, category: &str) -> Transaction {
        Transaction::parse(date, amount, category, "", None).unwrap()
    }

    #[test]
    fn test_sorted_by_absolute_total() {
        let report = CategoryReport::generate(
            &[
                txn("20240101", "10", "salary"),
                txn("20240102", "-25", "rent"),
                txn("20240103", "-5", "food"),
                txn("20240104", "5", "gift"),
            ],
            None,
            None,
        )
        .unwrap();

        let order: Vec<_> = report
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["rent", "salary", "food", "gift"]);
    }

    #[test]
    fn test_bounds_are_recorded() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1);
        let report =
            CategoryReport::generate(&[txn("20240101", "1", "a")], start, None).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.start, start);
        assert_eq!(report.headers(), vec!["category", "total"]);
    }
}
