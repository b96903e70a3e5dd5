//! Monthly totals report

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::aggregate::aggregate_by_month;
use super::Report;
use crate::error::ExpenseResult;
use crate::models::Transaction;

/// Total for one `YYYYMM` month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: String,
    pub total: Decimal,
}

/// Totals per month, sorted by month ascending
#[derive(Debug, Clone, Default)]
pub struct MonthlyReport {
    pub months: Vec<MonthTotal>,
}

impl MonthlyReport {
    /// Aggregate `transactions` and order the result
    pub fn generate(transactions: &[Transaction]) -> ExpenseResult<Self> {
        Ok(Self::from_totals(aggregate_by_month(transactions)?))
    }

    /// Order precomputed totals by month
    pub fn from_totals(totals: HashMap<String, Decimal>) -> Self {
        let mut months: Vec<MonthTotal> = totals
            .into_iter()
            .map(|(month, total)| MonthTotal { month, total })
            .collect();
        months.sort_by(|a, b| a.month.cmp(&b.month));
        Self { months }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl Report for MonthlyReport {
    fn headers(&self) -> Vec<String> {
        vec!["month".to_string(), "total".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.months
            .iter()
            .map(|m| vec![m.month.clone(), m.total.to_string()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, amount: &str) -> Transaction {
        Transaction::parse(date, amount, "misc", "", None).unwrap()
    }

    #[test]
    fn test_months_sorted_ascending() {
        let report = MonthlyReport::generate(&[
            txn("20240301", "3"),
            txn("20231201", "1"),
            txn("20240115", "2.50"),
            txn("20240120", "0.50"),
        ])
        .unwrap();

        assert_eq!(
            report.rows(),
            vec![
                vec!["202312".to_string(), "1".to_string()],
                vec!["202401".to_string(), "3.00".to_string()],
                vec!["202403".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn test_headers() {
        let report = MonthlyReport::generate(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.headers(), vec!["month", "total"]);
    }
}
