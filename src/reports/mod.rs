//! Reports module for the expense tracker
//!
//! Provides the aggregation functions and the two tabular reports built on
//! them: totals per month and totals per category.

pub mod aggregate;
pub mod category;
pub mod monthly;

pub use aggregate::{aggregate_by_category, aggregate_by_month, in_range};
pub use category::{CategoryReport, CategoryTotal};
pub use monthly::{MonthTotal, MonthlyReport};

/// A report that can be rendered as a table or exported as CSV
pub trait Report {
    /// Column names, in order
    fn headers(&self) -> Vec<String>;

    /// Cell values in display order, each row matching `headers` in length
    fn rows(&self) -> Vec<Vec<String>>;
}
