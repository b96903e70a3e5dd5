//! Expense tracker - personal expense tracking over a CSV file
//!
//! This library records monetary transactions in a flat CSV file and produces
//! aggregate reports by month and by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The transaction record and its parsing rules
//! - `storage`: CSV file storage with atomic replace
//! - `reports`: Aggregation by month and category
//! - `export`: Atomic CSV export of report rows
//! - `services`: Add/list/edit/delete workflows
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Transaction;
//! use expense_tracker::reports::aggregate_by_month;
//! use expense_tracker::storage::TransactionStore;
//!
//! let store = TransactionStore::new("transactions.csv");
//! store.append(Transaction::parse("20240101", "12.50", "food", "lunch", None)?)?;
//! let totals = aggregate_by_month(&store.load()?)?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
