//! Export module for the expense tracker
//!
//! Writes aggregated report rows to CSV files using the same atomic replace
//! discipline as the transaction store.

pub mod csv;

pub use self::csv::{export_csv, export_report};
