//! Display formatting for terminal output
//!
//! Renders transaction lists and reports as text tables.

pub mod report;
pub mod transaction;

pub use report::format_report;
pub use transaction::{format_transaction_details, format_transaction_table};

use tabled::builder::Builder;
use tabled::settings::Style;

/// Render `rows` under `headers` as a plain text table
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().cloned());
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}
