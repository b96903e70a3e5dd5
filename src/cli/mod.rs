//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod report;
pub mod transaction;

pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::parse_date_ymd;

/// Parse an optional `YYYYMMDD` command-line value
pub(crate) fn parse_optional_date(value: Option<&str>) -> ExpenseResult<Option<NaiveDate>> {
    value.map(parse_date_ymd).transpose()
}
