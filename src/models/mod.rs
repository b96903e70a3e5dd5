//! Core data models for the expense tracker
//!
//! This module contains the transaction record and the id types used to
//! identify transactions.

pub mod ids;
pub mod transaction;

pub use ids::{IdGenerator, SequentialIds, TransactionId, UuidGenerator};
pub use transaction::{
    format_date_ymd, parse_amount, parse_date_ymd, Transaction, TransactionRow, DATE_FORMAT,
    HEADER,
};
