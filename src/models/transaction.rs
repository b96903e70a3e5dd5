//! Transaction model
//!
//! A transaction is one recorded monetary event. Values are built either from
//! raw user input (strict: category is required) or from a persisted CSV row
//! (tolerant: a missing category is kept as an empty string).

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{IdGenerator, TransactionId, UuidGenerator};
use crate::error::{ExpenseError, ExpenseResult};

/// Textual date format used everywhere a date is read or written
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Column order of the persisted transactions file
pub const HEADER: [&str; 5] = ["id", "date", "amount", "category", "description"];

/// A recorded expense or income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Calendar date, no time of day
    pub date: NaiveDate,

    /// Exact amount; the sign convention belongs to the caller
    pub amount: Decimal,

    /// Category label, trimmed
    pub category: String,

    /// Free text, trimmed; empty when absent
    pub description: String,
}

/// One line of the transactions file, as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Validate raw input fields, generating a UUID if `id` is `None`
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
        id: Option<TransactionId>,
    ) -> ExpenseResult<Self> {
        Self::parse_with(date, amount, category, description, id, &UuidGenerator)
    }

    /// Validate raw input fields, drawing a new id from `ids` if none is given
    pub fn parse_with(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
        id: Option<TransactionId>,
        ids: &dyn IdGenerator,
    ) -> ExpenseResult<Self> {
        let date = parse_date_ymd(date)?;
        let amount = parse_amount(amount)?;

        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseError::validation("category is required"));
        }

        let id = match id {
            Some(id) if !id.as_str().is_empty() => id,
            _ => ids.generate(),
        };

        Ok(Self {
            id,
            date,
            amount,
            category: category.to_string(),
            description: description.trim().to_string(),
        })
    }

    /// Rebuild a transaction from a persisted row
    pub fn from_row(row: &TransactionRow) -> ExpenseResult<Self> {
        if row.id.is_empty() {
            return Err(ExpenseError::validation("missing id in CSV row"));
        }
        if row.date.is_empty() {
            return Err(ExpenseError::validation(format!(
                "row {}: missing date",
                row.id
            )));
        }
        if row.amount.is_empty() {
            return Err(ExpenseError::validation(format!(
                "row {}: missing amount",
                row.id
            )));
        }

        let in_row = |err: ExpenseError| match err {
            ExpenseError::Validation(msg) => {
                ExpenseError::validation(format!("row {}: {}", row.id, msg))
            }
            other => other,
        };

        Ok(Self {
            id: TransactionId::new(row.id.clone()),
            date: parse_date_ymd(&row.date).map_err(in_row)?,
            amount: parse_amount(&row.amount).map_err(in_row)?,
            category: row.category.clone(),
            description: row.description.clone(),
        })
    }

    /// Convert to the textual row written to disk
    pub fn to_row(&self) -> TransactionRow {
        TransactionRow {
            id: self.id.to_string(),
            date: format_date_ymd(self.date),
            amount: self.amount.to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// Year and month of the transaction as `YYYYMM`
    pub fn month_key(&self) -> String {
        self.date.format("%Y%m").to_string()
    }
}

/// Parse an 8-digit `YYYYMMDD` date
pub fn parse_date_ymd(s: &str) -> ExpenseResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("date is required"));
    }
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExpenseError::validation(format!(
            "invalid date '{}': expected YYYYMMDD",
            s
        )));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
        ExpenseError::validation(format!("invalid date '{}': expected YYYYMMDD", s))
    })
}

/// Format a date as `YYYYMMDD`
pub fn format_date_ymd(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse an exact decimal amount such as `12.50` or `-3`
///
/// Currency symbols, thousands separators and exponents are rejected, as is
/// any value that `Decimal` could only hold after rounding.
pub fn parse_amount(s: &str) -> ExpenseResult<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("amount is required"));
    }
    let invalid = || {
        ExpenseError::validation(format!(
            "invalid amount '{}': expected decimal using dot as separator",
            s
        ))
    };
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return Err(invalid());
    }
    Decimal::from_str_exact(s).map_err(|_| {
        if Decimal::from_str(s).is_ok() {
            ExpenseError::validation(format!(
                "invalid amount '{}': more digits than can be stored exactly",
                s
            ))
        } else {
            invalid()
        }
    })
}
