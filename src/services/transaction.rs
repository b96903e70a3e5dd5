//! Transaction service
//!
//! Provides business logic for transaction management: validated creation,
//! filtered listing, selection by row number or id, and edit/delete with
//! cancellation support.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{format_date_ymd, IdGenerator, Transaction, UuidGenerator};
use crate::reports::in_range;
use crate::storage::TransactionStore;

/// Words that abandon the operation in progress when typed at any prompt
pub const CANCEL_KEYWORDS: [&str; 3] = ["q", "quit", "cancel"];

/// Check whether raw user input asks to cancel
pub fn is_cancel_keyword(raw: &str) -> bool {
    let raw = raw.trim();
    CANCEL_KEYWORDS
        .iter()
        .any(|keyword| raw.eq_ignore_ascii_case(keyword))
}

/// Turn a cancel keyword into `ExpenseError::Cancelled`
pub fn check_cancel(raw: &str) -> ExpenseResult<()> {
    if is_cancel_keyword(raw) {
        Err(ExpenseError::Cancelled)
    } else {
        Ok(())
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a TransactionStore,
    ids: &'a dyn IdGenerator,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Filter by category, ignoring case
    pub category: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only transactions on or after `start`
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only transactions on or before `end`
    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check whether `txn` passes every configured filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        in_range(txn.date, self.start_date, self.end_date)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category.to_lowercase() == c.trim().to_lowercase())
    }
}

/// Raw text for creating a new transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Replacement fields for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct TransactionEdit {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl TransactionEdit {
    /// Check if the edit changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service that mints UUID ids
    pub fn new(store: &'a TransactionStore) -> Self {
        Self {
            store,
            ids: &UuidGenerator,
        }
    }

    /// Create a service with a custom id generator
    pub fn with_ids(store: &'a TransactionStore, ids: &'a dyn IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Validate `input` and append it to the store
    pub fn add(&self, input: TransactionInput) -> ExpenseResult<Transaction> {
        let txn = Transaction::parse_with(
            &input.date,
            &input.amount,
            &input.category,
            &input.description,
            None,
            self.ids,
        )?;

        self.store.append(txn.clone())?;
        info!(id = %txn.id, "added transaction");
        Ok(txn)
    }

    /// List transactions matching `filter`, in file order
    pub fn list(&self, filter: &TransactionFilter) -> ExpenseResult<Vec<Transaction>> {
        let mut transactions = self.store.load()?;
        transactions.retain(|t| filter.matches(t));
        Ok(transactions)
    }

    /// Resolve a selector to an index into `transactions`
    ///
    /// A selector is either a 1-based row number or a transaction id. When
    /// several transactions share an id, the first one wins.
    pub fn select(transactions: &[Transaction], selector: &str) -> Option<usize> {
        let selector = selector.trim();
        if let Ok(n) = selector.parse::<usize>() {
            if (1..=transactions.len()).contains(&n) {
                return Some(n - 1);
            }
        }
        transactions.iter().position(|t| t.id.as_str() == selector)
    }

    /// Replace the selected transaction with an edited copy
    ///
    /// `gather` is shown the current transaction and returns the replacement
    /// fields. If it fails (for example with `ExpenseError::Cancelled`) the
    /// file is not touched.
    pub fn edit<F>(&self, selector: &str, gather: F) -> ExpenseResult<Transaction>
    where
        F: FnOnce(&Transaction) -> ExpenseResult<TransactionEdit>,
    {
        let mut transactions = self.store.load()?;
        let index = Self::select(&transactions, selector)
            .ok_or_else(|| ExpenseError::transaction_not_found(selector))?;

        let current = &transactions[index];
        let edit = gather(current)?;

        let date = edit.date.unwrap_or_else(|| format_date_ymd(current.date));
        let amount = edit.amount.unwrap_or_else(|| current.amount.to_string());
        let category = edit.category.unwrap_or_else(|| current.category.clone());
        let description = edit
            .description
            .unwrap_or_else(|| current.description.clone());

        let updated = Transaction::parse_with(
            &date,
            &amount,
            &category,
            &description,
            Some(current.id.clone()),
            self.ids,
        )?;

        transactions[index] = updated.clone();
        self.store.save(&transactions)?;
        info!(id = %updated.id, "updated transaction");
        Ok(updated)
    }

    /// Remove the selected transaction once `confirm` agrees
    ///
    /// A `false` confirmation is reported as `ExpenseError::Cancelled`.
    pub fn delete<F>(&self, selector: &str, confirm: F) -> ExpenseResult<Transaction>
    where
        F: FnOnce(&Transaction) -> ExpenseResult<bool>,
    {
        let mut transactions = self.store.load()?;
        let index = Self::select(&transactions, selector)
            .ok_or_else(|| ExpenseError::transaction_not_found(selector))?;

        if !confirm(&transactions[index])? {
            return Err(ExpenseError::Cancelled);
        }

        let removed = transactions.remove(index);
        self.store.save(&transactions)?;
        info!(id = %removed.id, "deleted transaction");
        Ok(removed)
    }
}
