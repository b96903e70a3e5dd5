//! Transaction store backed by a CSV file
//!
//! The file is the only source of truth. Nothing is cached between calls:
//! `load` reads everything, `save` rewrites everything.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Transaction, TransactionRow, HEADER};

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::file_io::{open_csv, write_csv_atomic};

/// Durable store for the full transaction collection
#[derive(Clone)]
pub struct TransactionStore {
    path: PathBuf,
    sink: Rc<dyn DiagnosticSink>,
}

impl TransactionStore {
    /// Create a store that reports skipped rows through `tracing`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_sink(path, Rc::new(TracingSink))
    }

    /// Create a store with a custom diagnostic sink
    pub fn with_sink(path: impl Into<PathBuf>, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid transaction, in file order
    ///
    /// A missing or empty file yields an empty list. Rows that fail to parse
    /// are reported to the sink and skipped; only I/O failures are errors.
    pub fn load(&self) -> ExpenseResult<Vec<Transaction>> {
        let mut reader = match open_csv(&self.path)? {
            Some(reader) => reader,
            None => {
                debug!(file = %self.path.display(), "no transactions file yet");
                return Ok(Vec::new());
            }
        };

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                let err = self.classify(e)?;
                self.sink.row_skipped(&self.path, 1, &err);
                return Ok(Vec::new());
            }
        };
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let mut transactions = Vec::new();
        let mut skipped = 0usize;

        for (index, result) in reader.records().enumerate() {
            let fallback_line = index as u64 + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
                    let err = self.classify(e)?;
                    self.sink.row_skipped(&self.path, line, &err);
                    skipped += 1;
                    continue;
                }
            };

            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line);

            let parsed = record
                .deserialize::<TransactionRow>(Some(&headers))
                .map_err(|e| ExpenseError::validation(format!("malformed CSV record: {}", e)))
                .and_then(|row| Transaction::from_row(&row));

            match parsed {
                Ok(txn) => transactions.push(txn),
                Err(err) => {
                    self.sink.row_skipped(&self.path, line, &err);
                    skipped += 1;
                }
            }
        }

        debug!(
            file = %self.path.display(),
            loaded = transactions.len(),
            skipped,
            "loaded transactions"
        );
        Ok(transactions)
    }

    /// Atomically replace the file with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> ExpenseResult<()> {
        write_csv_atomic(&self.path, |writer| {
            writer.write_record(HEADER)?;
            for txn in transactions {
                writer.serialize(txn.to_row())?;
            }
            Ok(())
        })?;

        debug!(
            file = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }

    /// Add one transaction by rewriting the whole file
    pub fn append(&self, transaction: Transaction) -> ExpenseResult<()> {
        let mut transactions = self.load()?;
        transactions.push(transaction);
        self.save(&transactions)
    }

    /// Split CSV reader errors into fatal I/O errors and skippable row errors
    fn classify(&self, err: csv::Error) -> ExpenseResult<ExpenseError> {
        if err.is_io_error() {
            return Err(ExpenseError::storage("read", &self.path, err.into()));
        }
        Ok(ExpenseError::validation(format!(
            "malformed CSV record: {}",
            err
        )))
    }
}

/// Load transactions from `path`, logging skipped rows
pub fn load(path: impl AsRef<Path>) -> ExpenseResult<Vec<Transaction>> {
    TransactionStore::new(path.as_ref()).load()
}

/// Atomically write `transactions` to `path`
pub fn save(path: impl AsRef<Path>, transactions: &[Transaction]) -> ExpenseResult<()> {
    TransactionStore::new(path.as_ref()).save(transactions)
}

/// Append `transaction` to the file at `path`
pub fn append(path: impl AsRef<Path>, transaction: Transaction) -> ExpenseResult<()> {
    TransactionStore::new(path.as_ref()).append(transaction)
}
