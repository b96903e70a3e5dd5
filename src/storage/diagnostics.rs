//! Operator-visible diagnostics for rows skipped during load

use std::cell::RefCell;
use std::path::Path;

use tracing::warn;

use crate::error::ExpenseError;

/// Receives a notice for every persisted row that could not be loaded
pub trait DiagnosticSink {
    fn row_skipped(&self, path: &Path, line: u64, error: &ExpenseError);
}

/// Reports skipped rows as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn row_skipped(&self, path: &Path, line: u64, error: &ExpenseError) {
        warn!(
            file = %path.display(),
            line,
            "skipping invalid row: {}",
            error
        );
    }
}

/// Keeps skipped-row notices in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices recorded so far, formatted as `line N: reason`
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn row_skipped(&self, _path: &Path, line: u64, error: &ExpenseError) {
        self.messages
            .borrow_mut()
            .push(format!("line {}: {}", line, error));
    }
}
