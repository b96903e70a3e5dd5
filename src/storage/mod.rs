//! Storage layer for the expense tracker
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation. Malformed rows are reported through a pluggable diagnostic sink
//! instead of failing the load.

pub mod diagnostics;
pub mod file_io;
pub mod transactions;

pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use file_io::{write_bytes_atomic, write_csv_atomic};
pub use transactions::{append, load, save, TransactionStore};
