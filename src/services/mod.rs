//! Service layer for the expense tracker
//!
//! The service layer provides the add/list/edit/delete workflows on top of
//! the storage layer. Each workflow reloads the file, mutates the list in
//! memory and rewrites the file, so a cancelled or failed workflow never
//! leaves a partial change behind.

pub mod transaction;

pub use transaction::{
    check_cancel, is_cancel_keyword, TransactionEdit, TransactionFilter, TransactionInput,
    TransactionService, CANCEL_KEYWORDS,
};
