//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting
//! transactions.

use clap::Subcommand;

use super::parse_optional_date;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{TransactionEdit, TransactionFilter, TransactionInput, TransactionService};
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Transaction date (YYYYMMDD)
        date: String,
        /// Amount, using a dot as decimal separator (e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category
        category: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List transactions
    List {
        /// Start date (YYYYMMDD), inclusive
        #[arg(short, long)]
        start: Option<String>,
        /// End date (YYYYMMDD), inclusive
        #[arg(short, long)]
        end: Option<String>,
        /// Only this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit a transaction; omitted fields keep their value
    Edit {
        /// Row number from an unfiltered `list`, or transaction ID
        selector: String,
        /// New date (YYYYMMDD)
        #[arg(long)]
        date: Option<String>,
        /// New amount
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Row number from an unfiltered `list`, or transaction ID
        selector: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &TransactionStore,
    cmd: TransactionCommands,
) -> ExpenseResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            date,
            amount,
            category,
            description,
        } => {
            let txn = service.add(TransactionInput {
                date,
                amount,
                category,
                description,
            })?;
            println!("Transaction added with id {}", txn.id);
        }

        TransactionCommands::List {
            start,
            end,
            category,
        } => {
            let filter = TransactionFilter {
                start_date: parse_optional_date(start.as_deref())?,
                end_date: parse_optional_date(end.as_deref())?,
                category,
            };
            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_table(&transactions));
        }

        TransactionCommands::Edit {
            selector,
            date,
            amount,
            category,
            description,
        } => {
            let edit = TransactionEdit {
                date,
                amount,
                category,
                description,
            };
            if edit.is_empty() {
                return Err(ExpenseError::validation(
                    "nothing to change; pass at least one of --date, --amount, --category, --description",
                ));
            }

            let updated = service.edit(&selector, |_| Ok(edit))?;
            println!("Transaction updated.");
            print!("{}", format_transaction_details(&updated));
        }

        TransactionCommands::Delete { selector, force } => {
            let result = service.delete(&selector, |txn| {
                if !force {
                    println!("About to delete transaction:");
                    print!("{}", format_transaction_details(txn));
                    println!();
                    println!("Use --force to confirm deletion");
                }
                Ok(force)
            });

            match result {
                Ok(deleted) => println!("Transaction {} deleted.", deleted.id),
                Err(ExpenseError::Cancelled) => {}
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
