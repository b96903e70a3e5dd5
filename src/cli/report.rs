//! CLI commands for reports
//!
//! Prints report tables or exports them to CSV.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::parse_optional_date;
use crate::display::format_report;
use crate::error::ExpenseResult;
use crate::export::export_report;
use crate::reports::{CategoryReport, MonthlyReport, Report};
use crate::storage::TransactionStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per month (YYYYMM)
    Monthly {
        /// Export to this CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export to monthly.csv in the reports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// Totals per category within a date range
    Category {
        /// Start date (YYYYMMDD), inclusive
        #[arg(short, long)]
        start: Option<String>,
        /// End date (YYYYMMDD), inclusive
        #[arg(short, long)]
        end: Option<String>,
        /// Export to this CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export to category.csv in the reports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
}

/// Handle report commands
///
/// `reports_dir` is where `--save` places its file.
pub fn handle_report_command(
    store: &TransactionStore,
    reports_dir: &Path,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let transactions = store.load()?;

    match cmd {
        ReportCommands::Monthly { output, save } => {
            let report = MonthlyReport::generate(&transactions)?;
            let target = output.or_else(|| save.then(|| reports_dir.join("monthly.csv")));
            emit(&report, target)
        }
        ReportCommands::Category {
            start,
            end,
            output,
            save,
        } => {
            let start = parse_optional_date(start.as_deref())?;
            let end = parse_optional_date(end.as_deref())?;
            let report = CategoryReport::generate(&transactions, start, end)?;
            let target = output.or_else(|| save.then(|| reports_dir.join("category.csv")));
            emit(&report, target)
        }
    }
}

fn emit(report: &impl Report, target: Option<PathBuf>) -> ExpenseResult<()> {
    match target {
        Some(path) => {
            export_report(&path, report)?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", format_report(report)),
    }
    Ok(())
}
