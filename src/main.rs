use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::TransactionStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Records transactions in a CSV file and reports totals \
                  per month and per category."
)]
struct Cli {
    /// Transactions file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// off, error, warn, info, debug, trace (overridden by RUST_LOG)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Monthly and category reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let data_file = cli.file.unwrap_or_else(|| settings.data_file(&paths));
    debug!("Using transactions file {}", data_file.display());
    let store = TransactionStore::new(data_file);

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings.reports_dir(&paths), cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", store.path().display());
            println!("Reports directory: {}", settings.reports_dir(&paths).display());
        }
        None => {
            println!("Expense Tracker - personal expenses in a CSV file");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // RUST_LOG does not exist; use the requested level for this crate only.
        None => EnvFilter::new(format!(
            "expense_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
