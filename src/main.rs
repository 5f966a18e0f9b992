use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, handle_report_command, ExpenseCommands,
    ExportArgs, ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::{ExpenseStore, LoadOutcome};

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record what you spend, then filter it and see where the money \
                  goes by month and by category. Expenses are kept in a single \
                  JSON file."
)]
struct Cli {
    /// Expense data file (overrides the configured one)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly and category summaries
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_default(&paths);

    let data_file = match &cli.file {
        Some(file) => file.clone(),
        None => paths.data_file(&settings.data_file),
    };
    let mut store = ExpenseStore::open(data_file);

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut store, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&store, args)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", store.path().display());
            match store.load_outcome() {
                LoadOutcome::Missing => println!("Data status:    not created yet"),
                LoadOutcome::Loaded(count) => println!("Data status:    {} expenses", count),
                LoadOutcome::Recovered(reason) => println!("Data status:    unreadable ({})", reason),
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Bar step:        {}%", settings.bar_step_percent);
        }
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 12.50 -c Food -m Lunch' to record an expense.");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("expense_tracker=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
