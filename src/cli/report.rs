//! CLI commands for reports
//!
//! Prints the monthly and category summaries, or writes them to CSV.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{CategorySummary, MonthlySummary};
use crate::storage::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per category with percentage share
    #[command(alias = "categories")]
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Monthly { output } => {
            let report = MonthlySummary::generate(store);

            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Monthly summary exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        ReportCommands::Category { output } => {
            let Some(report) = CategorySummary::generate(store) else {
                println!("No expenses recorded yet.");
                return Ok(());
            };

            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Category summary exported to: {}", path.display());
            } else {
                print!(
                    "{}",
                    report.format_terminal(&settings.currency_symbol, settings.bar_step_percent)
                );
            }
        }
    }

    Ok(())
}

pub(crate) fn create_output(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
