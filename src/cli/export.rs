//! CLI command for data export
//!
//! Writes the (optionally filtered) expense list as CSV, JSON or YAML.

use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml, ExpenseExport};
use crate::storage::ExpenseStore;

use super::report::create_output;
use super::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format with export metadata
    Json,
    /// YAML format, human-readable
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(store: &ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter()?;
    let expenses = store.list_filtered(Some(&filter));

    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_export(args.format, &expenses, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("{} expenses exported to: {}", expenses.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(args.format, &expenses, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    format: ExportFormat,
    expenses: &[(usize, &crate::models::Expense)],
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses.iter().copied(), writer),
        ExportFormat::Json => {
            let export = ExpenseExport::new(expenses.iter().map(|(_, e)| *e));
            export_expenses_json(&export, writer)
        }
        ExportFormat::Yaml => {
            let export = ExpenseExport::new(expenses.iter().map(|(_, e)| *e));
            export_expenses_yaml(&export, writer)
        }
    }
}
