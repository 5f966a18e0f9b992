//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};

use clap::Args;

use crate::error::ExpenseResult;
use crate::models::{parse_date, Category};
use crate::services::ExpenseFilter;

/// Filter options shared by listing and export commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only expenses on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only expenses on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Only expenses in this category (code 1-8 or name)
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Validate the arguments into a filter
    pub fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();

        if let Some(from) = &self.from {
            filter = filter.since(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.until(parse_date(to)?);
        }
        if let Some(category) = &self.category {
            filter = filter.category(category.parse::<Category>()?);
        }

        Ok(filter)
    }
}
