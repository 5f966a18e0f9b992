//! JSON Export functionality
//!
//! Exports expenses together with a little metadata about the export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Exported expense set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Sum of exported amounts
    pub total: Money,

    /// The exported expenses, in store order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Build an export from a set of expenses
    pub fn new<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let expenses: Vec<Expense> = expenses.into_iter().cloned().collect();
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses,
        }
    }
}

/// Export expenses to pretty-printed JSON
pub fn export_expenses_json<W: Write>(export: &ExpenseExport, writer: &mut W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
