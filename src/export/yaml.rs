//! YAML Export functionality
//!
//! Exports expenses to YAML for a human-readable copy.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;

/// Export expenses to YAML with a short header comment
pub fn export_expenses_yaml<W: Write>(export: &ExpenseExport, writer: &mut W) -> ExpenseResult<()> {
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_and_read_back() {
        let expenses = vec![Expense::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            Money::from_cents(700),
            "Cinema",
            Category::Entertainment,
        )];
        let export = ExpenseExport::new(&expenses);

        let mut buffer = Vec::new();
        export_expenses_yaml(&export, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Expense Tracker Export"));
        assert!(yaml.contains("category: Entertainment"));
        assert!(yaml.contains("2024-02-01"));

        let parsed: ExpenseExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.expenses, expenses);
        assert_eq!(parsed.expense_count, 1);
    }
}
