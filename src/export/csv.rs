//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, DATE_FORMAT};

/// Export expenses to CSV, one row per expense with its position
pub fn export_expenses_csv<'a, W, I>(expenses: I, writer: W) -> ExpenseResult<()>
where
    W: Write,
    I: IntoIterator<Item = (usize, &'a Expense)>,
{
    let mut csv = ::csv::Writer::from_writer(writer);
    let export_err = |e: ::csv::Error| ExpenseError::Export(e.to_string());

    csv.write_record(["Index", "Date", "Amount", "Category", "Description"])
        .map_err(export_err)?;

    for (index, expense) in expenses {
        csv.write_record([
            index.to_string(),
            expense.date.format(DATE_FORMAT).to_string(),
            format!("{:.2}", expense.amount.as_decimal()),
            expense.category.label().to_string(),
            expense.description.clone(),
        ])
        .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_quotes_descriptions() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Money::from_cents(1050),
            "Coffee, large",
            Category::Food,
        );

        let mut buffer = Vec::new();
        export_expenses_csv([(1, &expense)], &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "Index,Date,Amount,Category,Description\n1,2024-01-05,10.50,Food,\"Coffee, large\"\n"
        );
    }

    #[test]
    fn test_export_empty_writes_header_only() {
        let mut buffer = Vec::new();
        export_expenses_csv(Vec::<(usize, &Expense)>::new(), &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Index,Date,Amount,Category,Description\n"
        );
    }
}
