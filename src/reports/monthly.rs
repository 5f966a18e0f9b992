//! Monthly Summary
//!
//! Total spending per calendar month, oldest month first.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;

/// Spending in one year-month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// Year-month key, "YYYY-MM"
    pub month: String,
    pub total: Money,
    /// Number of expenses in the month
    pub count: usize,
}

/// Monthly Summary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    /// One row per month with spending, ascending by month
    pub months: Vec<MonthTotal>,
    /// Grand total across all months
    pub total: Money,
}

impl MonthlySummary {
    /// Summarize every expense in the store
    pub fn generate(store: &ExpenseStore) -> Self {
        Self::from_expenses(store.list())
    }

    /// Summarize a set of expenses
    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_month: BTreeMap<String, (Money, usize)> = BTreeMap::new();

        for expense in expenses {
            let entry = by_month
                .entry(expense.month_key())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let months: Vec<MonthTotal> = by_month
            .into_iter()
            .map(|(month, (total, count))| MonthTotal { month, total, count })
            .collect();
        let total = months.iter().map(|m| m.total).sum();

        Self { months, total }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        output.push_str(&format!("{:<10} {:>15} {:>8}\n", "Month", "Total", "Count"));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>15} {:>8}\n",
                month.month,
                month.total.format_with_symbol(currency_symbol),
                month.count
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>15}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv.write_record(["Month", "Total", "Count"]).map_err(export_err)?;
        for month in &self.months {
            csv.write_record([
                month.month.clone(),
                format!("{:.2}", month.total.as_decimal()),
                month.count.to_string(),
            ])
            .map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        Ok(())
    }
}
