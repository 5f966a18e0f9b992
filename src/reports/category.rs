//! Category Summary
//!
//! Spending per category with each category's share of the grand total,
//! largest first.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::storage::ExpenseStore;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Category Summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Categories with spending, descending by total
    pub categories: Vec<CategoryTotal>,
    /// Grand total across all categories (always positive)
    pub total: Money,
}

impl CategorySummary {
    /// Summarize every expense in the store
    ///
    /// Returns `None` when there is nothing to share out (no expenses).
    pub fn generate(store: &ExpenseStore) -> Option<Self> {
        Self::from_expenses(store.list())
    }

    /// Summarize a set of expenses; `None` if their total is zero
    pub fn from_expenses<'a, I>(expenses: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for expense in expenses {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
        }

        if !total.is_positive() {
            return None;
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategoryTotal {
                category,
                total: amount,
                count,
                percentage: amount.cents() as f64 / total.cents() as f64 * 100.0,
            })
            .collect();

        // Largest first; ties fall back to menu order
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Some(Self { categories, total })
    }

    /// Look up one category's row
    pub fn get(&self, category: Category) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Format the report for terminal display
    ///
    /// Each category gets a bar with one `#` per `bar_step_percent` of share.
    pub fn format_terminal(&self, currency_symbol: &str, bar_step_percent: u8) -> String {
        let mut output = String::new();

        output.push_str("Category-wise Expenditure\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<15}: {:>10} {} ({:.1}%)\n",
                row.category.label(),
                row.total.format_with_symbol(currency_symbol),
                bar(row.percentage, bar_step_percent),
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<15}: {:>10}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv.write_record(["Category", "Total", "Count", "Percentage"])
            .map_err(export_err)?;
        for row in &self.categories {
            csv.write_record([
                row.category.label().to_string(),
                format!("{:.2}", row.total.as_decimal()),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Text bar: one `#` per full `step` percent
fn bar(percentage: f64, step: u8) -> String {
    if step == 0 {
        return String::new();
    }
    "#".repeat((percentage / f64::from(step)) as usize)
}
