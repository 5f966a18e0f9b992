//! Expense display formatting
//!
//! Register tables, single-expense details and the category menu.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses (with their store positions) as a register table
pub fn format_expense_register(expenses: &[(usize, &Expense)], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|(index, expense)| ExpenseRow {
        index: *index,
        date: expense.date.format(DATE_FORMAT).to_string(),
        amount: expense.amount.format_with_symbol(currency_symbol),
        category: expense.category.label(),
        description: truncate(&expense.description, 40),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format one expense for display
pub fn format_expense_details(index: usize, expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense {}\n", index));
    output.push_str(&format!("  Date:        {}\n", expense.date.format(DATE_FORMAT)));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if expense.description.is_empty() {
        output.push_str("  Description: (none)\n");
    } else {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }

    output
}

/// Format the category menu ("1. Food" ...)
pub fn format_category_list() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("{}. {}\n", c.code(), c.label()))
        .collect()
}

/// Truncate a string to a maximum length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Money::from_cents(1050),
            "Coffee",
            Category::Food,
        )
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_expense_register(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_register_shows_positions() {
        let expense = sample();
        let output = format_expense_register(&[(3, &expense)], "$");

        assert!(output.contains("2024-01-05"));
        assert!(output.contains("$10.50"));
        assert!(output.contains("Food"));
        assert!(output.contains("Coffee"));
        assert!(output.contains(" 3 "));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(1, &sample(), "€");
        assert!(output.starts_with("Expense 1\n"));
        assert!(output.contains("€10.50"));

        let mut blank = sample();
        blank.description.clear();
        assert!(format_expense_details(1, &blank, "$").contains("(none)"));
    }

    #[test]
    fn test_category_list() {
        let list = format_category_list();
        assert!(list.starts_with("1. Food\n"));
        assert!(list.ends_with("8. Other\n"));
        assert_eq!(list.lines().count(), 8);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
