//! Expense model
//!
//! A single spending entry. Expenses have no identifier of their own; their
//! 1-based position in the store is how users refer to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for input and persistence
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    pub category: Category,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            date,
            amount,
            description: description.into().trim().to_string(),
            category,
        }
    }

    /// Year-month key ("YYYY-MM") used to group expenses by month
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Validate the expense
    pub fn validate(&self) -> ExpenseResult<()> {
        check_amount(self.amount)
    }

    /// Replace one field with an already validated value
    pub fn apply(&mut self, field: ExpenseField) {
        match field {
            ExpenseField::Date(date) => self.date = date,
            ExpenseField::Amount(amount) => self.amount = amount,
            ExpenseField::Description(description) => {
                self.description = description.trim().to_string()
            }
            ExpenseField::Category(category) => self.category = category,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// One editable field of an expense together with its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseField {
    Date(NaiveDate),
    Amount(Money),
    Description(String),
    Category(Category),
}

impl ExpenseField {
    /// Field name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Amount(_) => "amount",
            Self::Description(_) => "description",
            Self::Category(_) => "category",
        }
    }

    /// Check the new value against the expense invariants
    pub fn validate(&self) -> ExpenseResult<()> {
        match self {
            Self::Amount(amount) => check_amount(*amount),
            _ => Ok(()),
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ExpenseError::validation(format!(
            "Invalid date '{}'. Please use YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Parse a positive amount, rounded to cents
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(input)
        .map_err(|_| ExpenseError::validation(format!("Invalid amount '{}'", input.trim())))?;

    check_amount(amount)?;
    Ok(amount)
}

fn check_amount(amount: Money) -> ExpenseResult<()> {
    if !amount.is_positive() {
        return Err(ExpenseError::validation(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    if !amount.is_in_range() {
        return Err(ExpenseError::validation(format!(
            "Amount too large, the maximum is {}",
            Money::from_cents(Money::MAX_CENTS)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_description() {
        let expense = Expense::new(date(2024, 1, 5), Money::from_cents(1000), "  lunch ", Category::Food);
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.month_key(), "2024-01");
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        let zero = Expense::new(date(2024, 1, 5), Money::zero(), "", Category::Other);
        assert!(zero.validate().unwrap_err().is_validation());

        let negative = Expense::new(date(2024, 1, 5), Money::from_cents(-1), "", Category::Other);
        assert!(negative.validate().is_err());

        let ok = Expense::new(date(2024, 1, 5), Money::from_cents(1), "", Category::Other);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_apply_replaces_exactly_one_field() {
        let mut expense = Expense::new(date(2024, 3, 1), Money::from_cents(450), "bus", Category::Transportation);
        let original = expense.clone();

        expense.apply(ExpenseField::Amount(Money::from_cents(500)));
        assert_eq!(expense.amount, Money::from_cents(500));
        assert_eq!(expense.date, original.date);
        assert_eq!(expense.description, original.description);
        assert_eq!(expense.category, original.category);

        expense.apply(ExpenseField::Category(Category::Other));
        assert_eq!(expense.category, Category::Other);
        assert_eq!(expense.amount, Money::from_cents(500));
    }

    #[test]
    fn test_field_validation() {
        assert!(ExpenseField::Amount(Money::zero()).validate().is_err());
        assert!(ExpenseField::Amount(Money::from_cents(1)).validate().is_ok());
        assert!(ExpenseField::Description(String::new()).validate().is_ok());
        assert_eq!(ExpenseField::Date(date(2024, 1, 1)).name(), "date");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
        assert!(parse_date("29/02/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.345").unwrap(), Money::from_cents(1235));
        assert!(parse_amount("0").unwrap_err().is_validation());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("0.001").is_err());
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn test_parse_amount_upper_bound() {
        assert_eq!(
            parse_amount("90071992547409.92").unwrap(),
            Money::from_cents(Money::MAX_CENTS)
        );
        assert!(parse_amount("90071992547409.93").unwrap_err().is_validation());
        assert!(parse_amount("92233720368547758").unwrap_err().is_validation());

        let huge = Expense::new(date(2024, 1, 5), Money::from_cents(i64::MAX), "", Category::Other);
        assert!(huge.validate().is_err());
        assert!(ExpenseField::Amount(Money::from_cents(i64::MAX)).validate().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let expense = Expense::new(date(2024, 1, 5), Money::from_cents(1050), "Coffee", Category::Food);
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2024-01-05",
                "amount": 10.5,
                "description": "Coffee",
                "category": "Food"
            })
        );

        let back: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(back, expense);
    }
}
