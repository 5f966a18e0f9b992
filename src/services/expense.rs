//! Expense service
//!
//! Turns raw user input into validated values and applies them to the store.
//! Nothing reaches the store until it has been parsed and checked here.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, parse_date, Category, Expense, ExpenseField};
use crate::storage::ExpenseStore;

use super::filter::ExpenseFilter;

/// Input for recording a new expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    /// Amount as typed, e.g. "12.50"
    pub amount: String,
    /// `YYYY-MM-DD`; today when absent or blank
    pub date: Option<String>,
    pub description: String,
    /// Category code ("1".."8") or label
    pub category: String,
}

/// Input for editing one field of an expense
#[derive(Debug, Clone, Default)]
pub struct EditExpenseInput {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl EditExpenseInput {
    /// Parse the single field being edited
    pub fn into_field(self) -> ExpenseResult<ExpenseField> {
        let given = [
            self.date.is_some(),
            self.amount.is_some(),
            self.description.is_some(),
            self.category.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        if given != 1 {
            return Err(ExpenseError::validation(
                "Specify exactly one of --date, --amount, --description or --category",
            ));
        }

        if let Some(date) = self.date {
            return Ok(ExpenseField::Date(parse_date(&date)?));
        }
        if let Some(amount) = self.amount {
            return Ok(ExpenseField::Amount(parse_amount(&amount)?));
        }
        if let Some(category) = self.category {
            return Ok(ExpenseField::Category(category.parse::<Category>()?));
        }
        Ok(ExpenseField::Description(
            self.description.unwrap_or_default(),
        ))
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
    today: NaiveDate,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service dated today
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self::with_today(store, Local::now().date_naive())
    }

    /// Create a service with a fixed "today" (for default dates)
    pub fn with_today(store: &'a mut ExpenseStore, today: NaiveDate) -> Self {
        Self { store, today }
    }

    /// Validate and record a new expense; returns its 1-based position
    pub fn create(&mut self, input: CreateExpenseInput) -> ExpenseResult<(usize, Expense)> {
        let amount = parse_amount(&input.amount)?;
        let date = match input.date.as_deref().map(str::trim) {
            None | Some("") => self.today,
            Some(date) => parse_date(date)?,
        };
        let category: Category = input.category.parse()?;

        let expense = Expense::new(date, amount, input.description, category);
        let index = self.store.add(expense.clone())?;
        Ok((index, expense))
    }

    /// Get the expense at a 1-based position
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        self.store.get(index)
    }

    /// List expenses with their positions
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<(usize, &Expense)> {
        let filter = (!filter.is_empty()).then_some(filter);
        self.store.list_filtered(filter)
    }

    /// Edit one field of the expense at a 1-based position
    pub fn update(&mut self, index: usize, input: EditExpenseInput) -> ExpenseResult<Expense> {
        // Resolve the index before parsing so a bad position is reported first
        self.store.get(index)?;
        let field = input.into_field()?;
        self.store.edit(index, field).cloned()
    }

    /// Delete the expense at a 1-based position
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        self.store.delete(index)
    }
}
