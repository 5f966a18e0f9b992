//! Core data models for the expense tracker
//!
//! Expenses, the fixed category set, and the money type.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{parse_amount, parse_date, Expense, ExpenseField, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
