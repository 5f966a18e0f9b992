//! Service layer for the expense tracker
//!
//! The service layer sits between the CLI and the store, handling input
//! validation and filtering.

pub mod expense;
pub mod filter;

pub use expense::{CreateExpenseInput, EditExpenseInput, ExpenseService};
pub use filter::ExpenseFilter;
