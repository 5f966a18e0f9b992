//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_category_list, format_expense_details, format_expense_register};
