//! Reports module for the expense tracker
//!
//! Provides the monthly and per-category spending summaries.

pub mod category;
pub mod monthly;

pub use category::{CategorySummary, CategoryTotal};
pub use monthly::{MonthTotal, MonthlySummary};
