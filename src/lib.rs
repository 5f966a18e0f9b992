//! Expense Tracker - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for the `expense` command:
//! an ordered list of expenses persisted to a single JSON file, with editing,
//! filtering and monthly/category summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, categories and money
//! - `storage`: The JSON-file backed expense store
//! - `services`: Input validation and filtering
//! - `reports`: Monthly and category summaries
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{Category, Expense, Money};
//! use expense_tracker::reports::MonthlySummary;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::open("expenses.json");
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! store.add(Expense::new(date, Money::from_cents(1250), "Lunch", Category::Food))?;
//!
//! let summary = MonthlySummary::generate(&store);
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
