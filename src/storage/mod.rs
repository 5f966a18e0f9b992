//! Storage layer for the expense tracker
//!
//! A single JSON file holding the expense list, written atomically.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome};
pub use file_io::{read_json, write_json_atomic};
