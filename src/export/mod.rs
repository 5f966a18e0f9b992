//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: For spreadsheets
//! - JSON: For machine-readable export with metadata
//! - YAML: For human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport};
pub use yaml::export_expenses_yaml;
