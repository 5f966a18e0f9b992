//! Expense categories
//!
//! The category set is fixed. Each category has a short menu code ("1".."8")
//! and a label; the label is what gets persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Housing,
    Utilities,
    Healthcare,
    Education,
    Other,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Housing,
        Category::Utilities,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// The menu code for this category
    pub fn code(&self) -> &'static str {
        match self {
            Self::Food => "1",
            Self::Transportation => "2",
            Self::Entertainment => "3",
            Self::Housing => "4",
            Self::Utilities => "5",
            Self::Healthcare => "6",
            Self::Education => "7",
            Self::Other => "8",
        }
    }

    /// The display label (also the persisted form)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Resolve a menu code
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Resolve a label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    /// Accepts either a menu code or a label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| {
                ExpenseError::validation(format!(
                    "Unknown category '{}'. Use a code 1-8 or a name such as Food",
                    s.trim()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_label_mapping_is_bidirectional() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_codes_are_in_menu_order() {
        let codes: Vec<_> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(Category::from_code("4"), Some(Category::Housing));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Category::from_code("9"), None);
        assert_eq!(Category::from_code("0"), None);
        assert!("Groceries".parse::<Category>().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_accepts_code_or_label() {
        assert_eq!("2".parse::<Category>().unwrap(), Category::Transportation);
        assert_eq!("healthcare".parse::<Category>().unwrap(), Category::Healthcare);
        assert_eq!(" Other ".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::Education).unwrap();
        assert_eq!(json, "\"Education\"");

        let parsed: Category = serde_json::from_str("\"Utilities\"").unwrap();
        assert_eq!(parsed, Category::Utilities);

        assert!(serde_json::from_str::<Category>("\"Gifts\"").is_err());
    }
}
