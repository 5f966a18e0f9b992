//! Expense store backed by a single JSON file
//!
//! The whole collection is held in memory in insertion order and written back
//! in full after every mutation. Positions exposed to callers are 1-based.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseField};
use crate::services::ExpenseFilter;

use super::file_io::{read_json, write_json_atomic};

/// What happened when the store read its file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file yet; started empty
    Missing,
    /// File read successfully with this many expenses
    Loaded(usize),
    /// File unreadable or corrupt; started empty and left the file as is
    Recovered(String),
}

/// Ordered, file-backed collection of expenses
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    load_outcome: LoadOutcome,
}

impl ExpenseStore {
    /// Open the store at `path`, loading whatever is there
    ///
    /// Never fails: a missing file gives an empty store, and an unreadable or
    /// corrupt one gives an empty store plus a warning in [`load_outcome`].
    ///
    /// [`load_outcome`]: ExpenseStore::load_outcome
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            expenses: Vec::new(),
            load_outcome: LoadOutcome::Missing,
        };
        store.load();
        store
    }

    /// Reload from disk, replacing the in-memory collection
    pub fn load(&mut self) -> &LoadOutcome {
        let outcome = if !self.path.exists() {
            self.expenses.clear();
            LoadOutcome::Missing
        } else {
            match read_expenses(&self.path) {
                Ok(expenses) => {
                    debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
                    self.expenses = expenses;
                    LoadOutcome::Loaded(self.expenses.len())
                }
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "could not load expense data, starting fresh");
                    self.expenses.clear();
                    LoadOutcome::Recovered(format!(
                        "Could not load expense data from {} ({}). Starting fresh.",
                        self.path.display(),
                        e
                    ))
                }
            }
        };

        self.load_outcome = outcome;
        &self.load_outcome
    }

    /// Result of the most recent load
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Write the full collection to disk
    ///
    /// The in-memory collection is kept whether or not the write succeeds.
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.expenses).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "could not save expense data");
            e
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append a validated expense and persist; returns its 1-based position
    ///
    /// Invalid expenses are rejected without touching the collection. If only
    /// the save fails, the expense stays in memory and the storage error is
    /// returned.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<usize> {
        expense.validate()?;

        self.expenses.push(expense);
        let index = self.expenses.len();
        debug!(index, "added expense");

        self.save()?;
        Ok(index)
    }

    /// Get the expense at a 1-based position
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        let offset = self.offset(index)?;
        Ok(&self.expenses[offset])
    }

    /// Replace one field of the expense at a 1-based position and persist
    pub fn edit(&mut self, index: usize, field: ExpenseField) -> ExpenseResult<&Expense> {
        let offset = self.offset(index)?;
        field.validate()?;

        debug!(index, field = field.name(), "editing expense");
        self.expenses[offset].apply(field);

        self.save()?;
        Ok(&self.expenses[offset])
    }

    /// Remove the expense at a 1-based position and persist
    ///
    /// Later expenses move down one position.
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let offset = self.offset(index)?;

        let removed = self.expenses.remove(offset);
        debug!(index, "deleted expense");

        self.save()?;
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses with their 1-based positions, optionally filtered
    pub fn list_filtered(&self, filter: Option<&ExpenseFilter>) -> Vec<(usize, &Expense)> {
        self.expenses
            .iter()
            .enumerate()
            .map(|(offset, expense)| (offset + 1, expense))
            .filter(|(_, expense)| filter.map_or(true, |f| f.matches(expense)))
            .collect()
    }

    /// Expenses dated within `[start, end]`; empty when `start > end`
    pub fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
        ExpenseFilter::new()
            .date_range(start, end)
            .apply(&self.expenses)
    }

    /// Expenses in exactly this category
    pub fn filter_by_category(&self, category: Category) -> Vec<&Expense> {
        ExpenseFilter::new().category(category).apply(&self.expenses)
    }

    fn offset(&self, index: usize) -> ExpenseResult<usize> {
        if index == 0 || index > self.expenses.len() {
            return Err(ExpenseError::invalid_index(index, self.expenses.len()));
        }
        Ok(index - 1)
    }
}

fn read_expenses(path: &Path) -> ExpenseResult<Vec<Expense>> {
    let expenses: Vec<Expense> = read_json(path)?;

    for (offset, expense) in expenses.iter().enumerate() {
        expense.validate().map_err(|e| {
            ExpenseError::Storage(format!("record {} is invalid: {}", offset + 1, e))
        })?;
    }

    Ok(expenses)
}
