//! Expense CLI commands
//!
//! Implements the record-keeping commands: add, list, show, edit, delete.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_register};
use crate::error::ExpenseResult;
use crate::services::{CreateExpenseInput, EditExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

use super::FilterArgs;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "12.50")
        amount: String,
        /// Category code (1-8) or name
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Brief description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one expense
    Show {
        /// Expense number as shown by `list`
        index: usize,
    },

    /// Change one field of an expense
    Edit {
        /// Expense number as shown by `list`
        index: usize,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category code (1-8) or name
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by `list`
        index: usize,
        /// Confirm the deletion
        #[arg(short, long)]
        force: bool,
    },

    /// List the available categories
    Categories,
}

/// Handle expense commands
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let mut service = ExpenseService::new(store);
            let (index, expense) = service.create(CreateExpenseInput {
                amount,
                date,
                description,
                category,
            })?;

            println!("Expense added successfully!");
            print!("{}", format_expense_details(index, &expense, symbol));
        }

        ExpenseCommands::List { filter } => {
            let filter = filter.to_filter()?;
            let service = ExpenseService::new(store);
            let expenses = service.list(&filter);

            if filter.is_empty() {
                println!("Expenses");
            } else {
                println!("Filtered Expenses");
            }
            print!("{}", format_expense_register(&expenses, symbol));
        }

        ExpenseCommands::Show { index } => {
            let expense = store.get(index)?;
            print!("{}", format_expense_details(index, expense, symbol));
        }

        ExpenseCommands::Edit {
            index,
            date,
            amount,
            description,
            category,
        } => {
            let mut service = ExpenseService::new(store);
            let expense = service.update(
                index,
                EditExpenseInput {
                    date,
                    amount,
                    description,
                    category,
                },
            )?;

            println!("Expense updated successfully!");
            print!("{}", format_expense_details(index, &expense, symbol));
        }

        ExpenseCommands::Delete { index, force } => {
            let expense = store.get(index)?;

            if !force {
                print!("{}", format_expense_details(index, expense, symbol));
                println!();
                println!("To delete this expense, run again with --force flag:");
                println!("  expense delete {} --force", index);
                return Ok(());
            }

            let mut service = ExpenseService::new(store);
            let removed = service.delete(index)?;
            println!(
                "Deleted expense {}: {} {} {}",
                index,
                removed.date,
                removed.amount.format_with_symbol(symbol),
                removed.category
            );
        }

        ExpenseCommands::Categories => {
            println!("Available Categories:");
            print!("{}", format_category_list());
        }
    }

    Ok(())
}
