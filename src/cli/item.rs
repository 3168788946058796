//! Item CLI commands
//!
//! Implements CLI commands for items on a shopping list. Items are addressed
//! by their position as shown by `planner list show`.

use std::str::FromStr;

use clap::Subcommand;

use crate::error::PlannerResult;
use crate::models::Category;
use crate::services::Planner;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a list
    Add {
        /// List name
        list: String,
        /// Item name
        name: String,
        /// Price (e.g. "3.50")
        price: String,
        /// Category (groceries, utilities, entertainment, transport, health, other)
        #[arg(short, long, default_value = "Groceries", value_parser = Category::from_str)]
        category: Category,
    },
    /// Remove the item at a position
    Remove {
        /// List name
        list: String,
        /// Item position
        index: usize,
    },
    /// Mark the item at a position as purchased
    Purchase {
        /// List name
        list: String,
        /// Item position
        index: usize,
    },
}

/// Handle an item command against the logged-in planner
pub fn handle_item_command(planner: &mut Planner, cmd: ItemCommands) -> PlannerResult<()> {
    match cmd {
        ItemCommands::Add {
            list,
            name,
            price,
            category,
        } => {
            planner.add_item(&list, &name, &price, category)?;
            println!("Added '{}' to '{}'.", name, list);
            warn_if_over_budget(planner, &list)?;
        }

        ItemCommands::Remove { list, index } => {
            planner.remove_item(&list, index)?;
            println!("Removed item {} from '{}'.", index, list);
        }

        ItemCommands::Purchase { list, index } => {
            planner.mark_purchased(&list, index)?;
            let summary = planner.summary(&list)?;
            println!(
                "Marked item {} purchased. Spent: {}, Remaining: {}",
                index, summary.spent, summary.remaining
            );
            warn_if_over_budget(planner, &list)?;
        }
    }

    Ok(())
}

fn warn_if_over_budget(planner: &Planner, list: &str) -> PlannerResult<()> {
    let summary = planner.summary(list)?;
    if summary.over_budget_by.is_positive() {
        println!("Budget exceeded by {}", summary.over_budget_by);
    }
    Ok(())
}
