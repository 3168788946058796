//! List CLI commands
//!
//! Implements CLI commands for shopping list management.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_breakdown, format_items, format_summary};
use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;
use crate::services::Planner;

/// List subcommands
#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new shopping list
    Create {
        /// List name
        name: String,
    },
    /// Delete a list and everything on it
    Delete {
        /// List name
        name: String,
    },
    /// Show all lists in the account
    Ls,
    /// Show a list's items and budget summary
    Show {
        /// List name
        name: String,
    },
    /// Set a list's budget
    SetBudget {
        /// List name
        name: String,
        /// New budget (e.g. "25" or "25.50"); negative values are allowed
        budget: String,
    },
    /// Show budget, spent, remaining and any overspend
    Summary {
        /// List name
        name: String,
    },
    /// Show purchased vs. outstanding spending
    Breakdown {
        /// List name
        name: String,
    },
    /// Export a list as text
    Export {
        /// List name
        name: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a list command against the logged-in planner
pub fn handle_list_command(planner: &mut Planner, cmd: ListCommands) -> PlannerResult<()> {
    match cmd {
        ListCommands::Create { name } => {
            planner.create_list(&name)?;
            println!("Created list '{}'.", name);
        }

        ListCommands::Delete { name } => {
            planner.delete_list(&name)?;
            println!("Deleted list '{}'.", name);
        }

        ListCommands::Ls => {
            let names = planner.list_names()?;
            if names.is_empty() {
                println!("No lists yet. Create one with 'planner list create <name>'.");
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }

        ListCommands::Show { name } => {
            let list = planner.get_list(&name)?;
            print!("{}", format_items(list));
            println!();
            print!("{}", format_summary(&list.summary()));
        }

        ListCommands::SetBudget { name, budget } => {
            let budget = Money::parse(&budget)
                .map_err(|_| PlannerError::InvalidPrice(budget.clone()))?;
            planner.set_budget(&name, budget)?;
            print!("{}", format_summary(&planner.summary(&name)?));
        }

        ListCommands::Summary { name } => {
            print!("{}", format_summary(&planner.summary(&name)?));
        }

        ListCommands::Breakdown { name } => {
            print!("{}", format_breakdown(&planner.breakdown(&name)?));
        }

        ListCommands::Export { name, output } => {
            let text = planner.export_list(&name)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    println!("Exported '{}' to {}", name, path.display());
                }
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
