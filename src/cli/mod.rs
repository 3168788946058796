//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the planner engine.

pub mod item;
pub mod list;

pub use item::{handle_item_command, ItemCommands};
pub use list::{handle_list_command, ListCommands};
