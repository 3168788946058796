//! Core data models for the planner
//!
//! This module contains the data structures that represent the budgeting
//! domain: accounts, shopping lists, items, categories, and money.

pub mod account;
pub mod category;
pub mod item;
pub mod list;
pub mod money;

pub use account::Account;
pub use category::{Category, UnknownCategory};
pub use item::Item;
pub use list::{BudgetSummary, ShoppingList, SpendingBreakdown};
pub use money::{Money, MoneyParseError};
