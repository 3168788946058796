//! planner-cli - Household shopping list and budget planner
//!
//! Accounts own named shopping lists; each list carries a budget and a set
//! of priced items with a purchase flag and a category. Spent and remaining
//! figures are always derived from the items at read time, never trusted
//! from stored caches, and the whole account store persists as a single
//! JSON file written atomically on logout and shutdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data-directory resolution
//! - `error`: custom error types
//! - `models`: core data models (money, categories, items, lists, accounts)
//! - `storage`: the account store and its on-disk gateway
//! - `services`: the session engine every operation goes through
//! - `export`: plain-text list export
//! - `display`: terminal output formatting
//! - `cli`: clap command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
