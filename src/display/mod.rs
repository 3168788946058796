//! Display formatting for terminal output

pub mod list;

pub use list::{format_breakdown, format_items, format_summary};
