//! Export module for the planner
//!
//! Pure serialization of domain state to the stable text format; writing
//! the result anywhere is the caller's business.

pub mod text;

pub use text::render_list;
