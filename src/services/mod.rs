//! Business logic layer
//!
//! The [`Planner`] engine owns the account store and the session, and
//! exposes the full operation surface: authentication in `session`, list
//! and item operations in `list`.

mod list;
pub mod session;

pub use session::{Planner, SessionContext};
