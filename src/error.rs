//! Custom error types for the planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// An account with the same username already exists
    #[error("an account named '{0}' already exists")]
    DuplicateAccount(String),

    /// Bad username/password pair, or empty credentials on signup
    #[error("invalid username or password")]
    InvalidCredentials,

    /// An operation that needs a logged-in account was called without one
    #[error("no account is logged in")]
    NoActiveSession,

    /// A list with the same name already exists in the account
    #[error("a list named '{0}' already exists")]
    DuplicateList(String),

    /// The named list does not exist in the account
    #[error("no list named '{0}'")]
    ListNotFound(String),

    /// An item with the same name is already on the list
    #[error("'{0}' is already on this list")]
    DuplicateItem(String),

    /// The price text did not parse as a non-negative amount
    #[error("invalid price: '{0}'")]
    InvalidPrice(String),

    /// A required field was left empty
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// The item position does not exist on the list
    #[error("no item at position {index} (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The data file exists but could not be parsed
    #[error("saved data is corrupt: {0}")]
    CorruptStore(String),

    /// File I/O failed while reading or writing the data file
    #[error("storage error: {0}")]
    Persistence(String),

    /// Configuration-related errors (paths, environment)
    #[error("configuration error: {0}")]
    Config(String),
}

impl PlannerError {
    /// Check if this is a corrupt-store error
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore(_))
    }

    /// Check if this is a duplicate error (account, list or item)
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccount(_) | Self::DuplicateList(_) | Self::DuplicateItem(_)
        )
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
