//! User accounts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ShoppingList;

/// A credentialed owner of shopping lists
///
/// The username is not stored here; it is the account's key in the store.
/// Passwords are stored verbatim and compared with plain equality — the
/// data file is assumed private to the machine's user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub password: String,

    /// The account's lists, keyed by list name
    #[serde(rename = "shopping_lists")]
    pub lists: BTreeMap<String, ShoppingList>,
}

impl Account {
    /// Create an account with no lists
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            lists: BTreeMap::new(),
        }
    }

    /// Case-sensitive plain-equality password check
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
