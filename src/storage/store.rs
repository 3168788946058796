//! The in-memory account store
//!
//! The store is the whole persisted unit: every account, keyed by username.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Account;

/// Every account known to the planner, keyed by username
///
/// Serializes as a bare username-to-account-object map, the same shape
/// existing `users.json` files use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountStore {
    accounts: BTreeMap<String, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an account by username
    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Look up an account by username for mutation
    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Check whether a username is taken
    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Insert an account under the given username
    pub fn insert(&mut self, username: String, account: Account) {
        self.accounts.insert(username, account);
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check whether the store has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All usernames in the store
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    /// Rebuild every list's persisted `spent` cache from its items
    ///
    /// Called after deserialization so stale figures written by older runs
    /// never survive a load.
    pub(crate) fn refresh_caches(&mut self) {
        for account in self.accounts.values_mut() {
            for list in account.lists.values_mut() {
                list.refresh_spent();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_store() {
        let store = AccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = AccountStore::new();
        store.insert("a".to_string(), Account::new("p"));

        assert!(store.contains("a"));
        assert_eq!(store.len(), 1);
        assert!(store.get("a").unwrap().verify_password("p"));
        assert!(store.get("b").is_none());
    }

    #[test]
    fn test_deserializes_legacy_wire_format() {
        let json = r#"{
            "a": {
                "password": "p",
                "shopping_lists": {
                    "groceries": {
                        "items": [["milk", 3.5, true, "Groceries"]],
                        "budget": 10,
                        "spent": 3.5,
                        "categories": {}
                    }
                }
            }
        }"#;

        let store: AccountStore = serde_json::from_str(json).unwrap();
        let account = store.get("a").unwrap();
        let list = account.lists.get("groceries").unwrap();

        assert_eq!(list.budget(), Money::from_cents(1000));
        assert_eq!(list.spent(), Money::from_cents(350));
        assert_eq!(list.items()[0].name, "milk");
    }

    #[test]
    fn test_serializes_as_transparent_map() {
        let mut store = AccountStore::new();
        store.insert("a".to_string(), Account::new("p"));

        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "a": { "password": "p", "shopping_lists": {} }
            })
        );
    }
}
