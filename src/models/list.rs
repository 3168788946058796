//! Shopping lists and their derived budget figures
//!
//! A list owns its items in insertion order (the order views and exports
//! show them in) plus a budget figure. Spent and remaining are never stored
//! as the source of truth: every read derives them from the items, so they
//! cannot drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

use super::{Category, Item, Money};

/// A named, budgeted collection of items
///
/// The persisted `spent` field is a cache kept for compatibility with
/// existing data files. It is refreshed after every mutation and rebuilt on
/// load, and nothing reads it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default)]
    items: Vec<Item>,

    /// Budget figure; deliberately unvalidated, negative values are allowed
    #[serde(default)]
    budget: Money,

    #[serde(default, rename = "spent")]
    spent_cache: Money,

    /// Legacy per-list table; always empty today but kept so old data
    /// files round-trip unchanged
    #[serde(default)]
    categories: BTreeMap<String, serde_json::Value>,
}

impl ShoppingList {
    /// Create an empty list with a zero budget
    pub fn new() -> Self {
        Self::default()
    }

    /// The items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items on the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The budget figure
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Total price of purchased items, derived from the items themselves
    pub fn spent(&self) -> Money {
        self.items
            .iter()
            .filter(|item| item.purchased)
            .map(|item| item.price)
            .sum()
    }

    /// Budget minus spent
    pub fn remaining(&self) -> Money {
        self.budget - self.spent()
    }

    /// Overwrite the budget
    pub fn set_budget(&mut self, budget: Money) {
        self.budget = budget;
        self.refresh_spent();
    }

    /// Append a new, unpurchased item
    ///
    /// Item names are unique within a list (case-sensitive, exact match);
    /// price and category differences do not make a name acceptable.
    pub fn add_item(&mut self, name: &str, price: Money, category: Category) -> PlannerResult<()> {
        if name.is_empty() {
            return Err(PlannerError::MissingField("item name"));
        }
        if self.items.iter().any(|item| item.name == name) {
            return Err(PlannerError::DuplicateItem(name.to_string()));
        }

        self.items.push(Item::new(name, price, category));
        self.refresh_spent();
        Ok(())
    }

    /// Remove and return the item at `index`
    pub fn remove_item(&mut self, index: usize) -> PlannerResult<Item> {
        if index >= self.items.len() {
            return Err(PlannerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        self.refresh_spent();
        Ok(item)
    }

    /// Mark the item at `index` as purchased
    ///
    /// Idempotent: an already-purchased item is left untouched.
    pub fn mark_purchased(&mut self, index: usize) -> PlannerResult<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(PlannerError::IndexOutOfRange { index, len })?;

        item.purchased = true;
        self.refresh_spent();
        Ok(())
    }

    /// Budget figures recomputed from current state
    pub fn summary(&self) -> BudgetSummary {
        let spent = self.spent();
        let remaining = self.budget - spent;
        BudgetSummary {
            budget: self.budget,
            spent,
            remaining,
            over_budget_by: if remaining.is_negative() {
                -remaining
            } else {
                Money::zero()
            },
        }
    }

    /// Purchased vs. outstanding totals, the figures a spending chart renders
    pub fn breakdown(&self) -> SpendingBreakdown {
        let (purchased, outstanding): (Vec<_>, Vec<_>) =
            self.items.iter().partition(|item| item.purchased);

        SpendingBreakdown {
            purchased_total: purchased.iter().map(|item| item.price).sum(),
            not_purchased_total: outstanding.iter().map(|item| item.price).sum(),
        }
    }

    /// Rewrite the persisted `spent` cache from the items
    pub(crate) fn refresh_spent(&mut self) {
        self.spent_cache = self.spent();
    }
}

/// Snapshot of a list's budget figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Amount by which spending exceeds the budget; zero when within budget
    pub over_budget_by: Money,
}

/// Purchased vs. outstanding totals for a list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingBreakdown {
    pub purchased_total: Money,
    pub not_purchased_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> ShoppingList {
        let mut list = ShoppingList::new();
        list.add_item("milk", Money::from_cents(350), Category::Groceries)
            .unwrap();
        list.add_item("bread", Money::from_cents(200), Category::Groceries)
            .unwrap();
        list
    }

    #[test]
    fn test_new_list_is_empty_with_zero_budget() {
        let list = ShoppingList::new();
        assert!(list.is_empty());
        assert_eq!(list.budget(), Money::zero());
        assert_eq!(list.spent(), Money::zero());
    }

    #[test]
    fn test_spent_counts_only_purchased_items() {
        let mut list = groceries();
        assert_eq!(list.spent(), Money::zero());

        list.mark_purchased(0).unwrap();
        assert_eq!(list.spent(), Money::from_cents(350));
        assert_eq!(list.remaining(), Money::from_cents(-350));
    }

    #[test]
    fn test_summary_within_budget() {
        let mut list = groceries();
        list.set_budget(Money::from_cents(1000));
        list.mark_purchased(0).unwrap();

        let summary = list.summary();
        assert_eq!(summary.budget, Money::from_cents(1000));
        assert_eq!(summary.spent, Money::from_cents(350));
        assert_eq!(summary.remaining, Money::from_cents(650));
        assert_eq!(summary.over_budget_by, Money::zero());
    }

    #[test]
    fn test_summary_over_budget() {
        let mut list = groceries();
        list.set_budget(Money::from_cents(300));
        list.mark_purchased(0).unwrap();

        let summary = list.summary();
        assert_eq!(summary.remaining, Money::from_cents(-50));
        assert_eq!(summary.over_budget_by, Money::from_cents(50));
    }

    #[test]
    fn test_negative_budget_is_accepted() {
        let mut list = ShoppingList::new();
        list.set_budget(Money::from_cents(-500));
        assert_eq!(list.budget(), Money::from_cents(-500));
    }

    #[test]
    fn test_duplicate_item_rejected_regardless_of_price_or_category() {
        let mut list = groceries();
        let err = list
            .add_item("milk", Money::from_cents(999), Category::Other)
            .unwrap_err();
        assert!(matches!(err, PlannerError::DuplicateItem(name) if name == "milk"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_item_name_rejected() {
        let mut list = ShoppingList::new();
        let err = list
            .add_item("", Money::zero(), Category::Groceries)
            .unwrap_err();
        assert!(matches!(err, PlannerError::MissingField(_)));
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut list = groceries();
        let count = list.len();
        let spent = list.spent();

        list.add_item("eggs", Money::from_cents(450), Category::Groceries)
            .unwrap();
        list.remove_item(count).unwrap();

        assert_eq!(list.len(), count);
        assert_eq!(list.spent(), spent);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = groceries();
        let err = list.remove_item(5).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::IndexOutOfRange { index: 5, len: 2 }
        ));
    }

    #[test]
    fn test_mark_purchased_is_idempotent() {
        let mut list = groceries();
        list.mark_purchased(1).unwrap();
        let after_first = list.clone();

        list.mark_purchased(1).unwrap();
        assert_eq!(list, after_first);
    }

    #[test]
    fn test_failed_add_leaves_list_unchanged() {
        let mut list = groceries();
        let before = list.clone();

        let _ = list.add_item("milk", Money::from_cents(100), Category::Groceries);
        assert_eq!(list, before);
    }

    #[test]
    fn test_breakdown_splits_purchased_and_outstanding() {
        let mut list = groceries();
        list.mark_purchased(0).unwrap();

        let breakdown = list.breakdown();
        assert_eq!(breakdown.purchased_total, Money::from_cents(350));
        assert_eq!(breakdown.not_purchased_total, Money::from_cents(200));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let list = groceries();
        let names: Vec<_> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["milk", "bread"]);
    }

    #[test]
    fn test_stale_spent_cache_is_ignored_on_read() {
        // A data file can carry a spent figure that no longer matches the
        // items; reads must derive from the items instead.
        let json = r#"{"items":[["milk",3.5,true,"Groceries"]],"budget":10,"spent":99,"categories":{}}"#;
        let list: ShoppingList = serde_json::from_str(json).unwrap();
        assert_eq!(list.spent(), Money::from_cents(350));
        assert_eq!(list.summary().remaining, Money::from_cents(650));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let mut list = groceries();
        list.set_budget(Money::from_cents(1000));
        list.mark_purchased(0).unwrap();

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "items": [["milk", 3.5, true, "Groceries"], ["bread", 2, false, "Groceries"]],
                "budget": 10,
                "spent": 3.5,
                "categories": {}
            })
        );

        let back: ShoppingList = serde_json::from_value(value).unwrap();
        assert_eq!(back, list);
    }
}
