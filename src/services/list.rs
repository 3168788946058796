//! List and item operations
//!
//! All operations here require an active session and act on the active
//! account's lists. Each one either applies completely or returns an error
//! with the store unchanged.

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetSummary, Category, Money, ShoppingList, SpendingBreakdown};

use super::session::Planner;

impl Planner {
    /// Create an empty list with a zero budget under the active account
    pub fn create_list(&mut self, name: &str) -> PlannerResult<()> {
        if name.is_empty() {
            return Err(PlannerError::MissingField("list name"));
        }

        let account = self.active_account_mut()?;
        if account.lists.contains_key(name) {
            return Err(PlannerError::DuplicateList(name.to_string()));
        }

        account.lists.insert(name.to_string(), ShoppingList::new());
        Ok(())
    }

    /// Delete a list and everything on it
    pub fn delete_list(&mut self, name: &str) -> PlannerResult<()> {
        let account = self.active_account_mut()?;
        account
            .lists
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PlannerError::ListNotFound(name.to_string()))
    }

    /// Names of the active account's lists
    pub fn list_names(&self) -> PlannerResult<Vec<String>> {
        Ok(self.active_account()?.lists.keys().cloned().collect())
    }

    /// Look up one of the active account's lists
    pub fn get_list(&self, name: &str) -> PlannerResult<&ShoppingList> {
        self.active_account()?
            .lists
            .get(name)
            .ok_or_else(|| PlannerError::ListNotFound(name.to_string()))
    }

    fn get_list_mut(&mut self, name: &str) -> PlannerResult<&mut ShoppingList> {
        self.active_account_mut()?
            .lists
            .get_mut(name)
            .ok_or_else(|| PlannerError::ListNotFound(name.to_string()))
    }

    /// Parse `price_text` and append a new item to the named list
    ///
    /// The price must parse as a non-negative amount. The item starts
    /// unpurchased.
    pub fn add_item(
        &mut self,
        list_name: &str,
        item_name: &str,
        price_text: &str,
        category: Category,
    ) -> PlannerResult<()> {
        if item_name.is_empty() {
            return Err(PlannerError::MissingField("item name"));
        }
        if price_text.is_empty() {
            return Err(PlannerError::MissingField("price"));
        }

        let price = Money::parse(price_text)
            .map_err(|_| PlannerError::InvalidPrice(price_text.to_string()))?;
        if price.is_negative() {
            return Err(PlannerError::InvalidPrice(price_text.to_string()));
        }

        self.get_list_mut(list_name)?.add_item(item_name, price, category)
    }

    /// Remove the item at `index` from the named list
    pub fn remove_item(&mut self, list_name: &str, index: usize) -> PlannerResult<()> {
        self.get_list_mut(list_name)?.remove_item(index).map(|_| ())
    }

    /// Mark the item at `index` as purchased (idempotent)
    pub fn mark_purchased(&mut self, list_name: &str, index: usize) -> PlannerResult<()> {
        self.get_list_mut(list_name)?.mark_purchased(index)
    }

    /// Overwrite a list's budget; any value is accepted, including negative
    pub fn set_budget(&mut self, list_name: &str, budget: Money) -> PlannerResult<()> {
        self.get_list_mut(list_name)?.set_budget(budget);
        Ok(())
    }

    /// Budget, spent, remaining and overspend, recomputed from current state
    pub fn summary(&self, list_name: &str) -> PlannerResult<BudgetSummary> {
        Ok(self.get_list(list_name)?.summary())
    }

    /// Purchased vs. outstanding totals for the named list
    pub fn breakdown(&self, list_name: &str) -> PlannerResult<SpendingBreakdown> {
        Ok(self.get_list(list_name)?.breakdown())
    }

    /// Render a list as its text-file export
    pub fn export_list(&self, list_name: &str) -> PlannerResult<String> {
        Ok(crate::export::render_list(list_name, self.get_list(list_name)?))
    }
}
