//! Shopping list display formatting
//!
//! Formats lists for terminal output. Everything here is a pure consumer of
//! computed figures; no domain logic lives in this module.

use crate::models::{BudgetSummary, ShoppingList, SpendingBreakdown};

/// Format a list's items as an indexed table
pub fn format_items(list: &ShoppingList) -> String {
    if list.is_empty() {
        return "No items on this list.\n".to_string();
    }

    let name_width = list
        .items()
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>10}  {:<13}  {}\n",
        "#",
        "Name",
        "Price",
        "Status",
        "Category",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->10}  {:-<13}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (index, item) in list.items().iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>10}  {:<13}  {}\n",
            index,
            item.name,
            item.price.to_string(),
            item.status(),
            item.category,
            name_width = name_width,
        ));
    }

    output
}

/// Format the budget summary lines shown under a list
pub fn format_summary(summary: &BudgetSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget:    {}\n", summary.budget));
    output.push_str(&format!("Spent:     {}\n", summary.spent));
    output.push_str(&format!("Remaining: {}\n", summary.remaining));

    if summary.over_budget_by.is_positive() {
        output.push_str(&format!("Budget exceeded by {}\n", summary.over_budget_by));
    }

    output
}

/// Format the purchased/outstanding breakdown with simple bars
pub fn format_breakdown(breakdown: &SpendingBreakdown) -> String {
    let purchased = breakdown.purchased_total.units();
    let outstanding = breakdown.not_purchased_total.units();
    let total = purchased + outstanding;

    let mut output = String::new();
    output.push_str("Spending breakdown\n");
    output.push_str(&format!(
        "Purchased      {:>10}  {}\n",
        breakdown.purchased_total.to_string(),
        format_bar(purchased, total, 20),
    ));
    output.push_str(&format!(
        "Not Purchased  {:>10}  {}\n",
        breakdown.not_purchased_total.to_string(),
        format_bar(outstanding, total, 20),
    ));

    output
}

/// Create a simple bar chart representation
fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
