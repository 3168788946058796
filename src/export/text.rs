//! Plain-text list export
//!
//! The output layout is stable: files exported by earlier versions of the
//! planner look exactly like this, so the header wording, the two-decimal
//! `$` figures (negatives render as `$-0.50`), and the per-item line must
//! not change.

use crate::models::{Money, ShoppingList};

/// Render a list as its exported text block
///
/// Pure serialization of current state; does not touch storage.
pub fn render_list(name: &str, list: &ShoppingList) -> String {
    let summary = list.summary();

    let mut output = String::new();
    output.push_str(&format!("Shopping List: {}\n", name));
    output.push_str(&format!("Budget: {}\n", export_amount(summary.budget)));
    output.push_str(&format!("Spent: {}\n", export_amount(summary.spent)));
    output.push_str(&format!("Remaining: {}\n", export_amount(summary.remaining)));
    output.push('\n');
    output.push_str("Items:\n");

    for item in list.items() {
        output.push_str(&format!(
            "{} - {} - {} - Category: {}\n",
            item.name,
            export_amount(item.price),
            item.status(),
            item.category
        ));
    }

    output
}

/// `$` plus the amount with exactly two decimals
fn export_amount(amount: Money) -> String {
    format!("${:.2}", amount.units())
}
