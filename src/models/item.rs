//! A single line entry on a shopping list

use serde::{Deserialize, Serialize};

use super::{Category, Money};

/// One purchasable entry on a shopping list
///
/// On disk an item is the 4-element array `[name, price, purchased, category]`
/// that every version of the planner has written, so the struct converts
/// through [`ItemRecord`] at the serde boundary instead of serializing its
/// fields by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    /// Item name, unique (case-sensitive) within its list
    pub name: String,

    /// Price, non-negative by construction at the operation layer
    pub price: Money,

    /// Whether the item has been bought
    pub purchased: bool,

    /// Spending category
    pub category: Category,
}

impl Item {
    /// Create a new, unpurchased item
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            purchased: false,
            category,
        }
    }

    /// Human-readable purchase state, as used in list views and exports
    pub fn status(&self) -> &'static str {
        if self.purchased {
            "Purchased"
        } else {
            "Not Purchased"
        }
    }
}

/// Wire representation of an item: `[name, price, purchased, category]`
#[derive(Serialize, Deserialize)]
struct ItemRecord(String, Money, bool, Category);

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            name: record.0,
            price: record.1,
            purchased: record.2,
            category: record.3,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self(item.name, item.price, item.purchased, item.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unpurchased() {
        let item = Item::new("milk", Money::from_cents(350), Category::Groceries);
        assert!(!item.purchased);
        assert_eq!(item.status(), "Not Purchased");
    }

    #[test]
    fn test_serializes_as_positional_array() {
        let item = Item::new("milk", Money::from_cents(350), Category::Groceries);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"["milk",3.5,false,"Groceries"]"#);
    }

    #[test]
    fn test_deserializes_from_positional_array() {
        let item: Item = serde_json::from_str(r#"["bread",2,true,"Groceries"]"#).unwrap();
        assert_eq!(item.name, "bread");
        assert_eq!(item.price, Money::from_cents(200));
        assert!(item.purchased);
        assert_eq!(item.category, Category::Groceries);
    }

    #[test]
    fn test_unknown_category_in_record_falls_back() {
        let item: Item = serde_json::from_str(r#"["gum",0.5,false,"Impulse"]"#).unwrap();
        assert_eq!(item.category, Category::Other);
    }
}
