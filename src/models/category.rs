//! Item categories
//!
//! The planner works with a fixed set of spending categories. Data files
//! written by older versions may contain arbitrary category strings, so
//! deserialization never fails: anything unrecognized becomes `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories an item can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Default category for new items
    #[default]
    Groceries,
    Utilities,
    Entertainment,
    Transport,
    Health,
    /// Fallback for unrecognized persisted values
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Groceries,
        Category::Utilities,
        Category::Entertainment,
        Category::Transport,
        Category::Health,
        Category::Other,
    ];

    /// The category name as written to data files and exports
    pub fn name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Strict, case-insensitive parse for user input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// Lenient conversion used at the serde boundary: unknown names map to the
// fallback instead of failing the whole load.
impl From<String> for Category {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Category::Other)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

/// Error type for strict category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected one of: Groceries, Utilities, Entertainment, Transport, Health, Other)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_groceries() {
        assert_eq!(Category::default(), Category::Groceries);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("groceries".parse::<Category>().unwrap(), Category::Groceries);
        assert_eq!("Transport".parse::<Category>().unwrap(), Category::Transport);
        assert!("Snacks".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialize_as_name() {
        let json = serde_json::to_string(&Category::Health).unwrap();
        assert_eq!(json, "\"Health\"");
    }

    #[test]
    fn test_deserialize_known_name() {
        let c: Category = serde_json::from_str("\"Utilities\"").unwrap();
        assert_eq!(c, Category::Utilities);
    }

    #[test]
    fn test_unknown_persisted_value_falls_back_to_other() {
        let c: Category = serde_json::from_str("\"Snacks\"").unwrap();
        assert_eq!(c, Category::Other);
    }
}
