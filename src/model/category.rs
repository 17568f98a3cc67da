//! Category: the fixed list of shelf labels an item can carry
//!
//! The set is closed by design; the add/edit form offers exactly these
//! labels. Serialized form is the label string itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shelf category for a shopping-list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Fruits,
    Dairy,
    Bakery,
    Meat,
    Poultry,
    Frozen,
    Pantry,
    Beverages,
    Household,
    Misc,
}

impl Category {
    /// Every category, in picker order
    pub const ALL: [Category; 11] = [
        Category::Produce,
        Category::Fruits,
        Category::Dairy,
        Category::Bakery,
        Category::Meat,
        Category::Poultry,
        Category::Frozen,
        Category::Pantry,
        Category::Beverages,
        Category::Household,
        Category::Misc,
    ];

    /// Display label (also the serialized form)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Fruits => "Fruits",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Meat => "Meat",
            Category::Poultry => "Poultry",
            Category::Frozen => "Frozen",
            Category::Pantry => "Pantry",
            Category::Beverages => "Beverages",
            Category::Household => "Household",
            Category::Misc => "Misc",
        }
    }

    /// First character of the label, used by compact list rows
    pub fn initial(&self) -> char {
        // Labels are non-empty by construction
        self.label().chars().next().unwrap_or(' ')
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));

            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_initial() {
        assert_eq!(Category::Dairy.initial(), 'D');
        assert_eq!(Category::Misc.initial(), 'M');
    }

    #[test]
    fn test_all_covers_every_label_once() {
        let mut labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Category::ALL.len());
    }
}
