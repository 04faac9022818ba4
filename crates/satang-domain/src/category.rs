//! Domain types classifying transactions for aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of classification tags applied to transactions.
///
/// Serializes as the variant name, which is also the persisted wire form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Salary,
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 7] = [
        Category::Salary,
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Salary => "Salary",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_variant_once() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category), "duplicate in Category::ALL");
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
        let parsed: Category = serde_json::from_str("\"Bills\"").unwrap();
        assert_eq!(parsed, Category::Bills);
    }
}
