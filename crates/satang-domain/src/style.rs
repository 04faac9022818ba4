//! Presentation metadata for categories.
//!
//! Icon and color identifiers consumed by list and chart front-ends. This is
//! a static lookup keyed by variant; nothing here is stored per transaction.

use crate::category::Category;

/// Icon identifier a front-end can map to its own icon set.
pub fn icon(category: Category) -> &'static str {
    match category {
        Category::Salary => "banknote",
        Category::Food => "utensils",
        Category::Transport => "car",
        Category::Shopping => "shopping-bag",
        Category::Bills => "bolt",
        Category::Entertainment => "tv",
        Category::Other => "circle-help",
    }
}

/// Color identifier a front-end can map to its own palette.
pub fn color(category: Category) -> &'static str {
    match category {
        Category::Salary => "green",
        Category::Food => "orange",
        Category::Transport => "blue",
        Category::Shopping => "pink",
        Category::Bills => "purple",
        Category::Entertainment => "indigo",
        Category::Other => "gray",
    }
}
