use serde::{Deserialize, Serialize};

use super::{Category, Dish, Restaurant};

/// One category together with its dishes, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: Category,
    pub dishes: Vec<Dish>,
}

/// The denormalized full-menu view: restaurant info plus every category
/// with its dishes. Unavailable dishes are included; filtering them out is
/// a presentation decision left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullMenuResponse {
    pub restaurant: Restaurant,
    pub categories: Vec<MenuCategory>,
}

impl FullMenuResponse {
    /// Total number of dishes across all categories
    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.dishes.len()).sum()
    }
}
