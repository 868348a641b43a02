//! Admin menu list filter

use shared::models::{FoodType, MenuItem};

/// Back-office list filter; `None` on a field means "all"
#[derive(Debug, Clone, Default)]
pub struct AdminMenuFilter {
    pub search: String,
    pub category: Option<String>,
    pub food_type: Option<FoodType>,
    pub available: Option<bool>,
}

impl AdminMenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !item.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category != *category {
                return false;
            }
        }
        if let Some(food_type) = self.food_type {
            if item.food_type != Some(food_type) {
                return false;
            }
        }
        if let Some(available) = self.available {
            if item.available != available {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
