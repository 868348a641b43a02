//! Storefront filters and the open/closed gate

use shared::models::{FoodType, MenuItem, RestaurantProfile};

/// Diner-facing menu filters: free-text search, dietary toggles, and the
/// category chip row
#[derive(Debug, Clone, Default)]
pub struct MenuFilters {
    pub search: String,
    pub veg: bool,
    pub non_veg: bool,
    pub active_category: Option<String>,
}

impl MenuFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category chip; selecting the active category clears it
    pub fn toggle_category(&mut self, category: &str) {
        if self.active_category.as_deref() == Some(category) {
            self.active_category = None;
        } else {
            self.active_category = Some(category.to_string());
        }
    }

    /// Case-insensitive substring match on name or description, then the
    /// dietary toggles (one set narrows; both set means no narrowing),
    /// then the active category.
    pub fn matches(&self, item: &MenuItem) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if self.veg && !self.non_veg && item.food_type != Some(FoodType::Veg) {
            return false;
        }
        if self.non_veg && !self.veg && item.food_type != Some(FoodType::NonVeg) {
            return false;
        }

        if let Some(category) = &self.active_category {
            if item.category != *category {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Whether the storefront renders the menu or the closed screen
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontGate {
    Open,
    Closed {
        name: String,
        logo_url: Option<String>,
        reopen_at: Option<String>,
    },
}

impl StorefrontGate {
    /// Absent `is_open` on the wire means open
    pub fn from_profile(profile: &RestaurantProfile) -> Self {
        if profile.is_open {
            Self::Open
        } else {
            Self::Closed {
                name: profile.restaurant_name.clone(),
                logo_url: profile.logo.as_ref().map(|logo| logo.url.clone()),
                reopen_at: profile.reopen_at.clone(),
            }
        }
    }
}
