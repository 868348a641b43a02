//! Response envelopes for the backend API
//!
//! The backend is loose about wrapping: the menu endpoint may return a bare
//! array, `{"menu": [...]}`, or `{"data": [...]}`; the restaurant endpoints
//! may wrap under `"restaurant"` or not. Absence of a wrapper is "not set",
//! never an error.

use crate::models::{MenuItem, RestaurantProfile};
use serde::{Deserialize, Serialize};

/// Menu list payload in any of the wire shapes the backend produces
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenuPayload {
    Bare(Vec<MenuItem>),
    Wrapped { menu: Vec<MenuItem> },
    Data { data: Vec<MenuItem> },
}

impl MenuPayload {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            Self::Bare(items) | Self::Wrapped { menu: items } | Self::Data { data: items } => items,
        }
    }
}

/// Restaurant payload, wrapped or bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RestaurantPayload {
    Wrapped { restaurant: RestaurantProfile },
    Bare(RestaurantProfile),
}

impl RestaurantPayload {
    pub fn into_profile(self) -> RestaurantProfile {
        match self {
            Self::Wrapped { restaurant } | Self::Bare(restaurant) => restaurant,
        }
    }
}

/// Mutation response carrying the affected item
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemPayload {
    Wrapped { item: MenuItem },
    Bare(MenuItem),
}

impl ItemPayload {
    pub fn into_item(self) -> MenuItem {
        match self {
            Self::Wrapped { item } | Self::Bare(item) => item,
        }
    }
}

/// Error body shape (`{"message": "..."}`); everything optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_payload_accepts_bare_and_wrapped_shapes() {
        let item = r#"{"_id": "A", "name": "Dal", "pricingType": "single", "price": 120}"#;

        let bare: MenuPayload = serde_json::from_str(&format!("[{item}]")).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let wrapped: MenuPayload =
            serde_json::from_str(&format!(r#"{{"menu": [{item}]}}"#)).unwrap();
        assert_eq!(wrapped.into_items()[0].id, "A");
    }

    #[test]
    fn restaurant_payload_unwraps() {
        let payload: RestaurantPayload =
            serde_json::from_str(r#"{"restaurant": {"restaurantName": "Tiffin House"}}"#).unwrap();
        assert_eq!(payload.into_profile().restaurant_name, "Tiffin House");
    }
}
