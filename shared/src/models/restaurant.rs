//! Restaurant Profile Model

use super::menu_item::ImageRef;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order fulfilment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    Eathere,
    Takeaway,
    Delivery,
}

/// Enabled order modes (singleton flags on the profile)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderModes {
    #[serde(default = "default_true")]
    pub eathere: bool,
    #[serde(default = "default_true")]
    pub takeaway: bool,
    #[serde(default = "default_true")]
    pub delivery: bool,
}

impl OrderModes {
    pub fn is_enabled(&self, mode: OrderMode) -> bool {
        match mode {
            OrderMode::Eathere => self.eathere,
            OrderMode::Takeaway => self.takeaway,
            OrderMode::Delivery => self.delivery,
        }
    }

    pub fn enabled_count(&self) -> usize {
        [self.eathere, self.takeaway, self.delivery]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }
}

impl Default for OrderModes {
    fn default() -> Self {
        Self {
            eathere: true,
            takeaway: true,
            delivery: true,
        }
    }
}

/// Restaurant profile entity (singleton)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub table_numbers: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub gst_number: String,
    #[serde(default)]
    pub gst_rate: Decimal,
    #[serde(default)]
    pub gst_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub qr_code: String,
    #[serde(default)]
    pub domain: String,
    /// Absent on the wire means open
    #[serde(default = "default_true")]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reopen_at: Option<String>,
    #[serde(default)]
    pub order_modes: OrderModes,
}

fn default_true() -> bool {
    true
}

impl Default for RestaurantProfile {
    fn default() -> Self {
        Self {
            restaurant_name: String::new(),
            address: String::new(),
            phone_number: String::new(),
            table_numbers: String::new(),
            categories: Vec::new(),
            gst_number: String::new(),
            gst_rate: Decimal::ZERO,
            gst_enabled: false,
            logo: None,
            qr_code: String::new(),
            domain: String::new(),
            is_open: true,
            reopen_at: None,
            order_modes: OrderModes::default(),
        }
    }
}

/// Update restaurant profile payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_numbers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_modes: Option<OrderModes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_open_defaults_to_open() {
        let profile: RestaurantProfile =
            serde_json::from_str(r#"{"restaurantName": "Tiffin House"}"#).unwrap();
        assert!(profile.is_open);
        assert!(profile.order_modes.eathere);
        assert_eq!(profile.order_modes.enabled_count(), 3);
    }

    #[test]
    fn order_modes_round_trip() {
        let modes: OrderModes =
            serde_json::from_str(r#"{"eathere": false, "takeaway": true}"#).unwrap();
        assert!(!modes.is_enabled(OrderMode::Eathere));
        assert!(modes.is_enabled(OrderMode::Delivery), "missing flag defaults on");
        assert_eq!(modes.enabled_count(), 2);
    }
}
