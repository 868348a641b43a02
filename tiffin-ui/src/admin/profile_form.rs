//! Restaurant profile form

use super::FormError;
use super::menu_form::validate_image;
use rust_decimal::Decimal;
use shared::models::{ImageRef, OrderMode, RestaurantProfile, RestaurantUpdate};
use tracing::debug;

/// Profile edit form state
///
/// Numeric-ish fields are kept as entered text and sanitized on every
/// change, the way the form behaves while typing; they are parsed once at
/// submit.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub address: String,
    pub phone_number: String,
    pub table_numbers: String,
    pub gst_number: String,
    pub gst_rate: String,
    pub gst_enabled: bool,
    pub categories: Vec<String>,
    pub order_modes: shared::models::OrderModes,
    pub logo: Option<ImageRef>,
    image_error: Option<FormError>,
}

impl ProfileForm {
    /// Seed the form from the fetched profile
    pub fn from_profile(profile: &RestaurantProfile) -> Self {
        Self {
            address: profile.address.clone(),
            phone_number: profile.phone_number.clone(),
            table_numbers: profile.table_numbers.clone(),
            gst_number: profile.gst_number.clone(),
            gst_rate: profile.gst_rate.to_string(),
            gst_enabled: profile.gst_enabled,
            categories: profile.categories.clone(),
            order_modes: profile.order_modes,
            logo: profile.logo.clone(),
            image_error: None,
        }
    }

    /// Phone input: digits only, truncated to 10
    pub fn set_phone_number(&mut self, input: &str) {
        let digits: String = input.chars().filter(char::is_ascii_digit).take(10).collect();
        self.phone_number = digits;
    }

    /// GST rate input: digits and at most one decimal point
    pub fn set_gst_rate(&mut self, input: &str) {
        let mut seen_dot = false;
        self.gst_rate = input
            .chars()
            .filter(|c| {
                if c.is_ascii_digit() {
                    true
                } else if *c == '.' && !seen_dot {
                    seen_dot = true;
                    true
                } else {
                    false
                }
            })
            .collect();
    }

    /// Disabling GST clears the number and zeroes the rate
    pub fn set_gst_enabled(&mut self, enabled: bool) {
        self.gst_enabled = enabled;
        if !enabled {
            self.gst_number.clear();
            self.gst_rate = "0".to_string();
        }
    }

    /// Toggle an order mode; refusing to disable the last enabled one
    pub fn toggle_order_mode(&mut self, mode: OrderMode) -> Result<(), FormError> {
        if self.order_modes.is_enabled(mode) && self.order_modes.enabled_count() == 1 {
            return Err(FormError::LastOrderMode);
        }
        match mode {
            OrderMode::Eathere => self.order_modes.eathere = !self.order_modes.eathere,
            OrderMode::Takeaway => self.order_modes.takeaway = !self.order_modes.takeaway,
            OrderMode::Delivery => self.order_modes.delivery = !self.order_modes.delivery,
        }
        Ok(())
    }

    /// Add a category chip: trim, strip trailing hyphens, capitalize the
    /// first letter, dedupe. Empty input is ignored.
    pub fn add_category(&mut self, input: &str) {
        let trimmed = input.trim().trim_end_matches('-');
        if trimmed.is_empty() {
            return;
        }
        let mut chars = trimmed.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => return,
        };
        if !self.categories.contains(&capitalized) {
            debug!(category = %capitalized, "category chip added");
            self.categories.push(capitalized);
        }
    }

    pub fn remove_category(&mut self, category: &str) {
        self.categories.retain(|c| c != category);
    }

    /// Record a picked logo file; a failed check leaves the previous logo
    /// in place and parks the error until the next pick
    pub fn pick_logo(&mut self, mime: &str, size_bytes: u64, image: ImageRef) {
        match validate_image(mime, size_bytes) {
            Ok(()) => {
                self.logo = Some(image);
                self.image_error = None;
            }
            Err(err) => self.image_error = Some(err),
        }
    }

    pub fn image_error(&self) -> Option<&FormError> {
        self.image_error.as_ref()
    }

    /// Validate and build the update payload
    pub fn submit(&self) -> Result<RestaurantUpdate, FormError> {
        if self.image_error.is_some() {
            return Err(FormError::PendingImageError);
        }
        if self.order_modes.enabled_count() == 0 {
            return Err(FormError::LastOrderMode);
        }

        let gst_rate = self.gst_rate.parse::<Decimal>().unwrap_or(Decimal::ZERO);

        Ok(RestaurantUpdate {
            address: Some(self.address.clone()),
            phone_number: Some(self.phone_number.clone()),
            table_numbers: Some(self.table_numbers.clone()),
            categories: Some(self.categories.clone()),
            gst_number: Some(self.gst_number.clone()),
            gst_rate: Some(gst_rate),
            gst_enabled: Some(self.gst_enabled),
            logo: self.logo.clone(),
            order_modes: Some(self.order_modes),
        })
    }
}
