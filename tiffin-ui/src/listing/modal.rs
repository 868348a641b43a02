//! Description modal
//!
//! Two-state overlay showing the full description, ingredient tags, and
//! the item's starting price. Never touches cart state.

use rust_decimal::Decimal;
use shared::models::{MenuItem, Pricing};

/// Modal state: closed, or open with a snapshot of the item
#[derive(Debug, Default)]
pub struct DescriptionModal {
    item: Option<MenuItem>,
}

impl DescriptionModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: &MenuItem) {
        self.item = Some(item.clone());
    }

    pub fn close(&mut self) {
        self.item = None;
    }

    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    pub fn item(&self) -> Option<&MenuItem> {
        self.item.as_ref()
    }

    /// Starting price shown in the modal: for variant items this is the
    /// first declared variant's rate regardless of the current selection
    /// (a deliberate simplification); for single items, the price field.
    pub fn starting_price(item: &MenuItem) -> Option<Decimal> {
        match &item.pricing {
            Pricing::Single { price } => *price,
            Pricing::Variant { rates } => rates.first().map(|(_, price)| price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::VariantRates;

    fn dec(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn variant_item(rates: &[(&str, i64)]) -> MenuItem {
        MenuItem {
            id: "B".to_string(),
            name: "Butter Chicken".to_string(),
            category: "Mains".to_string(),
            description: "Slow-cooked in a tomato gravy".to_string(),
            image: None,
            food_type: None,
            available: true,
            pricing: Pricing::variant(
                rates
                    .iter()
                    .map(|(k, p)| (k.to_string(), dec(*p)))
                    .collect::<VariantRates>(),
            ),
            ingredients: vec!["chicken".to_string(), "butter".to_string()],
        }
    }

    #[test]
    fn open_close_cycle() {
        let mut modal = DescriptionModal::new();
        let item = variant_item(&[("quarter", 80)]);

        assert!(!modal.is_open());
        modal.open(&item);
        assert!(modal.is_open());
        assert_eq!(modal.item().unwrap().id, "B");
        modal.close();
        assert!(modal.item().is_none());
    }

    #[test]
    fn starting_price_is_first_variant_rate() {
        let item = variant_item(&[("quarter", 80), ("half", 140)]);
        assert_eq!(DescriptionModal::starting_price(&item), Some(dec(80)));

        let degenerate = variant_item(&[]);
        assert_eq!(DescriptionModal::starting_price(&degenerate), None);
    }
}
