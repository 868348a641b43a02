//! Menu item form and list maintenance

use super::FormError;
use rust_decimal::Decimal;
use shared::models::{
    FoodType, ImageRef, MenuItem, MenuItemCreate, MenuItemUpdate, Pricing, VariantRates,
};

/// Canonical portion keys scaffolding the variant price fields
pub const PORTION_KEYS: [&str; 3] = ["quarter", "half", "full"];

/// Image types the backend accepts
pub const ALLOWED_IMAGE_TYPES: [&str; 6] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/avif",
];

/// Upload size ceiling
pub const MAX_IMAGE_KB: u64 = 300;

/// Check a picked file against the type whitelist and size ceiling
pub fn validate_image(mime: &str, size_bytes: u64) -> Result<(), FormError> {
    let size_kb = size_bytes / 1024;
    if size_kb > MAX_IMAGE_KB {
        return Err(FormError::ImageTooLarge {
            size_kb,
            max_kb: MAX_IMAGE_KB,
        });
    }
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(FormError::UnsupportedImageType);
    }
    Ok(())
}

/// Pricing mode picked on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPricing {
    #[default]
    Single,
    Variant,
}

/// Add/edit item form state
///
/// Variant prices are held per canonical portion key; empty fields are
/// omitted from the payload.
#[derive(Debug, Clone, Default)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: Option<FoodType>,
    pub available: bool,
    pub pricing_mode: FormPricing,
    pub price: Option<Decimal>,
    /// (portion key, entered price) in canonical order
    pub variant_prices: Vec<(String, Option<Decimal>)>,
    pub image: Option<ImageRef>,
}

impl MenuItemForm {
    /// Fresh add form: single pricing, available, empty portion fields
    pub fn new() -> Self {
        Self {
            available: true,
            variant_prices: PORTION_KEYS
                .iter()
                .map(|key| (key.to_string(), None))
                .collect(),
            ..Default::default()
        }
    }

    /// Seed the edit form from an existing item
    pub fn from_item(item: &MenuItem) -> Self {
        let mut form = Self::new();
        form.name = item.name.clone();
        form.description = item.description.clone();
        form.category = item.category.clone();
        form.food_type = item.food_type;
        form.available = item.available;
        form.image = item.image.clone();

        match &item.pricing {
            Pricing::Single { price } => {
                form.pricing_mode = FormPricing::Single;
                form.price = *price;
            }
            Pricing::Variant { rates } => {
                form.pricing_mode = FormPricing::Variant;
                for (key, slot) in form.variant_prices.iter_mut() {
                    *slot = rates.get(key);
                }
                // carry portions outside the canonical scaffold too
                for (key, price) in rates.iter() {
                    if !PORTION_KEYS.contains(&key) {
                        form.variant_prices.push((key.to_string(), Some(price)));
                    }
                }
            }
        }
        form
    }

    pub fn set_variant_price(&mut self, key: &str, price: Option<Decimal>) {
        match self.variant_prices.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = price,
            None => self.variant_prices.push((key.to_string(), price)),
        }
    }

    fn entered_rates(&self) -> VariantRates {
        self.variant_prices
            .iter()
            .filter_map(|(key, price)| match price {
                Some(p) if *p > Decimal::ZERO => Some((key.clone(), *p)),
                _ => None,
            })
            .collect()
    }

    /// Shared validation for create and update
    fn validate(&self, require_image: bool) -> Result<Pricing, FormError> {
        if self.category.is_empty() {
            return Err(FormError::MissingCategory);
        }
        if require_image && self.image.is_none() {
            return Err(FormError::MissingImage);
        }

        match self.pricing_mode {
            FormPricing::Single => match self.price {
                Some(price) if price > Decimal::ZERO => Ok(Pricing::single(price)),
                _ => Err(FormError::InvalidSinglePrice),
            },
            FormPricing::Variant => {
                let rates = self.entered_rates();
                if rates.is_empty() {
                    return Err(FormError::NoVariantPrice);
                }
                Ok(Pricing::variant(rates))
            }
        }
    }

    /// Validate and build the create payload
    pub fn into_create(self) -> Result<MenuItemCreate, FormError> {
        let pricing = self.validate(true)?;
        Ok(MenuItemCreate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            food_type: self.food_type,
            available: self.available,
            pricing,
            image: self.image,
        })
    }

    /// Validate and build the update payload
    pub fn into_update(self) -> Result<MenuItemUpdate, FormError> {
        let pricing = self.validate(false)?;
        Ok(MenuItemUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            category: Some(self.category),
            food_type: self.food_type,
            available: Some(self.available),
            pricing: Some(pricing),
            image: self.image,
        })
    }
}

/// The admin's working copy of the menu list
#[derive(Debug, Clone, Default)]
pub struct MenuBook {
    items: Vec<MenuItem>,
}

impl MenuBook {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Newly created items go to the front of the list
    pub fn insert(&mut self, item: MenuItem) {
        self.items.insert(0, item);
    }

    /// Replace the item with a matching id; unknown ids are ignored
    pub fn replace(&mut self, item: MenuItem) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn filled_form() -> MenuItemForm {
        let mut form = MenuItemForm::new();
        form.name = "  Dal Tadka ".to_string();
        form.category = "Mains".to_string();
        form.price = Some(dec(120));
        form.image = Some(ImageRef {
            url: "https://cdn.example/dal.webp".to_string(),
            public_id: None,
        });
        form
    }

    #[test]
    fn create_requires_category_and_image() {
        let mut form = filled_form();
        form.category.clear();
        assert_eq!(form.clone().into_create(), Err(FormError::MissingCategory));

        let mut form = filled_form();
        form.image = None;
        assert_eq!(form.into_create(), Err(FormError::MissingImage));
    }

    #[test]
    fn single_pricing_needs_a_positive_price() {
        let mut form = filled_form();
        form.price = Some(Decimal::ZERO);
        assert_eq!(form.clone().into_create(), Err(FormError::InvalidSinglePrice));

        form.price = Some(dec(120));
        let payload = form.into_create().unwrap();
        assert_eq!(payload.name, "Dal Tadka", "whitespace trimmed");
        assert_eq!(payload.pricing, Pricing::single(dec(120)));
    }

    #[test]
    fn variant_pricing_needs_at_least_one_portion() {
        let mut form = filled_form();
        form.pricing_mode = FormPricing::Variant;
        assert_eq!(form.clone().into_create(), Err(FormError::NoVariantPrice));

        form.set_variant_price("half", Some(dec(140)));
        let payload = form.into_create().unwrap();
        let rates = payload.pricing.rates().unwrap();
        assert_eq!(rates.len(), 1, "empty portions omitted");
        assert_eq!(rates.get("half"), Some(dec(140)));
    }

    #[test]
    fn update_does_not_require_an_image() {
        let mut form = filled_form();
        form.image = None;
        assert!(form.into_update().is_ok());
    }

    #[test]
    fn edit_form_carries_non_canonical_portions() {
        let item = MenuItem {
            id: "B".to_string(),
            name: "Biryani".to_string(),
            category: "Mains".to_string(),
            description: String::new(),
            image: None,
            food_type: None,
            available: true,
            pricing: Pricing::variant(
                vec![
                    ("half".to_string(), dec(140)),
                    ("family_pack".to_string(), dec(420)),
                ]
                .into_iter()
                .collect::<VariantRates>(),
            ),
            ingredients: Vec::new(),
        };

        let form = MenuItemForm::from_item(&item);
        assert_eq!(form.pricing_mode, FormPricing::Variant);
        assert!(
            form.variant_prices
                .iter()
                .any(|(k, p)| k == "family_pack" && *p == Some(dec(420)))
        );
    }

    #[test]
    fn image_validation_enforces_type_and_size() {
        assert!(validate_image("image/webp", 100 * 1024).is_ok());
        assert_eq!(
            validate_image("image/webp", 400 * 1024),
            Err(FormError::ImageTooLarge {
                size_kb: 400,
                max_kb: MAX_IMAGE_KB
            })
        );
        assert_eq!(
            validate_image("application/pdf", 10 * 1024),
            Err(FormError::UnsupportedImageType)
        );
    }

    #[test]
    fn menu_book_maintenance() {
        let mut book = MenuBook::new(vec![]);
        let item = MenuItem {
            id: "A".to_string(),
            name: "Dal".to_string(),
            category: "Mains".to_string(),
            description: String::new(),
            image: None,
            food_type: None,
            available: true,
            pricing: Pricing::single(dec(120)),
            ingredients: Vec::new(),
        };

        book.insert(item.clone());
        let mut updated = item.clone();
        updated.name = "Dal Tadka".to_string();
        book.replace(updated);
        assert_eq!(book.items()[0].name, "Dal Tadka");

        book.delete("A");
        assert!(book.items().is_empty());
    }
}
