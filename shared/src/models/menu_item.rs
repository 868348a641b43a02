//! Menu Item Model

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Image reference (already-hosted asset)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// Dietary tag (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FoodType {
    Veg,
    NonVeg,
}

/// Ordered variant price list
///
/// An explicit sequence of `(variant_key, price)` pairs rather than a map,
/// so "first declared variant" is a stable, testable contract instead of an
/// accident of map iteration order. Serializes as a JSON object preserving
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantRates(Vec<(String, Decimal)>);

impl VariantRates {
    pub fn new(pairs: Vec<(String, Decimal)>) -> Self {
        Self(pairs)
    }

    /// First declared variant, the default selection for a fresh item
    pub fn first(&self) -> Option<(&str, Decimal)> {
        self.0.first().map(|(k, p)| (k.as_str(), *p))
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, p)| *p)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(k, p)| (k.as_str(), *p))
    }
}

impl FromIterator<(String, Decimal)> for VariantRates {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for VariantRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, price) in &self.0 {
            map.serialize_entry(key, price)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariantRates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatesVisitor;

        impl<'de> Visitor<'de> for RatesVisitor {
            type Value = VariantRates;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of variant key to price")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, price)) = access.next_entry::<String, Decimal>()? {
                    pairs.push((key, price));
                }
                Ok(VariantRates(pairs))
            }
        }

        deserializer.deserialize_map(RatesVisitor)
    }
}

/// Price source, selected by the wire `pricingType` tag
///
/// Exactly one of the two shapes is authoritative per item. A `Variant`
/// item with an empty rate list is degenerate and renders as non-addable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "pricingType", rename_all = "lowercase")]
pub enum Pricing {
    Single {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        price: Option<Decimal>,
    },
    Variant {
        #[serde(default, rename = "variantRates")]
        rates: VariantRates,
    },
}

impl Pricing {
    pub fn single(price: Decimal) -> Self {
        Self::Single { price: Some(price) }
    }

    pub fn variant(rates: VariantRates) -> Self {
        Self::Variant { rates }
    }

    pub fn is_variant(&self) -> bool {
        matches!(self, Self::Variant { .. })
    }

    /// Variant rate list, `None` for single-priced items
    pub fn rates(&self) -> Option<&VariantRates> {
        match self {
            Self::Single { .. } => None,
            Self::Variant { rates } => Some(rates),
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::Single { price: None }
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(flatten)]
    pub pricing: Pricing,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
    pub available: bool,
    #[serde(flatten)]
    pub pricing: Pricing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    // A flattened `None` serializes nothing, matching the other unset fields
    #[serde(flatten)]
    pub pricing: Option<Pricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}
