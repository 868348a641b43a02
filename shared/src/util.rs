//! Small formatting helpers

use rust_decimal::Decimal;

/// Render a variant key for display: underscores become spaces and each
/// word is title-cased ("extra_spicy" -> "Extra Spicy").
pub fn format_variant_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-decimal rupee rendering
pub fn format_price(price: Decimal) -> String {
    format!("₹{:.2}", price)
}
