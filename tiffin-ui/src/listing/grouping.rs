//! Category grouping

use shared::models::MenuItem;

/// Group items by category, preserving first-seen category order and
/// within-category source order. No items are dropped; an empty category
/// string forms its own bucket. Pure and idempotent, recomputed on every
/// menu snapshot.
pub fn group_by_category(items: &[MenuItem]) -> Vec<(String, Vec<&MenuItem>)> {
    let mut groups: Vec<(String, Vec<&MenuItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((item.category.clone(), vec![item])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Pricing;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("item {id}"),
            category: category.to_string(),
            description: String::new(),
            image: None,
            food_type: None,
            available: true,
            pricing: Pricing::single(Decimal::from(100)),
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn preserves_first_seen_order_and_every_item() {
        let items = vec![
            item("1", "Mains"),
            item("2", "Starters"),
            item("3", "Mains"),
            item("4", ""),
            item("5", "Starters"),
        ];

        let groups = group_by_category(&items);
        let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, vec!["Mains", "Starters", ""]);

        let total: usize = groups.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(total, items.len(), "no items dropped");

        let mains: Vec<&str> = groups[0].1.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(mains, vec!["1", "3"], "source order within category");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
