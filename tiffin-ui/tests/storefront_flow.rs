//! End-to-end storefront flow against wire-shaped menu data

use rust_decimal::Decimal;
use shared::cart::Cart;
use shared::models::MenuItem;
use std::sync::{Arc, Mutex};
use tiffin_ui::listing::{group_by_category, ListingSession};
use tiffin_ui::MenuFilters;

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn menu() -> Vec<MenuItem> {
    serde_json::from_str(
        r#"[
            {
                "_id": "dal",
                "name": "Dal Tadka",
                "category": "Mains",
                "description": "Yellow lentils tempered with ghee",
                "type": "veg",
                "pricingType": "single",
                "price": 120,
                "available": true
            },
            {
                "_id": "bc",
                "name": "Butter Chicken",
                "category": "Mains",
                "description": "Slow-cooked in a tomato gravy",
                "type": "non-veg",
                "pricingType": "variant",
                "variantRates": {"quarter": 80, "half": 140, "full": 260},
                "available": true
            },
            {
                "_id": "gt",
                "name": "Gulab Jamun",
                "category": "Desserts",
                "description": "",
                "type": "veg",
                "pricingType": "single",
                "price": 60,
                "available": false
            }
        ]"#,
    )
    .unwrap()
}

#[test]
fn menu_snapshot_to_cart_total() {
    let menu = menu();

    // grouping: first-seen category order
    let groups = group_by_category(&menu);
    let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(categories, vec!["Mains", "Desserts"]);

    // default variant pass picks the first declared portion
    let mut session = ListingSession::new();
    assert!(session.observe_menu(&menu));
    assert_eq!(session.selected_variant("bc"), Some("quarter"));

    // total observer fires on every mutation
    let totals = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&totals);
    let mut cart = Cart::new();
    cart.set_on_total_change(Box::new(move |total| {
        sink.lock().unwrap().push(total);
    }));

    let dal = &menu[0];
    let butter_chicken = &menu[1];
    let dessert = &menu[2];

    assert!(session.add_to_cart(dal, &mut cart));
    session.select_variant(butter_chicken, "half");
    assert!(session.add_to_cart(butter_chicken, &mut cart));
    assert!(session.add_to_cart(butter_chicken, &mut cart));

    // unavailable items never reach the cart
    assert!(!session.add_to_cart(dessert, &mut cart));

    assert_eq!(cart.total(), dec(400));
    assert_eq!(*totals.lock().unwrap(), vec![dec(120), dec(260), dec(400)]);

    // rows reflect the cart snapshot
    let row = session.row(butter_chicken, &cart);
    assert_eq!(row.cart_key.as_str(), "bc-half");
    assert_eq!(row.quantity, 2);
    assert_eq!(row.display_price, Some(dec(140)));

    // removing the last unit drops the entry
    session.remove_from_cart(dal, &mut cart);
    assert_eq!(session.row(dal, &cart).quantity, 0);
    assert_eq!(cart.total(), dec(280));
}

#[test]
fn filters_narrow_before_grouping() {
    let menu = menu();
    let mut filters = MenuFilters::new();
    filters.veg = true;

    let visible: Vec<&MenuItem> = filters.apply(&menu);
    let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["dal", "gt"]);

    filters.search = "gravy".to_string();
    assert!(filters.apply(&menu).is_empty(), "veg filter and search compose");
}
