//! End-to-end storefront scenarios against the sample catalog.

use std::time::Duration;

use eco_commerce::prelude::*;

fn product(catalog: &StaticCatalog, id: &str) -> Product {
    catalog.get(&ProductId::new(id)).unwrap().clone()
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        email: "leaf@example.com".into(),
        first_name: "Leaf".into(),
        last_name: "Green".into(),
        address: "4 Forest Lane".into(),
        city: "Mysuru".into(),
        state: "KA".into(),
        zip_code: "570001".into(),
        card_number: "5555 4444 3333 1111".into(),
        expiry_date: "01/29".into(),
        cvv: "321".into(),
        name_on_card: "Leaf Green".into(),
    }
}

#[test]
fn repeated_adds_collapse_into_one_line() {
    let catalog = StaticCatalog::sample();
    let compost = product(&catalog, "7");

    let cart = (0..5).fold(CartState::new(), |cart, _| cart.add_item(&compost));
    assert_eq!(cart.item_count(), 5);
    assert_eq!(cart.unique_item_count(), 1);
    assert_eq!(cart.total(), Money::new(2899 * 5));
}

#[test]
fn non_positive_quantity_is_removal() {
    let catalog = StaticCatalog::sample();
    let cart = CartState::new()
        .add_item(&product(&catalog, "3"))
        .add_item(&product(&catalog, "4"));
    let id = ProductId::new("3");

    for quantity in [0, -1, -100] {
        assert_eq!(cart.update_quantity(&id, quantity), cart.remove_item(&id));
    }
}

#[test]
fn totals_follow_any_action_sequence() {
    let catalog = StaticCatalog::sample();
    let shirt = product(&catalog, "1");
    let bottle = product(&catalog, "2");
    let wraps = product(&catalog, "8");

    let cart = CartState::replay(&[
        CartAction::AddItem { product: wraps.clone() },
        CartAction::AddItem { product: shirt.clone() },
        CartAction::AddItem { product: bottle },
        CartAction::UpdateQuantity {
            product_id: wraps.id.clone(),
            quantity: 3,
        },
        CartAction::AddItem { product: shirt },
        CartAction::RemoveItem {
            product_id: wraps.id,
        },
    ]);

    assert_eq!(cart.total(), Money::new(6997));
    assert_eq!(cart.item_count(), 3);
    let expected: Money = cart.items().iter().map(|l| l.line_total()).sum();
    assert_eq!(cart.total(), expected);
}

#[test]
fn clear_empties_everything() {
    let catalog = StaticCatalog::sample();
    let cart = CartState::new()
        .add_items(&product(&catalog, "5"), 4)
        .reduce(&CartAction::Clear);

    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json, serde_json::json!({ "items": [], "total": 0, "itemCount": 0 }));
}

#[test]
fn search_for_bamboo() {
    let catalog = StaticCatalog::sample();
    let criteria = FilterCriteria::new().with_search("bamboo");
    assert_eq!(
        names(&filter_products(catalog.products(), &criteria)),
        vec!["Bamboo Water Bottle"]
    );
}

#[test]
fn home_under_two_thousand() {
    let catalog = StaticCatalog::sample();
    let criteria = FilterCriteria::new()
        .with_categories(CategorySelection::from_labels(["home"]))
        .with_price_range(PriceRange::new(Money::ZERO, Money::new(2000)));

    let hits = filter_products(catalog.products(), &criteria);
    assert_eq!(names(&hits), vec!["Reusable Food Wraps"]);
    assert_eq!(hits[0].price, Money::new(1599));
}

#[test]
fn default_criteria_return_the_whole_catalog_in_order() {
    let catalog = StaticCatalog::sample();
    let hits = filter_products(catalog.products(), &FilterCriteria::default());
    let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn out_of_stock_products_can_still_be_added() {
    let catalog = StaticCatalog::sample();
    let sold_out = product(&catalog, "6").with_stock(false);
    let cart = CartState::new().add_item(&sold_out);
    assert_eq!(cart.quantity_of(&sold_out.id), 1);
}

#[test]
fn checkout_rejects_empty_cart() {
    let mut flow = CheckoutFlow::new(CheckoutConfig::default());
    assert_eq!(
        flow.begin(&CartState::new(), &checkout_form()).unwrap_err(),
        CommerceError::EmptyCart
    );
}

#[test]
fn checkout_lists_missing_fields() {
    let catalog = StaticCatalog::sample();
    let cart = CartState::new().add_item(&product(&catalog, "1"));
    let form = CheckoutForm {
        email: "nobody".into(),
        card_number: String::new(),
        ..checkout_form()
    };

    let err = CheckoutFlow::default().begin(&cart, &form).unwrap_err();
    assert_eq!(
        err,
        CommerceError::CheckoutIncomplete("email, card number".into())
    );
}

#[tokio::test]
async fn checkout_places_order_and_clears_cart() {
    let catalog = StaticCatalog::sample();
    let cart = CartState::new()
        .add_items(&product(&catalog, "1"), 2)
        .add_item(&product(&catalog, "2"));

    let config = CheckoutConfig::default().with_processing_delay(Duration::ZERO);
    let mut flow = CheckoutFlow::new(config);
    let (order, cart) = flow.place_order(&cart, &checkout_form()).await.unwrap();

    assert!(cart.is_empty());
    assert!(order.order_number.as_str().starts_with("ECO-"));
    assert_eq!(order.summary.subtotal, Money::new(6997));
    assert_eq!(order.summary.tax, Money::new(1259));
    assert_eq!(order.summary.grand_total, Money::new(8256));
    assert_eq!(order.card.to_string(), "**** **** **** 1111");
    assert_eq!(order.email, "leaf@example.com");
}
