/// Quote cart walkthroughs against the built-in catalog.
///
/// Each step checks the exact line list and the derived total.
use optic_commerce::prelude::*;

fn catalog() -> CatalogStore {
    CatalogStore::seed(Currency::USD)
}

fn product(catalog: &CatalogStore, id: &str) -> Product {
    catalog.require(&ProductId::new(id)).unwrap().clone()
}

fn lines(state: &QuoteCartState) -> Vec<(String, i64)> {
    state
        .items()
        .iter()
        .map(|item| (item.product.id.to_string(), item.quantity))
        .collect()
}

fn assert_total_is_sum(state: &QuoteCartState) {
    let expected: i64 = state
        .items()
        .iter()
        .map(|item| item.product.price.amount_minor * item.quantity)
        .sum();
    assert_eq!(state.total().amount_minor, expected);
}

#[test]
fn test_walkthrough() {
    let catalog = catalog();
    let f001 = product(&catalog, "F001");
    let s001 = product(&catalog, "S001");
    let mut cart = QuoteCart::new(Currency::USD);

    let state = cart.add_item(f001.clone(), None);
    assert_eq!(lines(state), vec![("F001".to_string(), 12)]);
    assert_eq!(state.total().amount_minor, 54000);

    let state = cart.add_item(f001, None);
    assert_eq!(lines(state), vec![("F001".to_string(), 24)]);
    assert_eq!(state.total().amount_minor, 108000);

    let state = cart.update_quantity(&ProductId::new("F001"), 5);
    assert_eq!(lines(state), vec![("F001".to_string(), 12)]);
    assert_eq!(state.total().amount_minor, 54000);

    let state = cart.add_item(s001, None);
    assert_eq!(
        lines(state),
        vec![("F001".to_string(), 12), ("S001".to_string(), 12)]
    );
    assert_eq!(state.total().amount_minor, 120000);

    let state = cart.remove_item(&ProductId::new("F001"));
    assert_eq!(lines(state), vec![("S001".to_string(), 12)]);
    assert_eq!(state.total().amount_minor, 66000);

    let state = cart.clear();
    assert!(state.items().is_empty());
    assert!(state.total().is_zero());
    assert_eq!(state.phase(), CartPhase::Empty);
}

#[test]
fn test_walkthrough_through_reduce() {
    let catalog = catalog();
    let actions = vec![
        QuoteAction::AddItem { product: product(&catalog, "F001"), quantity: None },
        QuoteAction::AddItem { product: product(&catalog, "F001"), quantity: None },
        QuoteAction::UpdateQuantity { product_id: ProductId::new("F001"), quantity: 5 },
        QuoteAction::AddItem { product: product(&catalog, "S001"), quantity: None },
        QuoteAction::RemoveItem { product_id: ProductId::new("F001") },
        QuoteAction::Clear,
    ];
    let expected_totals = [54000, 108000, 54000, 120000, 66000, 0];

    let mut state = QuoteCartState::empty(Currency::USD);
    for (action, expected) in actions.into_iter().zip(expected_totals) {
        state = reduce(state, action);
        assert_eq!(state.total().amount_minor, expected);
        assert_total_is_sum(&state);
    }
}

#[test]
fn test_one_line_per_product_across_mixed_actions() {
    let catalog = catalog();
    let mut cart = QuoteCart::new(Currency::USD);

    for id in ["L001", "A001", "L001", "F004", "A001", "L001"] {
        cart.add_item(product(&catalog, id), None);
        assert_total_is_sum(cart.state());
    }
    cart.update_quantity(&ProductId::new("A001"), 150);
    cart.step_up(&ProductId::new("F004"));
    cart.step_down(&ProductId::new("L001"));
    cart.remove_item(&ProductId::new("X999"));

    assert_eq!(
        lines(cart.state()),
        vec![
            ("L001".to_string(), 100),
            ("A001".to_string(), 150),
            ("F004".to_string(), 72),
        ]
    );
    assert_total_is_sum(cart.state());
    for item in cart.state().items() {
        assert!(item.quantity >= item.product.moq);
    }
}

#[test]
fn test_insertion_order_survives_updates() {
    let catalog = catalog();
    let mut cart = QuoteCart::new(Currency::USD);
    for id in ["S004", "F002", "L003"] {
        cart.add_item(product(&catalog, id), None);
    }

    cart.update_quantity(&ProductId::new("S004"), 240);
    cart.add_item(product(&catalog, "F002"), Some(24));
    cart.remove_item(&ProductId::new("F002"));
    cart.add_item(product(&catalog, "F002"), None);

    let ids: Vec<String> = lines(cart.state()).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["S004", "L003", "F002"]);
}

#[test]
fn test_storefront_quote_submission() {
    let mut store = Storefront::open(catalog()).with_quote_prefix("HO-QUOTE");
    store.add_to_quote(&ProductId::new("F001"), None).unwrap();
    store.add_to_quote(&ProductId::new("L002"), Some(40)).unwrap();

    let customer = CustomerInfo {
        name: "Ayesha Khan".to_string(),
        business_name: "Clear Sight Opticians".to_string(),
        city: "Karachi".to_string(),
        phone: "+92 21 5550100".to_string(),
        email: "orders@clearsight.pk".to_string(),
        notes: None,
    };
    let mut sink = MemorySink::new();
    let request = store.submit_quote(customer, &mut sink).unwrap();

    assert_eq!(request.items.len(), 2);
    assert_eq!(request.item_count(), 52);
    assert_eq!(request.total.amount_minor, 54000 + 40 * 8500);
    assert_eq!(sink.quotes, vec![request]);
    assert!(store.quote().is_empty());
}
