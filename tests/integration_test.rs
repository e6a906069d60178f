use rust_decimal_macros::dec;
use storefront_admin::clients::ActorClient;
use storefront_admin::lifecycle::StoreSystem;
use storefront_admin::model::{
    CatalogEntryCreate, Currency, OrderStatus, OrderUpdate, PaymentMethod, ProductCreate,
    UserCreate,
};
use storefront_admin::order_form::{FormError, OrderForm};

/// Full end-to-end flow: seed the catalog, edit an order form against the
/// preloaded options, save it, reload it for editing, update its status.
#[tokio::test]
async fn full_order_editing_flow() {
    let system = StoreSystem::new();

    let user_id = system
        .user_client
        .create_user(UserCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("failed to create user");

    let category_id = system
        .category_client
        .create_category(CatalogEntryCreate::new("Accessories", "accessories"))
        .await
        .expect("failed to create category");
    let brand_id = system
        .brand_client
        .create_brand(CatalogEntryCreate::new("Acme", "acme"))
        .await
        .expect("failed to create brand");

    let mut widget = ProductCreate::basic("Widget", "widget", dec!(10.00));
    widget.category_id = Some(category_id);
    widget.brand_id = Some(brand_id);
    let widget_id = system
        .product_client
        .create_product(widget)
        .await
        .expect("failed to create product");
    let gadget_id = system
        .product_client
        .create_product(ProductCreate::basic("Gadget", "gadget", dec!(5.50)))
        .await
        .expect("failed to create product");

    // Preload once per session, then edit entirely in memory.
    let catalog = system
        .product_client
        .product_options()
        .await
        .expect("failed to preload options");
    assert_eq!(catalog.len(), 2);

    let mut form = OrderForm::new();
    form.set_customer(Some(user_id));
    form.set_payment_method(Some(PaymentMethod::CashOnDelivery));
    form.set_currency(Currency::Inr);

    let first = form.push_line();
    form.select_product(first, Some(widget_id), &catalog).unwrap();
    form.set_quantity(first, 3).unwrap();
    assert_eq!(form.grand_total(), dec!(30.00));

    let second = form.push_line();
    form.select_product(second, Some(gadget_id), &catalog).unwrap();
    form.set_quantity(second, 2).unwrap();
    assert_eq!(form.grand_total(), dec!(41.00));
    assert_eq!(form.display_total(), "41.00 INR");

    // The widget is already on line 0; re-selecting it on line 1 is a
    // uniqueness violation and leaves the form untouched.
    let err = form
        .select_product(second, Some(widget_id), &catalog)
        .unwrap_err();
    assert!(matches!(err, FormError::DuplicateProduct { .. }));
    assert_eq!(form.grand_total(), dec!(41.00));

    let order_id = system
        .order_client
        .save_order(form)
        .await
        .expect("failed to save order");

    let order = system
        .order_client
        .get(order_id)
        .await
        .expect("failed to get order")
        .expect("order not found");
    assert_eq!(order.user_id, user_id);
    assert_eq!(order.grand_total, dec!(41.00));
    assert_eq!(order.currency, Currency::Inr);
    assert_eq!(order.status, OrderStatus::New);

    // Reload for editing: derived amounts come back consistent, and
    // removing the gadget line restores the single-line total.
    let mut reloaded = OrderForm::from_order(&order);
    assert_eq!(reloaded.grand_total(), dec!(41.00));
    reloaded.remove_line(1).unwrap();
    assert_eq!(reloaded.grand_total(), dec!(30.00));

    let updated = system
        .order_client
        .update_order(
            order_id,
            OrderUpdate {
                status: Some(OrderStatus::Processing),
                payment_status: None,
                notes: Some("picked and packed".to_string()),
            },
        )
        .await
        .expect("failed to update order");
    assert_eq!(updated.status, OrderStatus::Processing);
    assert_eq!(updated.notes.as_deref(), Some("picked and packed"));

    system.shutdown().await.expect("shutdown failed");
}

/// A product deleted after the options were loaded prices at zero instead
/// of failing the edit.
#[tokio::test]
async fn deleted_product_is_a_recoverable_lookup_miss() {
    let system = StoreSystem::new();

    let widget_id = system
        .product_client
        .create_product(ProductCreate::basic("Widget", "widget", dec!(10.00)))
        .await
        .expect("failed to create product");

    let catalog = system
        .product_client
        .product_options()
        .await
        .expect("failed to preload options");

    system
        .product_client
        .delete(widget_id)
        .await
        .expect("failed to delete product");

    // A fresh snapshot no longer resolves the widget; selecting it still
    // succeeds, at a unit price of zero.
    let stale_free = system
        .product_client
        .product_options()
        .await
        .expect("failed to reload options");
    assert!(stale_free.is_empty());

    let mut form = OrderForm::new();
    let line = form.push_line();
    form.select_product(line, Some(widget_id), &stale_free)
        .unwrap();
    assert_eq!(form.lines()[line].unit_amount(), dec!(0));
    assert_eq!(form.grand_total(), dec!(0));

    // The original snapshot still resolves it; sessions are isolated.
    form.select_product(line, None, &catalog).unwrap();
    form.select_product(line, Some(widget_id), &catalog).unwrap();
    assert_eq!(form.lines()[line].unit_amount(), dec!(10.00));

    system.shutdown().await.expect("shutdown failed");
}

/// Inactive products are excluded from the options offered for selection.
#[tokio::test]
async fn inactive_products_are_not_offered() {
    let system = StoreSystem::new();

    let mut retired = ProductCreate::basic("Retired", "retired", dec!(1.00));
    retired.is_active = false;
    system
        .product_client
        .create_product(retired)
        .await
        .expect("failed to create product");

    let catalog = system
        .product_client
        .product_options()
        .await
        .expect("failed to preload options");
    assert!(catalog.is_empty());

    system.shutdown().await.expect("shutdown failed");
}
