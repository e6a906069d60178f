//! Demo binary: starts the store system, seeds a small catalog, walks an
//! order form through an editing session and saves it.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use rust_decimal::Decimal;
use storefront_admin::clients::ActorClient;
use storefront_admin::lifecycle::{setup_tracing, StoreSystem};
use storefront_admin::model::{
    CatalogEntryCreate, Currency, PaymentMethod, ProductCreate, UserCreate,
};
use storefront_admin::order_form::OrderForm;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront admin demo");
    let system = StoreSystem::new();

    // Seed a customer and a small catalog.
    let user_id = system
        .user_client
        .create_user(UserCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%user_id, "Customer created");

    let category_id = system
        .category_client
        .create_category(CatalogEntryCreate::new("Accessories", "accessories"))
        .await
        .map_err(|e| e.to_string())?;
    let brand_id = system
        .brand_client
        .create_brand(CatalogEntryCreate::new("Acme", "acme"))
        .await
        .map_err(|e| e.to_string())?;

    let mut widget = ProductCreate::basic("Widget", "widget", Decimal::new(1000, 2));
    widget.category_id = Some(category_id);
    widget.brand_id = Some(brand_id);
    let widget_id = system
        .product_client
        .create_product(widget)
        .await
        .map_err(|e| e.to_string())?;

    let gadget = ProductCreate::basic("Gadget", "gadget", Decimal::new(550, 2));
    let gadget_id = system
        .product_client
        .create_product(gadget)
        .await
        .map_err(|e| e.to_string())?;

    // One order editing session, driven the way the admin form drives it.
    let span = tracing::info_span!("order_editing");
    let order_id = async {
        let catalog = system
            .product_client
            .product_options()
            .await
            .map_err(|e| e.to_string())?;
        info!(options = catalog.len(), "Product options preloaded");

        let mut form = OrderForm::new();
        form.set_customer(Some(user_id));
        form.set_payment_method(Some(PaymentMethod::Stripe));
        form.set_currency(Currency::Eur);

        let first = form.push_line();
        form.select_product(first, Some(widget_id), &catalog)
            .map_err(|e| e.to_string())?;
        form.set_quantity(first, 3).map_err(|e| e.to_string())?;

        let second = form.push_line();
        form.select_product(second, Some(gadget_id), &catalog)
            .map_err(|e| e.to_string())?;
        form.set_quantity(second, 2).map_err(|e| e.to_string())?;

        info!(total = %form.display_total(), "Form totals up to date");

        system
            .order_client
            .save_order(form)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let order = system
        .order_client
        .get(order_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "saved order vanished".to_string())?;
    info!(
        %order_id,
        items = order.items.len(),
        grand_total = %order.grand_total,
        "Order saved"
    );

    system.shutdown().await?;
    Ok(())
}
