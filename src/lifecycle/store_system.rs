//! The [`StoreSystem`] orchestrator.

use crate::clients::{BrandClient, CategoryClient, OrderClient, ProductClient, UserClient};
use crate::{catalog_actor, order_actor, product_actor, user_actor};
use tracing::{error, info};

/// The running actor system behind the admin panel.
///
/// `StoreSystem` starts one actor per resource, wires their dependencies
/// (the Order actor needs a `UserClient` to validate customers) and keeps
/// the task handles for graceful shutdown.
pub struct StoreSystem {
    /// Client for interacting with the User actor.
    pub user_client: UserClient,

    /// Client for interacting with the Product actor.
    pub product_client: ProductClient,

    /// Client for interacting with the Category actor.
    pub category_client: CategoryClient,

    /// Client for interacting with the Brand actor.
    pub brand_client: BrandClient,

    /// Client for interacting with the Order actor.
    pub order_client: OrderClient,

    /// Task handles for all running actors, order actor first so its
    /// `UserClient` context is dropped before the User actor is awaited.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Creates and starts the full system: every actor running in its own
    /// task, dependencies wired.
    pub fn new() -> Self {
        let (user_actor, user_client) = user_actor::new();
        let user_handle = tokio::spawn(user_actor.run(()));

        let (product_actor, product_client) = product_actor::new();
        let product_handle = tokio::spawn(product_actor.run(()));

        let (category_actor, category_client) = catalog_actor::new_category();
        let category_handle = tokio::spawn(category_actor.run(()));

        let (brand_actor, brand_client) = catalog_actor::new_brand();
        let brand_handle = tokio::spawn(brand_actor.run(()));

        // The Order actor validates customers in on_create, so it gets a
        // UserClient as its injected context.
        let (order_actor, order_client) = order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(user_client.clone()));

        info!("Store system started");

        Self {
            user_client,
            product_client,
            category_client,
            brand_client,
            order_client,
            handles: vec![
                order_handle,
                user_handle,
                product_handle,
                category_handle,
                brand_handle,
            ],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits. The order actor is awaited first: its injected
    /// `UserClient` keeps the User actor's channel open until then.
    /// Clients cloned out of the system must be dropped by their holders
    /// before this resolves.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.category_client);
        drop(self.brand_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
