//! System wiring and lifecycle.
//!
//! `ShopSystem` is the conductor: it constructs the cart actor with its
//! injected storage, wires the two-tier order service and the mailer into
//! the checkout flow, keeps the actor join handles, and coordinates a
//! graceful shutdown (drop clients, then await actors).

use crate::checkout::Checkout;
use crate::notify::EmailSender;
use crate::repo::{LocalOrders, OrderService, RemoteOrders};
use roboshop_cart::{CartClient, CartStorage, CartStore};
use std::sync::Arc;
use tracing::{error, info};

/// Buffer for the cart request channel; senders wait when it fills.
const CART_CHANNEL_BUFFER: usize = 32;

pub struct ShopSystem {
    /// Handle for views mutating and observing the cart.
    pub cart: CartClient,
    /// Remote-first order placement and tracking.
    pub orders: OrderService,
    /// The checkout flow over cart + orders + mailer.
    pub checkout: Checkout,
    /// Join handles for running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Build and start the system with injected collaborators.
    ///
    /// The cart actor is spawned here; everything else is wiring. Clients
    /// are clone-cheap handles, so callers can hand them to as many views
    /// as they like.
    pub fn new(
        storage: Box<dyn CartStorage>,
        remote: Arc<dyn RemoteOrders>,
        local: Arc<dyn LocalOrders>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        let (cart_actor, cart) = CartStore::new(CART_CHANNEL_BUFFER, storage);
        let cart_handle = tokio::spawn(cart_actor.run());

        let orders = OrderService::new(remote, local);
        let checkout = Checkout::new(cart.clone(), orders.clone(), mailer);

        Self {
            cart,
            orders,
            checkout,
            handles: vec![cart_handle],
        }
    }

    /// Gracefully shut down: drop every client handle so actor channels
    /// close, then await the actor tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system");
        drop(self.cart);
        drop(self.checkout);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }
        info!("Shop system shutdown complete");
        Ok(())
    }
}

/// Initialize `tracing` for the whole process, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
