//! Two-tier order repository.
//!
//! Orders are created against a remote hosted service; when that call
//! fails, the storefront degrades to a local-only record flagged as
//! unsynced rather than aborting the user's flow. Lookups consult the
//! remote tier first and fall back to local records.

use crate::error::OrderError;
use crate::model::{NewOrder, Order, OrderStatus, TimelineEntry};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The hosted order-creation/lookup service (black box).
#[async_trait]
pub trait RemoteOrders: Send + Sync {
    /// Submit an order; the service assigns a tracking id and echoes back
    /// the full record.
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Look up an order by tracking id. `Ok(None)` means "not found".
    async fn find(&self, tracking_id: &str) -> Result<Option<Order>, OrderError>;
}

/// Local persistence for orders that never reached the remote tier.
#[async_trait]
pub trait LocalOrders: Send + Sync {
    async fn store(&self, order: Order) -> Result<(), OrderError>;
    async fn find(&self, tracking_id: &str) -> Result<Option<Order>, OrderError>;
}

/// Remote-first order placement with local fallback.
///
/// TODO: records written to the local tier after a remote outage are never
/// reconciled with the remote store once it recovers; a later remote write
/// and an earlier local fallback can diverge. Resolve once the remote
/// service exposes an idempotent upsert keyed by a client-supplied id.
#[derive(Clone)]
pub struct OrderService {
    remote: Arc<dyn RemoteOrders>,
    local: Arc<dyn LocalOrders>,
}

impl OrderService {
    pub fn new(remote: Arc<dyn RemoteOrders>, local: Arc<dyn LocalOrders>) -> Self {
        Self { remote, local }
    }

    /// Place an order.
    ///
    /// On remote failure this synthesizes an unsynced local record with a
    /// locally generated tracking id and returns it — a soft degradation,
    /// never a hard failure, as long as the local tier accepts the write.
    #[instrument(skip(self, order))]
    pub async fn place(&self, order: NewOrder) -> Result<Order, OrderError> {
        match self.remote.create(order.clone()).await {
            Ok(placed) => {
                info!(tracking_id = %placed.tracking_id, "Order placed remotely");
                Ok(placed)
            }
            Err(e) => {
                warn!(error = %e, "Remote order creation failed, falling back to local record");
                let fallback = local_fallback(order);
                self.local.store(fallback.clone()).await?;
                info!(tracking_id = %fallback.tracking_id, "Order recorded locally (unsynced)");
                Ok(fallback)
            }
        }
    }

    /// Look up an order by tracking id, remote tier first.
    #[instrument(skip(self))]
    pub async fn track(&self, tracking_id: &str) -> Result<Order, OrderError> {
        match self.remote.find(tracking_id).await {
            Ok(Some(order)) => return Ok(order),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Remote order lookup failed, trying local records");
            }
        }
        self.local
            .find(tracking_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(tracking_id.to_string()))
    }
}

/// Synthesize the local-only record for a failed remote placement.
fn local_fallback(order: NewOrder) -> Order {
    let now = Utc::now();
    Order {
        // Locally generated ids are opaque to callers but recognizable in logs.
        tracking_id: format!("RB-{}", now.timestamp_millis()),
        status: OrderStatus::Confirmed,
        items: order.items,
        shipping_address: order.shipping_address,
        timeline: vec![TimelineEntry {
            status: OrderStatus::Confirmed,
            at: now,
            message: "Order recorded on this device".to_string(),
        }],
        synced: false,
    }
}
