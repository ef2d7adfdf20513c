//! Order snapshot model.
//!
//! Orders are produced by the order service (remote or local fallback) and
//! are read-mostly here: the progress UI is a pure function of
//! (`status`, `timeline`) and performs no transitions of its own.

use chrono::{DateTime, Utc};
use roboshop_cart::CartItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

/// The fixed happy-path stage ordering used for progress rendering.
/// `Cancelled` is a terminal branch, not a position in this sequence.
pub const ORDER_STAGES: [OrderStatus; 4] = [
    OrderStatus::Confirmed,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Position in [`ORDER_STAGES`], or `None` for `Cancelled`.
    pub fn stage_index(self) -> Option<usize> {
        ORDER_STAGES.iter().position(|s| *s == self)
    }
}

/// One recorded lifecycle event. Appended upstream exactly once, when the
/// status is first reached; timestamps are non-decreasing along the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Snapshot of one ordered line, decoupled from the live cart item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.title.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// A placed order as echoed back by the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Opaque identifier used for lookups.
    pub tracking_id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    pub shipping_address: super::ShippingAddress,
    pub timeline: Vec<TimelineEntry>,
    /// `false` marks a local-fallback record that never reached the remote
    /// service; shown to the user as a soft warning.
    #[serde(default = "default_synced")]
    pub synced: bool,
}

fn default_synced() -> bool {
    true
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    pub shipping_address: super::ShippingAddress,
}
