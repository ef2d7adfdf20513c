//! Transactional email seam.
//!
//! The sender is a black box taking a template identifier and a flat
//! key-value parameter bag; nothing beyond success/failure is consumed.
//! Checkout treats send failures as best-effort and never fails the order
//! over them.

use crate::model::Order;
use async_trait::async_trait;
use std::collections::HashMap;

/// Template used for order confirmations.
pub const ORDER_CONFIRMATION_TEMPLATE: &str = "order_confirmation";

#[derive(Debug, thiserror::Error)]
#[error("Email send failed: {0}")]
pub struct NotifyError(pub String);

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        template: &str,
        params: HashMap<String, String>,
    ) -> Result<(), NotifyError>;
}

/// Flatten an order into the confirmation template's parameter bag.
pub fn confirmation_params(order: &Order) -> HashMap<String, String> {
    let items = order
        .items
        .iter()
        .map(|line| format!("{} x{}", line.name, line.quantity))
        .collect::<Vec<_>>()
        .join(", ");
    HashMap::from([
        ("to_email".to_string(), order.shipping_address.email.clone()),
        ("to_name".to_string(), order.shipping_address.name.clone()),
        ("tracking_id".to_string(), order.tracking_id.clone()),
        ("items".to_string(), items),
        ("total".to_string(), format!("{:.2}", order.total())),
    ])
}
