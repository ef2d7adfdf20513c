//! Error types for order placement and checkout.

use roboshop_cart::CartError;
use thiserror::Error;

/// Errors from the order repositories and the two-tier service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The remote order service rejected or never received the request.
    #[error("Remote order service error: {0}")]
    Remote(String),

    /// The local fallback tier failed; only reachable when both tiers are
    /// down, since a remote success never touches the local tier.
    #[error("Local order storage error: {0}")]
    Local(String),

    /// No order with the given tracking id in either tier.
    #[error("Order not found: {0}")]
    NotFound(String),
}

/// Errors surfaced by the checkout flow. Validation failures happen before
/// any cart or order mutation.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required shipping form field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Checkout with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Lost the cart actor mid-checkout.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Both order tiers failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}
