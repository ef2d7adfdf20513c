//! Checkout orchestration.
//!
//! Bridges the cart actor and the order service: validate the shipping
//! form, snapshot the cart into order lines, place the order (remote or
//! local fallback), fire the confirmation email best-effort, and only then
//! clear the cart. Validation failures reject before any cart or order
//! mutation occurs.

use crate::error::CheckoutError;
use crate::model::{NewOrder, Order, OrderLine, ShippingAddress};
use crate::notify::{confirmation_params, EmailSender, ORDER_CONFIRMATION_TEMPLATE};
use crate::repo::OrderService;
use roboshop_cart::CartClient;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Raw shipping form input as submitted by the checkout page.
#[derive(Debug, Clone, Default)]
pub struct ShippingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl ShippingForm {
    /// Reject the form if any required field is blank.
    pub fn validate(&self) -> Result<ShippingAddress, CheckoutError> {
        let require = |value: &str, field: &'static str| {
            if value.trim().is_empty() {
                Err(CheckoutError::MissingField(field))
            } else {
                Ok(value.trim().to_string())
            }
        };
        Ok(ShippingAddress {
            name: require(&self.name, "name")?,
            email: require(&self.email, "email")?,
            phone: require(&self.phone, "phone")?,
            street: require(&self.street, "street")?,
            city: require(&self.city, "city")?,
            postal_code: require(&self.postal_code, "postal_code")?,
        })
    }
}

/// The checkout flow over a cart, the order tiers, and the mailer.
#[derive(Clone)]
pub struct Checkout {
    cart: CartClient,
    orders: OrderService,
    mailer: Arc<dyn EmailSender>,
}

impl Checkout {
    pub fn new(cart: CartClient, orders: OrderService, mailer: Arc<dyn EmailSender>) -> Self {
        Self {
            cart,
            orders,
            mailer,
        }
    }

    /// Place an order for the current cart contents.
    ///
    /// The cart is cleared only after an order record exists (remote or
    /// local fallback); a validation failure leaves it untouched. The
    /// confirmation email is best-effort and cannot fail the order.
    #[instrument(skip(self, form))]
    pub async fn place_order(&self, form: &ShippingForm) -> Result<Order, CheckoutError> {
        let shipping_address = form.validate()?;

        let lines = self.cart.items().await?;
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = self
            .orders
            .place(NewOrder {
                items: lines.iter().map(OrderLine::from).collect(),
                shipping_address,
            })
            .await?;
        info!(tracking_id = %order.tracking_id, synced = order.synced, "Order placed");

        if let Err(e) = self
            .mailer
            .send(ORDER_CONFIRMATION_TEMPLATE, confirmation_params(&order))
            .await
        {
            warn!(error = %e, tracking_id = %order.tracking_id, "Confirmation email failed");
        }

        self.cart.clear().await?;
        Ok(order)
    }
}
