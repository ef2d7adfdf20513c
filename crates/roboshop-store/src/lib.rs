//! # Roboshop Storefront
//!
//! Domain layer of the roboshop storefront: the order model, the pure
//! order-progress and countdown derivations, the two-tier order repository
//! (remote service with local fallback), checkout orchestration over the
//! cart actor, and the notification/catalog collaborator seams.
//!
//! Order lifecycle transitions happen upstream in the order service; this
//! crate only *renders* a given snapshot. The happy path is
//! `confirmed → processing → shipped → delivered`, with `cancelled` as a
//! terminal branch reachable from any non-terminal state.

pub mod catalog;
pub mod checkout;
pub mod countdown;
pub mod error;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod notify;
pub mod progress;
pub mod repo;

pub use checkout::{Checkout, ShippingForm};
pub use countdown::{countdown, Countdown};
pub use error::{CheckoutError, OrderError};
pub use lifecycle::{setup_tracing, ShopSystem};
pub use model::{NewOrder, Order, OrderLine, OrderStatus, ShippingAddress, TimelineEntry, ORDER_STAGES};
pub use progress::{progress_steps, ProgressStep, StepState};
pub use repo::{LocalOrders, OrderService, RemoteOrders};
