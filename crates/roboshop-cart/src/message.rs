//! Request messages between [`CartClient`](crate::CartClient) and
//! [`CartStore`](crate::CartStore).
//!
//! Every variant carries a `respond_to` oneshot so callers observe the
//! mutation having been applied (and persisted, best-effort) before their
//! future resolves. Mutations answer with the post-mutation snapshot, which
//! keeps badge/summary views from issuing a follow-up read.

use crate::error::CartError;
use crate::item::{CartItem, NewItem};
use tokio::sync::oneshot;

/// One-shot response channel used by the cart actor.
pub type Response<T> = oneshot::Sender<Result<T, CartError>>;

/// Operations the cart actor understands. This is the complete mutation
/// surface for cart state.
#[derive(Debug)]
pub enum CartRequest {
    /// Add one unit of an item, applying the `(id, custom_note)` merge rule.
    Add {
        item: NewItem,
        respond_to: Response<Vec<CartItem>>,
    },
    /// Remove every line with this id, regardless of note. No-op if absent.
    Remove {
        id: u32,
        respond_to: Response<Vec<CartItem>>,
    },
    /// Set the quantity of every line with this id. Zero or negative removes.
    SetQuantity {
        id: u32,
        quantity: i64,
        respond_to: Response<Vec<CartItem>>,
    },
    /// Rewrite the note on every line with this id. Does not re-merge.
    SetNote {
        id: u32,
        note: Option<String>,
        respond_to: Response<Vec<CartItem>>,
    },
    /// Empty the cart unconditionally.
    Clear { respond_to: Response<Vec<CartItem>> },
    /// Snapshot read of the current line list.
    Items { respond_to: Response<Vec<CartItem>> },
}
