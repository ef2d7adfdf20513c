//! # Roboshop Cart Store
//!
//! The client-side shopping cart for the roboshop storefront, implemented as
//! a small actor: one task owns the line-item list, processes mutation
//! requests sequentially over a channel, and is the *sole* mutation surface
//! for cart state. Sequential processing within the actor means no locks and
//! no race conditions on the list.
//!
//! ## Architecture
//!
//! - [`CartStore`] — the actor. Owns the `Vec<CartItem>`, rehydrates it from
//!   a [`CartStorage`] slot at construction, and after every mutation
//!   persists best-effort and publishes a snapshot to subscribers.
//! - [`CartClient`] — cheap-to-clone handle used by views and checkout.
//!   All methods are async and return `Result<_, CartError>`.
//! - [`CartStorage`] — the durability seam. The production implementation is
//!   [`JsonFileStorage`]; tests use the in-memory doubles in [`mock`].
//!
//! ## Merge semantics
//!
//! A line is conceptually keyed by `(id, custom_note)`. Adding an item with
//! no note increments an existing no-note line for the same id; adding an
//! item with a note always appends a distinct line, even when an identical
//! `(id, note)` pair already exists — personalization requests are assumed
//! unique per submission.
//!
//! ## Durability
//!
//! The persisted slot is a single JSON array under a fixed key. A missing or
//! corrupt slot rehydrates as the empty cart; a failed write is logged and
//! dropped, leaving the in-memory list authoritative for the session.
//!
//! ```rust
//! use roboshop_cart::{CartStore, NewItem};
//! use roboshop_cart::mock::MemoryStorage;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = CartStore::new(32, Box::new(MemoryStorage::new()));
//!     tokio::spawn(store.run());
//!
//!     client.add_item(NewItem::new(1, "Line Follower Kit", 49.0)).await.unwrap();
//!     client.add_item(NewItem::new(1, "Line Follower Kit", 49.0)).await.unwrap();
//!
//!     let items = client.items().await.unwrap();
//!     assert_eq!(items.len(), 1);
//!     assert_eq!(items[0].quantity, 2);
//! }
//! ```

pub mod client;
pub mod error;
pub mod item;
pub mod message;
pub mod mock;
pub mod storage;
pub mod store;

pub use client::CartClient;
pub use error::CartError;
pub use item::{cart_total, CartItem, NewItem};
pub use message::{CartRequest, Response};
pub use storage::{CartStorage, JsonFileStorage, StorageError, CART_STORAGE_KEY};
pub use store::CartStore;
