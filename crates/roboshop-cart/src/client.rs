//! Typed handle for the cart actor.
//!
//! `CartClient` holds only a request sender and a snapshot receiver, so it
//! is cheap to clone and share across views. Every mutation resolves with
//! the post-mutation line list.

use crate::error::CartError;
use crate::item::{CartItem, NewItem};
use crate::message::CartRequest;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    snapshot: watch::Receiver<Vec<CartItem>>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, snapshot: watch::Receiver<Vec<CartItem>>) -> Self {
        Self { sender, snapshot }
    }

    /// Subscribe to cart snapshots. The receiver yields the full line list
    /// after every mutation; subscribers pull the current value and never
    /// block the actor.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.snapshot.clone()
    }

    /// Add one unit of `item`, applying the merge rule.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: NewItem) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Add { item, respond_to })
            .await
    }

    /// Remove every line with `id`, regardless of customization note.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: u32) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Remove { id, respond_to })
            .await
    }

    /// Set the quantity of every line with `id`. Values ≤ 0 remove the lines.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: u32, quantity: i64) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::SetQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    /// Rewrite the customization note on every line with `id`.
    #[instrument(skip(self))]
    pub async fn set_custom_note(
        &self,
        id: u32,
        note: Option<String>,
    ) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::SetNote {
            id,
            note,
            respond_to,
        })
        .await
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Clear { respond_to })
            .await
    }

    /// Snapshot of the current line list.
    #[instrument(skip(self))]
    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        self.request(|respond_to| CartRequest::Items { respond_to })
            .await
    }

    async fn request<F>(&self, make: F) -> Result<Vec<CartItem>, CartError>
    where
        F: FnOnce(oneshot::Sender<Result<Vec<CartItem>, CartError>>) -> CartRequest,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::ActorClosed)?;
        response.await.map_err(|_| CartError::ActorDropped)?
    }
}
