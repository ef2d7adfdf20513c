//! The cart actor.
//!
//! `CartStore` is the server half of the cart: it owns the line list and the
//! receiver end of the request channel, and processes messages sequentially.
//! One mutator path, no locks. After every mutation it persists the full
//! list best-effort and publishes a snapshot to `watch` subscribers, so
//! badge and summary views re-render without polling.

use crate::client::CartClient;
use crate::item::{normalize_note, CartItem, NewItem};
use crate::message::CartRequest;
use crate::storage::CartStorage;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

pub struct CartStore {
    receiver: mpsc::Receiver<CartRequest>,
    items: Vec<CartItem>,
    storage: Box<dyn CartStorage>,
    publisher: watch::Sender<Vec<CartItem>>,
}

impl CartStore {
    /// Creates the actor and its client, rehydrating state from `storage`.
    ///
    /// A corrupt or missing slot rehydrates as the empty cart; that policy
    /// lives in the [`CartStorage`] implementation.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when full.
    /// * `storage` - the durable slot written after every mutation.
    pub fn new(buffer_size: usize, storage: Box<dyn CartStorage>) -> (Self, CartClient) {
        let items = storage.load();
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, snapshot) = watch::channel(items.clone());
        let actor = Self {
            receiver,
            items,
            storage,
            publisher,
        };
        (actor, CartClient::new(sender, snapshot))
    }

    /// Runs the event loop until every client handle is dropped.
    pub async fn run(mut self) {
        info!(lines = self.items.len(), "Cart actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Add { item, respond_to } => {
                    debug!(id = item.id, note = ?item.custom_note, "Add");
                    self.add(item);
                    self.commit();
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CartRequest::Remove { id, respond_to } => {
                    debug!(id, "Remove");
                    self.items.retain(|line| line.id != id);
                    self.commit();
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CartRequest::SetQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    debug!(id, quantity, "SetQuantity");
                    self.set_quantity(id, quantity);
                    self.commit();
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CartRequest::SetNote {
                    id,
                    note,
                    respond_to,
                } => {
                    debug!(id, ?note, "SetNote");
                    let note = normalize_note(note);
                    for line in self.items.iter_mut().filter(|line| line.id == id) {
                        line.custom_note = note.clone();
                    }
                    self.commit();
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CartRequest::Clear { respond_to } => {
                    debug!("Clear");
                    self.items.clear();
                    self.commit();
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CartRequest::Items { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
            }
        }

        info!(lines = self.items.len(), "Cart actor shutdown");
    }

    /// Merge rule: a noted item is always a fresh line; an unnoted item
    /// increments an existing unnoted line for the same id, if any.
    fn add(&mut self, item: NewItem) {
        let line = item.into_line();
        if line.custom_note.is_none() {
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|l| l.id == line.id && l.custom_note.is_none())
            {
                existing.quantity += 1;
                return;
            }
        }
        self.items.push(line);
    }

    /// Sets the quantity of every line with `id`; zero or below removes them.
    ///
    /// When distinct-note variants share the id they all receive the same
    /// quantity. That matches how callers address lines (by product id) but
    /// is a known sharp edge for personalized lines.
    fn set_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|line| line.id != id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        for line in self.items.iter_mut().filter(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Persist best-effort, then publish the new snapshot to subscribers.
    fn commit(&mut self) {
        if let Err(e) = self.storage.save(&self.items) {
            warn!(error = %e, "Cart persist failed, in-memory state stays authoritative");
        }
        // send_replace never fails, even with zero subscribers.
        self.publisher.send_replace(self.items.clone());
    }
}
