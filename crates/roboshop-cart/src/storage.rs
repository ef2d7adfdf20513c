//! Durable storage for the cart slot.
//!
//! The cart persists as a single JSON array of [`CartItem`] records under a
//! fixed key. Loading is infallible from the caller's point of view: a
//! missing or unparseable slot is the empty cart. Saving can fail; the actor
//! downgrades that to a warning because the in-memory list stays
//! authoritative for the session.

use crate::item::CartItem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fixed key naming the persisted cart slot.
pub const CART_STORAGE_KEY: &str = "roboshop_cart";

/// Errors writing the cart slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write cart slot: {0}")]
    Io(#[from] io::Error),
}

/// The durability seam for the cart actor.
///
/// Implementations must treat absent or corrupt data as "empty cart" on
/// load; only writes may report errors.
pub trait CartStorage: Send {
    /// Read the persisted line list. Never fails: corruption loads as empty.
    fn load(&self) -> Vec<CartItem>;

    /// Persist the full line list, replacing the previous slot contents.
    fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON document at `<dir>/<CART_STORAGE_KEY>.json`.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at `dir`. The directory is created on first save, not
    /// here, so constructing storage for a read-only location still loads.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Vec<CartItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cart slot unreadable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cart slot corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
