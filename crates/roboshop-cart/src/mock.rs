//! In-memory storage doubles for testing cart behavior without touching the
//! filesystem.
//!
//! [`MemoryStorage`] keeps the raw serialized slot in a shared cell so tests
//! can inspect exactly what was persisted, or pre-seed garbage to exercise
//! the corruption-loads-as-empty path. [`FailingStorage`] rejects every
//! write to exercise the best-effort persistence path.

use crate::item::CartItem;
use crate::storage::{CartStorage, StorageError};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Shared in-memory slot holding the raw JSON the store last persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose slot already contains `raw` — typically garbage, to
    /// test rehydration from a corrupt slot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw serialized contents last saved, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().expect("slot lock poisoned").clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Vec<CartItem> {
        let slot = self.slot.lock().expect("slot lock poisoned");
        let Some(raw) = slot.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Cart slot corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        *self.slot.lock().expect("slot lock poisoned") = Some(raw);
        Ok(())
    }
}

/// Storage whose every save fails. Loads as empty.
#[derive(Clone, Default)]
pub struct FailingStorage;

impl FailingStorage {
    pub fn new() -> Self {
        Self
    }
}

impl CartStorage for FailingStorage {
    fn load(&self) -> Vec<CartItem> {
        Vec::new()
    }

    fn save(&self, _items: &[CartItem]) -> Result<(), StorageError> {
        Err(StorageError::Io(io::Error::new(
            io::ErrorKind::Other,
            "storage unavailable",
        )))
    }
}
