//! In-memory collaborator doubles.
//!
//! The remote order service, local order tier, and mailer are black boxes
//! in production; these doubles stand in for them in tests and in the demo
//! binary. [`MockRemoteOrders`] has an outage switch so the local-fallback
//! path can be exercised deterministically.

use crate::error::OrderError;
use crate::model::{NewOrder, Order, OrderStatus, TimelineEntry};
use crate::notify::{EmailSender, NotifyError};
use crate::repo::{LocalOrders, RemoteOrders};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the hosted order service.
#[derive(Default)]
pub struct MockRemoteOrders {
    orders: Mutex<HashMap<String, Order>>,
    next_id: AtomicU64,
    down: AtomicBool,
}

impl MockRemoteOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the outage switch; while down, every call fails.
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check_up(&self) -> Result<(), OrderError> {
        if self.down.load(Ordering::SeqCst) {
            Err(OrderError::Remote("service unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RemoteOrders for MockRemoteOrders {
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        self.check_up()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let placed = Order {
            tracking_id: format!("TRK-{id:06}"),
            status: OrderStatus::Confirmed,
            items: order.items,
            shipping_address: order.shipping_address,
            timeline: vec![TimelineEntry {
                status: OrderStatus::Confirmed,
                at: Utc::now(),
                message: "Order confirmed".to_string(),
            }],
            synced: true,
        };
        self.orders
            .lock()
            .expect("orders lock poisoned")
            .insert(placed.tracking_id.clone(), placed.clone());
        Ok(placed)
    }

    async fn find(&self, tracking_id: &str) -> Result<Option<Order>, OrderError> {
        self.check_up()?;
        Ok(self
            .orders
            .lock()
            .expect("orders lock poisoned")
            .get(tracking_id)
            .cloned())
    }
}

/// In-memory local order tier.
#[derive(Default)]
pub struct MemoryOrders {
    orders: Mutex<HashMap<String, Order>>,
}

impl MemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().expect("orders lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LocalOrders for MemoryOrders {
    async fn store(&self, order: Order) -> Result<(), OrderError> {
        self.orders
            .lock()
            .expect("orders lock poisoned")
            .insert(order.tracking_id.clone(), order);
        Ok(())
    }

    async fn find(&self, tracking_id: &str) -> Result<Option<Order>, OrderError> {
        Ok(self
            .orders
            .lock()
            .expect("orders lock poisoned")
            .get(tracking_id)
            .cloned())
    }
}

/// Mailer that records every send instead of delivering.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, HashMap<String, String>)>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Every (template, params) pair sent so far.
    pub fn sent(&self) -> Vec<(String, HashMap<String, String>)> {
        self.sent.lock().expect("sent lock poisoned").clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(
        &self,
        template: &str,
        params: HashMap<String, String>,
    ) -> Result<(), NotifyError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError("smtp relay refused".to_string()));
        }
        self.sent
            .lock()
            .expect("sent lock poisoned")
            .push((template.to_string(), params));
        Ok(())
    }
}
