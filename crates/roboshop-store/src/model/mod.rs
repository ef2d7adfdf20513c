//! Pure data structures for orders: status, timeline, line snapshots, and
//! the shipping address attached at checkout.

pub mod address;
pub mod order;

pub use address::*;
pub use order::*;
