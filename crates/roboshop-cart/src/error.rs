//! Cart client/actor communication errors.
//!
//! Cart mutations themselves are infallible by design (bad quantities fall
//! back to removal, absent ids are no-ops), so the only failure mode the
//! client surfaces is losing the actor.

/// Errors returned by [`CartClient`](crate::CartClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The cart actor's channel is closed; the actor has shut down.
    #[error("Cart actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Cart actor dropped response channel")]
    ActorDropped,
}
