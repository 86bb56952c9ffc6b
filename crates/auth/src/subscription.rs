//! Receiving end of an [`AuthStore`](crate::AuthStore) subscription.

use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to state changes.
///
/// Each subscription receives a copy of every state published after it was
/// created, in publish order. Dropping it unsubscribes; the store prunes the
/// dead sender on its next mutation.
///
/// ## Usage Pattern
///
/// ```ignore
/// let store = AuthStore::new();
/// let changes = store.subscribe();
///
/// store.set_is_initialized(true);
/// let state = changes.try_recv()?; // already delivered
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Take every message delivered so far without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }

    /// Most recent pending message, discarding older ones.
    pub fn latest(&self) -> Option<M> {
        self.receiver.try_iter().last()
    }
}
