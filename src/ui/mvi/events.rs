//! One-shot side-effect channel.

use tokio::sync::broadcast;

/// Pending events kept per subscriber before the oldest are dropped.
pub const EVENT_CAPACITY: usize = 16;

/// Bounded, non-replaying event queue.
///
/// An emission reaches every receiver subscribed at that moment, once. Late
/// subscribers never see earlier events, and an emission with no subscriber
/// is discarded.
pub struct EventChannel<E> {
    sender: broadcast::Sender<E>,
}

impl<E> Clone for EventChannel<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E: Clone + Send + std::fmt::Debug + 'static> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + std::fmt::Debug + 'static> EventChannel<E> {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    pub fn emit(&self, event: E) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            tracing::trace!(?event, "Dropped one-shot event: no subscriber");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }
}
