use std::sync::Arc;

use inoxviet_core::{AppError, AppResult};
use tokio::sync::watch;

/// Push channel carrying the latest snapshot of a collection.
///
/// Every publish replaces the snapshot as a whole; subscribers only ever see
/// complete lists, and the last publish wins.
pub struct LiveFeed<T> {
    sender: Arc<watch::Sender<Arc<Vec<T>>>>,
}

impl<T> Clone for LiveFeed<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> Default for LiveFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LiveFeed<T> {
    /// Creates a feed holding an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the snapshot and wakes every subscriber.
    pub fn publish(&self, items: Vec<T>) {
        self.sender.send_replace(Arc::new(items));
    }

    /// Registers a subscriber starting from the current snapshot.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Handle owned by one consumer of a [`LiveFeed`].
///
/// Dropping the handle, or calling [`Subscription::unsubscribe`], detaches it.
pub struct Subscription<T> {
    receiver: watch::Receiver<Arc<Vec<T>>>,
}

impl<T> Subscription<T> {
    /// Returns the snapshot currently held by this subscription.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.receiver.borrow())
    }

    /// Waits for the next publish and returns the new snapshot.
    pub async fn changed(&mut self) -> AppResult<Arc<Vec<T>>> {
        self.receiver
            .changed()
            .await
            .map_err(|_| AppError::Internal("live feed closed".to_owned()))?;

        Ok(Arc::clone(&self.receiver.borrow_and_update()))
    }

    /// Detaches from the feed.
    pub fn unsubscribe(self) {}
}
