//! Change notification - decoupling mutation from list consumers
//!
//! A single process-wide signal with no payload beyond "something changed".
//! The store emits it whenever the purchased collection changes; the
//! secondary list view (or any other consumer) subscribes and re-reads.
//! Delivery is synchronous with the triggering mutation and fire-and-forget:
//! no queuing, no debouncing, zero subscribers is fine.

use std::sync::{Arc, Mutex, PoisonError};

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Clonable handle to a shared subscriber list
///
/// Clones share the same subscribers, so the handle can be passed by value
/// to the store at construction while consumers keep their own copy to
/// subscribe on.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked on every change signal
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.lock().push(Arc::new(listener));
    }

    /// Invoke every subscriber, in registration order
    ///
    /// The subscriber list is snapshotted before delivery, so the lock is
    /// never held while a callback runs; a listener may re-enter the
    /// notifier (`notify` or `subscribe`) without deadlocking. Subscriptions
    /// made during delivery take effect from the next signal.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self.lock().clone();
        for listener in &listeners {
            listener();
        }
    }

    /// Number of registered subscribers
    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_with_no_subscribers_is_fine() {
        let notifier = ChangeNotifier::new();
        notifier.notify();
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_every_subscriber_hears_every_signal() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            notifier.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        notifier.notify();
        notifier.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_listener_may_notify_reentrantly() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let handle = notifier.clone();
        notifier.subscribe(move || {
            // Re-signal once from inside delivery
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                handle.notify();
            }
        });

        notifier.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_may_subscribe_reentrantly() {
        let notifier = ChangeNotifier::new();
        let handle = notifier.clone();

        notifier.subscribe(move || {
            handle.subscribe(|| {});
        });

        // Delivery runs over a snapshot; the new subscriber joins afterwards
        notifier.notify();
        assert_eq!(notifier.listener_count(), 2);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let handle = notifier.clone();

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        handle.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
