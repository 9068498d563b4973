#![forbid(unsafe_code)]

//! Change notification between router state and the rendering layer.
//!
//! Router state is plain data; observation is a separate, minimal
//! contract: a [`ChangeNotifier`] fires registered callbacks after each
//! completed mutation, and a monotonic [`version`](ChangeNotifier::version)
//! counter lets pull-based renderers detect changes without callbacks.
//!
//! `Rc`/`RefCell` based and strictly single-threaded, matching the
//! router's cooperative concurrency model.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. `version` increments exactly once per `notify` call.
//! 3. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 4. Callbacks run after internal borrows are released; subscribing or
//!    reading the version from inside a callback is allowed.
//!
//! # Failure Modes
//!
//! - Callback panic: propagates to the caller of the mutating operation.
//! - Re-entrant `notify` from inside a callback: runs to completion
//!   (callbacks observe the latest version), no deadlock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type SubscriberFn = dyn Fn();

#[derive(Default)]
struct Inner {
    version: u64,
    subscribers: Vec<Weak<SubscriberFn>>,
}

/// Notifies subscribers after state mutations.
///
/// Cloning yields a handle to the same notifier (shared subscriber list
/// and version counter).
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<RefCell<Inner>>,
}

/// RAII guard for a subscription; dropping it unsubscribes.
pub struct Subscription {
    _callback: Rc<SubscriberFn>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers and version 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, fired after every subsequent mutation.
    ///
    /// The callback stays registered for the lifetime of the returned
    /// [`Subscription`].
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let callback: Rc<SubscriberFn> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: callback,
        }
    }

    /// Bump the version and fire all live subscribers in registration
    /// order. Dead subscriptions are pruned.
    pub fn notify(&self) {
        let callbacks: Vec<Rc<SubscriberFn>> = {
            let mut inner = self.inner.borrow_mut();
            inner.version += 1;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        // Borrow released before user code runs.
        for callback in callbacks {
            callback();
        }
    }

    /// Monotonic mutation counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("version", &self.version())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}
