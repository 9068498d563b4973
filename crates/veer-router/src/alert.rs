#![forbid(unsafe_code)]

//! Single-slot pending alert holder.
//!
//! Independent of navigation: at most one alert is pending, presenting
//! overwrites any prior one, and dismissing or consuming clears the slot.
//! Alert content (titles, messages, buttons) is entirely the rendering
//! collaborator's business.

use tracing::debug;
use veer_core::{ChangeNotifier, Identified, Subscription};

/// Holds at most one pending alert value.
#[derive(Debug)]
pub struct AlertRouter<A: Identified> {
    alert: Option<A>,
    notifier: ChangeNotifier,
}

impl<A: Identified> Default for AlertRouter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Identified> AlertRouter<A> {
    /// Create an empty alert router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alert: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Present an alert, overwriting any pending one.
    pub fn present(&mut self, alert: A) {
        debug!(id = ?alert.identity(), "present alert");
        self.alert = Some(alert);
        self.notifier.notify();
    }

    /// Clear the pending alert, if any.
    pub fn dismiss(&mut self) {
        if self.alert.take().is_some() {
            self.notifier.notify();
        }
    }

    /// Consume the pending alert, clearing the slot.
    pub fn take(&mut self) -> Option<A> {
        let alert = self.alert.take();
        if alert.is_some() {
            self.notifier.notify();
        }
        alert
    }

    /// The pending alert, if any.
    #[must_use]
    pub fn current(&self) -> Option<&A> {
        self.alert.as_ref()
    }

    /// Whether an alert is pending.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.alert.is_some()
    }

    /// Register a callback fired after every change.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.notifier.version()
    }
}
