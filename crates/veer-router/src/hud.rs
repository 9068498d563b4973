#![forbid(unsafe_code)]

//! Transient HUD (toast) state: text, style, auto-hide, and an optional
//! loader sub-state.
//!
//! The HUD is independent of navigation. Renderers show the current text
//! and style while [`visible`](HudRouter::is_visible), hide it themselves
//! when [`auto_hide`](HudRouter::auto_hide) is set, and can react to a
//! loader reaching a terminal status (for example with a completion
//! animation) before calling [`dismiss`](HudRouter::dismiss).

use tracing::{debug, trace};
use veer_core::{ChangeNotifier, Subscription};

/// Visual style tag for a HUD message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HudStyle {
    #[default]
    Default,
    Success,
    Destructive,
    Delete,
    Archive,
    Unarchive,
    Favorite,
    Unfavorite,
}

/// Terminal result of a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderOutcome {
    Success,
    Failure,
}

/// Loader sub-state attached to a HUD message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderState {
    /// Work in progress, with an optional completion fraction in
    /// `0.0..=1.0`.
    InProgress { progress: Option<f32> },
    /// Work ended with the given outcome.
    Finished(LoaderOutcome),
}

/// Single-slot transient status display.
#[derive(Debug, Default)]
pub struct HudRouter {
    text: String,
    style: HudStyle,
    visible: bool,
    auto_hide: bool,
    loader: Option<LoaderState>,
    notifier: ChangeNotifier,
}

impl HudRouter {
    /// Create a hidden HUD.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, overwriting any current one. Auto-hides.
    pub fn present(&mut self, text: impl Into<String>, style: HudStyle) {
        self.text = text.into();
        self.style = style;
        self.visible = true;
        self.auto_hide = true;
        self.loader = None;
        debug!(style = ?self.style, "present hud");
        self.notifier.notify();
    }

    /// Show a message with an in-progress loader. Stays visible until
    /// [`hide_loader`](Self::hide_loader) or [`dismiss`](Self::dismiss).
    pub fn present_loader(&mut self, text: impl Into<String>, style: HudStyle) {
        self.text = text.into();
        self.style = style;
        self.visible = true;
        self.auto_hide = false;
        self.loader = Some(LoaderState::InProgress { progress: None });
        debug!(style = ?self.style, "present hud loader");
        self.notifier.notify();
    }

    /// Update the in-progress loader's completion fraction (clamped to
    /// `0.0..=1.0`). No-op when no loader is in progress.
    pub fn set_progress(&mut self, fraction: f32) {
        match self.loader {
            Some(LoaderState::InProgress { .. }) => {
                self.loader = Some(LoaderState::InProgress {
                    progress: Some(fraction.clamp(0.0, 1.0)),
                });
                self.notifier.notify();
            }
            _ => trace!("set_progress: no loader in progress, no-op"),
        }
    }

    /// End the loader with a terminal outcome. Marks the HUD auto-hiding
    /// so the renderer dismisses it after reacting to the outcome.
    pub fn hide_loader(&mut self, style: HudStyle, outcome: LoaderOutcome) {
        self.style = style;
        self.auto_hide = true;
        self.loader = Some(LoaderState::Finished(outcome));
        debug!(style = ?self.style, ?outcome, "hide hud loader");
        self.notifier.notify();
    }

    /// Clear everything back to the hidden default state.
    pub fn dismiss(&mut self) {
        if !self.visible && self.text.is_empty() && self.loader.is_none() {
            return;
        }
        self.text.clear();
        self.style = HudStyle::Default;
        self.visible = false;
        self.auto_hide = true;
        self.loader = None;
        self.notifier.notify();
    }

    /// Current message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current style tag.
    #[must_use]
    pub fn style(&self) -> HudStyle {
        self.style
    }

    /// Whether the HUD should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the renderer should hide the HUD after its display
    /// interval.
    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// The loader sub-state, if any.
    #[must_use]
    pub fn loader(&self) -> Option<LoaderState> {
        self.loader
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hud_is_hidden_defaults() {
        let hud = HudRouter::new();
        assert!(!hud.is_visible());
        assert_eq!(hud.text(), "");
        assert_eq!(hud.style(), HudStyle::Default);
        assert_eq!(hud.loader(), None);
    }

    #[test]
    fn present_overwrites_prior_message() {
        let mut hud = HudRouter::new();
        hud.present("Saved", HudStyle::Success);
        hud.present("Deleted", HudStyle::Delete);
        assert_eq!(hud.text(), "Deleted");
        assert_eq!(hud.style(), HudStyle::Delete);
        assert!(hud.is_visible());
        assert!(hud.auto_hide());
    }

    #[test]
    fn present_clears_stale_loader() {
        let mut hud = HudRouter::new();
        hud.present_loader("Uploading", HudStyle::Default);
        hud.present("Done", HudStyle::Success);
        assert_eq!(hud.loader(), None);
    }

    #[test]
    fn loader_lifecycle() {
        let mut hud = HudRouter::new();
        hud.present_loader("Uploading", HudStyle::Default);
        assert!(hud.is_visible());
        assert!(!hud.auto_hide());
        assert_eq!(
            hud.loader(),
            Some(LoaderState::InProgress { progress: None })
        );

        hud.set_progress(0.5);
        assert_eq!(
            hud.loader(),
            Some(LoaderState::InProgress {
                progress: Some(0.5)
            })
        );

        hud.hide_loader(HudStyle::Success, LoaderOutcome::Success);
        assert!(hud.auto_hide());
        assert_eq!(
            hud.loader(),
            Some(LoaderState::Finished(LoaderOutcome::Success))
        );
        assert_eq!(hud.style(), HudStyle::Success);
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        let mut hud = HudRouter::new();
        hud.present_loader("Working", HudStyle::Default);
        hud.set_progress(7.0);
        assert_eq!(
            hud.loader(),
            Some(LoaderState::InProgress {
                progress: Some(1.0)
            })
        );
        hud.set_progress(-1.0);
        assert_eq!(
            hud.loader(),
            Some(LoaderState::InProgress {
                progress: Some(0.0)
            })
        );
    }

    #[test]
    fn set_progress_without_loader_is_noop() {
        let mut hud = HudRouter::new();
        hud.present("Saved", HudStyle::Success);
        let version = hud.version();
        hud.set_progress(0.3);
        assert_eq!(hud.version(), version);
        assert_eq!(hud.loader(), None);
    }

    #[test]
    fn set_progress_after_finish_is_noop() {
        let mut hud = HudRouter::new();
        hud.present_loader("Working", HudStyle::Default);
        hud.hide_loader(HudStyle::Success, LoaderOutcome::Success);
        hud.set_progress(0.9);
        assert_eq!(
            hud.loader(),
            Some(LoaderState::Finished(LoaderOutcome::Success))
        );
    }

    #[test]
    fn dismiss_resets_everything() {
        let mut hud = HudRouter::new();
        hud.present_loader("Working", HudStyle::Destructive);
        hud.dismiss();
        assert!(!hud.is_visible());
        assert_eq!(hud.text(), "");
        assert_eq!(hud.style(), HudStyle::Default);
        assert_eq!(hud.loader(), None);
        assert!(hud.auto_hide());
    }

    #[test]
    fn dismiss_when_hidden_does_not_notify() {
        let mut hud = HudRouter::new();
        let version = hud.version();
        hud.dismiss();
        assert_eq!(hud.version(), version);
    }
}
