#![forbid(unsafe_code)]

//! The router state machine: navigation stack, sheet stack, full-screen
//! cover, menu slot, and deep-link dispatch for one navigation scope.
//!
//! All operations are synchronous and total: out-of-range backs clamp,
//! dismissals in any state are well-defined, and presenting into an
//! occupied position follows the stacking policy below instead of
//! faulting. The rendering layer observes state through
//! [`subscribe`](Router::subscribe) / [`version`](Router::version).
//!
//! # Presentation policy
//!
//! - Sheet presentation pushes a new topmost sheet, unless the platform's
//!   sheet limit is reached, in which case the topmost sheet is replaced
//!   (its options reset to defaults before caller overrides apply). With
//!   the default limit of two this is exactly the primary/secondary
//!   two-slot behavior: a second present stacks an overlay sheet, a third
//!   replaces the overlay.
//! - Full-screen presentation replaces the cover unconditionally; covers
//!   never stack. Platforms without full-screen support degrade the
//!   request to a sheet presentation.
//!
//! # Invariants
//!
//! - Sheet depth never exceeds the platform limit; with limit two, an
//!   overlay sheet exists only above a base sheet.
//! - At most one full-screen cover.
//! - Every present starts from default options; nothing leaks from a
//!   prior presentation.
//! - Subscribers are notified after a state change completes, and only
//!   when something actually changed.
//!
//! # Failure Modes
//!
//! - The only fallible operation is [`handle_deeplink`](Router::handle_deeplink)
//!   under the [`UnhandledDeeplink::Fail`] policy.

use std::fmt;

use tracing::{debug, trace, warn};
use veer_core::{ChangeNotifier, Identified, NavStack, PlatformCaps, PresentationOptions, Subscription};

use crate::deeplink::{
    DeeplinkError, DeeplinkOutcome, DeeplinkResolver, NavigationAction, UnhandledDeeplink,
};
use crate::sheet::{SheetEntry, SheetStack};

/// A presented full-screen cover with its own navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverEntry<D> {
    /// The presented destination.
    pub destination: D,
    /// Forward history inside the cover.
    pub path: NavStack<D>,
}

impl<D> CoverEntry<D> {
    fn new(destination: D) -> Self {
        Self {
            destination,
            path: NavStack::new(),
        }
    }
}

/// Navigation-state controller for one navigation scope.
///
/// Owns the root navigation stack, the sheet stack, an optional
/// full-screen cover, and a menu slot. One router per scope: the root
/// scope has one, and hosts using nested routers create one per presented
/// modal context and discard it when that scope is torn down.
pub struct Router<D: Identified> {
    stack: NavStack<D>,
    sheets: SheetStack<D>,
    cover: Option<CoverEntry<D>>,
    menu: Option<D>,
    caps: PlatformCaps,
    resolver: Option<Box<dyn DeeplinkResolver<D>>>,
    unhandled_deeplink: UnhandledDeeplink,
    notifier: ChangeNotifier,
}

impl<D: Identified> Default for Router<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Identified> Router<D> {
    /// Create a router with default (mobile) platform capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::with_caps(PlatformCaps::default())
    }

    /// Create a router for the given platform capabilities.
    #[must_use]
    pub fn with_caps(caps: PlatformCaps) -> Self {
        Self {
            stack: NavStack::new(),
            sheets: SheetStack::new(),
            cover: None,
            menu: None,
            caps,
            resolver: None,
            unhandled_deeplink: UnhandledDeeplink::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Attach a deep-link resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl DeeplinkResolver<D> + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Set the policy for unhandled deep links.
    #[must_use]
    pub fn with_unhandled_deeplink(mut self, policy: UnhandledDeeplink) -> Self {
        self.unhandled_deeplink = policy;
        self
    }

    // --- Observation ---

    /// Register a callback fired after every state change.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    /// Monotonic change counter; bumps once per completed state change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.notifier.version()
    }

    // --- Root stack ---

    /// Push a destination onto the root navigation stack.
    pub fn move_to(&mut self, destination: D) {
        debug!(id = ?destination.identity(), "move");
        self.stack.push(destination);
        self.notifier.notify();
    }

    /// Pop up to `count` destinations off the root stack. Popping more
    /// than exist is a no-op.
    pub fn back(&mut self, count: usize) {
        if self.stack.back(count) > 0 {
            self.notifier.notify();
        } else {
            trace!(count, len = self.stack.len(), "back: out of range, no-op");
        }
    }

    /// Pop the root stack to empty.
    pub fn back_to_root(&mut self) {
        if !self.stack.is_empty() {
            self.stack.back_to_root();
            self.notifier.notify();
        }
    }

    // --- Sheet presentation ---

    /// Present a destination as a sheet with default options.
    pub fn present(&mut self, destination: D) {
        self.present_entry(SheetEntry::new(destination));
    }

    /// Present a destination as a sheet with explicit options.
    pub fn present_with(&mut self, destination: D, options: PresentationOptions) {
        self.present_entry(SheetEntry::new(destination).with_options(options));
    }

    /// Present a sheet with options and a dismissal callback, invoked
    /// exactly once when this presentation ends.
    pub fn present_with_callback(
        &mut self,
        destination: D,
        options: PresentationOptions,
        on_dismiss: impl FnOnce() + 'static,
    ) {
        self.present_entry(
            SheetEntry::new(destination)
                .with_options(options)
                .with_on_dismiss(on_dismiss),
        );
    }

    fn present_entry(&mut self, entry: SheetEntry<D>) {
        let at_limit = self
            .caps
            .sheet_limit
            .is_some_and(|limit| self.sheets.depth() >= limit.max(1));
        let id = entry.destination.identity();
        if at_limit {
            debug!(id = ?id, depth = self.sheets.depth(), "present: replacing top sheet");
            self.sheets.replace_top(entry);
        } else {
            debug!(id = ?id, depth = self.sheets.depth() + 1, "present: pushing sheet");
            self.sheets.push(entry);
        }
        self.notifier.notify();
    }

    /// Present a destination as a full-screen cover, replacing any prior
    /// cover. Degrades to a sheet on platforms without full-screen
    /// support.
    pub fn present_full_screen(&mut self, destination: D) {
        if !self.caps.full_screen {
            debug!(id = ?destination.identity(), "full-screen unavailable, presenting as sheet");
            self.present(destination);
            return;
        }
        debug!(id = ?destination.identity(), "present: full-screen cover");
        self.cover = Some(CoverEntry::new(destination));
        self.notifier.notify();
    }

    // --- Dismissal ---

    /// Dismiss the topmost presentation level: with stacked sheets, only
    /// the top sheet; otherwise every sheet and the full-screen cover.
    pub fn dismiss(&mut self) {
        if self.sheets.depth() >= 2 {
            self.sheets.pop();
            self.notifier.notify();
        } else if !self.sheets.is_empty() || self.cover.is_some() {
            self.sheets.clear();
            self.cover = None;
            self.notifier.notify();
        } else {
            trace!("dismiss: nothing presented, no-op");
        }
    }

    /// Dismiss the topmost sheet only; the cover is untouched.
    pub fn dismiss_sheet(&mut self) {
        if self.sheets.pop().is_some() {
            self.notifier.notify();
        }
    }

    /// Dismiss every sheet; the cover is untouched.
    pub fn dismiss_all_sheets(&mut self) {
        if self.sheets.clear() > 0 {
            self.notifier.notify();
        }
    }

    /// Dismiss the full-screen cover only; sheets are untouched.
    pub fn dismiss_full_screen_cover(&mut self) {
        if self.cover.take().is_some() {
            self.notifier.notify();
        }
    }

    /// Universal back: pops an overlay sheet if one is stacked, else
    /// dismisses all presentation (sheets and cover), else pops the root
    /// stack.
    pub fn back_or_dismiss(&mut self) {
        if self.sheets.depth() >= 2 {
            self.sheets.pop();
            self.notifier.notify();
        } else if !self.sheets.is_empty() || self.cover.is_some() {
            self.sheets.clear();
            self.cover = None;
            self.notifier.notify();
        } else {
            self.back(1);
        }
    }

    /// Set interactive-dismiss-disabled on the topmost sheet. No-op when
    /// nothing is presented.
    pub fn dismiss_disabled(&mut self, disabled: bool) {
        match self.sheets.top_mut() {
            Some(top) => {
                top.options.dismiss_disabled = disabled;
                self.notifier.notify();
            }
            None => trace!("dismiss_disabled: no sheet presented, no-op"),
        }
    }

    // --- Nested navigation inside presentations ---

    /// Push a destination inside the topmost sheet's navigation stack.
    /// No-op when no sheet is presented.
    pub fn move_in_sheet(&mut self, destination: D) {
        match self.sheets.top_mut() {
            Some(top) => {
                top.path.push(destination);
                self.notifier.notify();
            }
            None => trace!("move_in_sheet: no sheet presented, no-op"),
        }
    }

    /// Pop up to `count` destinations inside the topmost sheet's stack.
    pub fn back_in_sheet(&mut self, count: usize) {
        if let Some(top) = self.sheets.top_mut()
            && top.path.back(count) > 0
        {
            self.notifier.notify();
        }
    }

    /// Push a destination inside the full-screen cover's navigation
    /// stack. No-op when no cover is presented.
    pub fn move_in_cover(&mut self, destination: D) {
        match self.cover.as_mut() {
            Some(cover) => {
                cover.path.push(destination);
                self.notifier.notify();
            }
            None => trace!("move_in_cover: no cover presented, no-op"),
        }
    }

    /// Pop up to `count` destinations inside the cover's stack.
    pub fn back_in_cover(&mut self, count: usize) {
        if let Some(cover) = self.cover.as_mut()
            && cover.path.back(count) > 0
        {
            self.notifier.notify();
        }
    }

    // --- Menu ---

    /// Overwrite the menu slot.
    pub fn change_menu(&mut self, destination: D) {
        self.menu = Some(destination);
        self.notifier.notify();
    }

    // --- Deep links ---

    /// Resolve a URI through the configured resolver and dispatch the
    /// resulting navigation action.
    ///
    /// Unrecognized links (and a missing resolver) are a logged no-op
    /// under [`UnhandledDeeplink::Ignore`] and an error under
    /// [`UnhandledDeeplink::Fail`].
    pub fn handle_deeplink(&mut self, url: &str) -> Result<DeeplinkOutcome, DeeplinkError> {
        let resolved = match self.resolver.as_ref() {
            Some(resolver) => resolver.resolve(url),
            None => {
                return match self.unhandled_deeplink {
                    UnhandledDeeplink::Ignore => {
                        warn!(url, "deep link ignored: no resolver configured");
                        Ok(DeeplinkOutcome::Unhandled)
                    }
                    UnhandledDeeplink::Fail => Err(DeeplinkError::NoResolver),
                };
            }
        };

        match resolved {
            Some((destination, NavigationAction::Move)) => {
                self.move_to(destination);
                Ok(DeeplinkOutcome::Moved)
            }
            Some((destination, NavigationAction::Present(options))) => {
                self.present_with(destination, options);
                Ok(DeeplinkOutcome::Presented)
            }
            Some((destination, NavigationAction::PresentFullScreen)) => {
                self.present_full_screen(destination);
                Ok(DeeplinkOutcome::Presented)
            }
            None => match self.unhandled_deeplink {
                UnhandledDeeplink::Ignore => {
                    warn!(url, "deep link unrecognized, ignoring");
                    Ok(DeeplinkOutcome::Unhandled)
                }
                UnhandledDeeplink::Fail => Err(DeeplinkError::Unresolved(url.to_string())),
            },
        }
    }

    // --- Queries ---

    /// The root navigation stack.
    #[must_use]
    pub fn stack(&self) -> &NavStack<D> {
        &self.stack
    }

    /// The sheet stack, bottom to top.
    #[must_use]
    pub fn sheets(&self) -> &SheetStack<D> {
        &self.sheets
    }

    /// The topmost presented sheet, if any.
    #[must_use]
    pub fn top_sheet(&self) -> Option<&SheetEntry<D>> {
        self.sheets.top()
    }

    /// Number of presented sheets.
    #[must_use]
    pub fn sheet_depth(&self) -> usize {
        self.sheets.depth()
    }

    /// The presented full-screen cover, if any.
    #[must_use]
    pub fn full_screen_cover(&self) -> Option<&CoverEntry<D>> {
        self.cover.as_ref()
    }

    /// The current menu selection, if any.
    #[must_use]
    pub fn menu(&self) -> Option<&D> {
        self.menu.as_ref()
    }

    /// The platform capabilities this router was built with.
    #[must_use]
    pub fn caps(&self) -> PlatformCaps {
        self.caps
    }

    /// Whether anything (sheet or cover) is presented.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        !self.sheets.is_empty() || self.cover.is_some()
    }
}

impl<D: Identified> fmt::Debug for Router<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("stack_len", &self.stack.len())
            .field("sheets", &self.sheets)
            .field("cover", &self.cover.as_ref().map(|c| c.destination.identity()))
            .field("menu", &self.menu.as_ref().map(Identified::identity))
            .field("caps", &self.caps)
            .field("has_resolver", &self.resolver.is_some())
            .field("unhandled_deeplink", &self.unhandled_deeplink)
            .field("version", &self.notifier.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use veer_core::Detent;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Screen {
        Home,
        Item(u64),
        Settings,
    }

    impl Identified for Screen {
        type Id = Screen;

        fn identity(&self) -> Screen {
            self.clone()
        }
    }

    fn top_id(router: &Router<Screen>) -> Option<Screen> {
        router.top_sheet().map(|e| e.destination.identity())
    }

    #[test]
    fn move_and_back() {
        let mut router = Router::new();
        router.move_to(Screen::Home);
        router.move_to(Screen::Item(1));
        assert_eq!(router.stack().len(), 2);

        router.back(1);
        assert_eq!(router.stack().top(), Some(&Screen::Home));

        router.back(5);
        assert_eq!(router.stack().len(), 1, "out-of-range back is a no-op");

        router.back_to_root();
        assert!(router.stack().is_empty());
    }

    #[test]
    fn second_present_stacks_an_overlay() {
        let mut router = Router::new();
        router.present(Screen::Item(1));
        assert_eq!(router.sheet_depth(), 1);

        router.present(Screen::Item(2));
        assert_eq!(router.sheet_depth(), 2);
        let ids: Vec<Screen> = router
            .sheets()
            .iter()
            .map(|e| e.destination.identity())
            .collect();
        assert_eq!(ids, vec![Screen::Item(1), Screen::Item(2)]);
    }

    #[test]
    fn third_present_replaces_the_overlay() {
        let mut router = Router::new();
        router.present(Screen::Item(1));
        router.present(Screen::Item(2));
        router.present(Screen::Item(3));
        assert_eq!(router.sheet_depth(), 2);
        let ids: Vec<Screen> = router
            .sheets()
            .iter()
            .map(|e| e.destination.identity())
            .collect();
        assert_eq!(ids, vec![Screen::Item(1), Screen::Item(3)]);
    }

    #[test]
    fn unbounded_caps_stack_without_replacement() {
        let mut router = Router::with_caps(PlatformCaps::unbounded());
        for i in 0..5 {
            router.present(Screen::Item(i));
        }
        assert_eq!(router.sheet_depth(), 5);
    }

    #[test]
    fn present_resets_options_before_applying_overrides() {
        let mut router = Router::new();
        router.present_with(
            Screen::Item(1),
            PresentationOptions::new()
                .detents([Detent::Medium])
                .dismiss_disabled(true),
        );
        router.present(Screen::Item(2));
        // Third present replaces the overlay; its options must be fresh.
        router.present(Screen::Item(3));

        let top = router.top_sheet().unwrap();
        assert_eq!(top.options, PresentationOptions::default());
        // Base sheet keeps its own options.
        let base = router.sheets().iter().next().unwrap();
        assert!(base.options.dismiss_disabled);
        assert_eq!(base.options.detents, vec![Detent::Medium]);
    }

    #[test]
    fn dismiss_peels_overlay_then_clears() {
        let mut router = Router::new();
        router.present(Screen::Item(1));
        router.present(Screen::Item(2));

        router.dismiss();
        assert_eq!(router.sheet_depth(), 1);
        assert_eq!(top_id(&router), Some(Screen::Item(1)));

        router.dismiss();
        assert_eq!(router.sheet_depth(), 0);
        assert!(!router.is_presenting());

        // Nothing presented: dismiss stays a no-op.
        let version = router.version();
        router.dismiss();
        assert_eq!(router.version(), version);
    }

    #[test]
    fn dismiss_at_depth_one_also_clears_cover() {
        let mut router = Router::new();
        router.present_full_screen(Screen::Settings);
        router.present(Screen::Item(1));

        router.dismiss();
        assert!(router.top_sheet().is_none());
        assert!(router.full_screen_cover().is_none());
    }

    #[test]
    fn dismiss_sheet_leaves_cover() {
        let mut router = Router::new();
        router.present_full_screen(Screen::Settings);
        router.present(Screen::Item(1));

        router.dismiss_sheet();
        assert!(router.top_sheet().is_none());
        assert!(router.full_screen_cover().is_some());
    }

    #[test]
    fn dismiss_full_screen_cover_leaves_sheets() {
        let mut router = Router::new();
        router.present_full_screen(Screen::Settings);
        router.present(Screen::Item(1));

        router.dismiss_full_screen_cover();
        assert!(router.full_screen_cover().is_none());
        assert_eq!(router.sheet_depth(), 1);
    }

    #[test]
    fn full_screen_replaces_prior_cover() {
        let mut router = Router::new();
        router.present_full_screen(Screen::Home);
        router.present_full_screen(Screen::Settings);
        assert_eq!(
            router.full_screen_cover().map(|c| c.destination.clone()),
            Some(Screen::Settings)
        );
    }

    #[test]
    fn full_screen_degrades_to_sheet_without_capability() {
        let mut router = Router::with_caps(PlatformCaps::desktop());
        router.present_full_screen(Screen::Settings);
        assert!(router.full_screen_cover().is_none());
        assert_eq!(router.sheet_depth(), 1);
        assert_eq!(top_id(&router), Some(Screen::Settings));
    }

    #[test]
    fn back_or_dismiss_priority_order() {
        // Overlay sheet: pop it only.
        let mut router = Router::new();
        router.move_to(Screen::Home);
        router.present(Screen::Item(1));
        router.present(Screen::Item(2));
        router.back_or_dismiss();
        assert_eq!(router.sheet_depth(), 1);
        assert_eq!(router.stack().len(), 1);

        // Single sheet + cover: clear both, stack untouched.
        router.present_full_screen(Screen::Settings);
        router.back_or_dismiss();
        assert!(!router.is_presenting());
        assert_eq!(router.stack().len(), 1);

        // Nothing presented: pop the root stack.
        router.back_or_dismiss();
        assert!(router.stack().is_empty());

        // Everything empty: still total.
        router.back_or_dismiss();
        assert!(router.stack().is_empty());
    }

    #[test]
    fn dismiss_disabled_targets_topmost_sheet() {
        let mut router = Router::new();
        router.present(Screen::Item(1));
        router.present(Screen::Item(2));

        router.dismiss_disabled(true);
        assert!(router.top_sheet().unwrap().options.dismiss_disabled);
        let base = router.sheets().iter().next().unwrap();
        assert!(!base.options.dismiss_disabled);

        router.dismiss_disabled(false);
        assert!(!router.top_sheet().unwrap().options.dismiss_disabled);
    }

    #[test]
    fn dismiss_disabled_without_sheet_is_noop() {
        let mut router: Router<Screen> = Router::new();
        let version = router.version();
        router.dismiss_disabled(true);
        assert_eq!(router.version(), version);
    }

    #[test]
    fn nested_sheet_navigation() {
        let mut router = Router::new();
        router.present(Screen::Item(1));
        router.move_in_sheet(Screen::Settings);
        router.move_in_sheet(Screen::Item(2));
        assert_eq!(router.top_sheet().unwrap().path.len(), 2);

        router.back_in_sheet(1);
        assert_eq!(router.top_sheet().unwrap().path.len(), 1);

        // Sheet path is torn down with the sheet.
        router.dismiss();
        router.present(Screen::Item(1));
        assert!(router.top_sheet().unwrap().path.is_empty());
    }

    #[test]
    fn nested_cover_navigation() {
        let mut router = Router::new();
        router.move_in_cover(Screen::Home); // no cover yet: no-op
        router.present_full_screen(Screen::Home);
        router.move_in_cover(Screen::Item(9));
        assert_eq!(router.full_screen_cover().unwrap().path.len(), 1);
        router.back_in_cover(1);
        assert!(router.full_screen_cover().unwrap().path.is_empty());
    }

    #[test]
    fn change_menu_overwrites() {
        let mut router = Router::new();
        assert!(router.menu().is_none());
        router.change_menu(Screen::Home);
        router.change_menu(Screen::Settings);
        assert_eq!(router.menu(), Some(&Screen::Settings));
    }

    #[test]
    fn on_dismiss_fires_exactly_once() {
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let mut router = Router::new();
        router.present_with_callback(Screen::Item(1), PresentationOptions::new(), move || {
            f.set(f.get() + 1);
        });

        router.dismiss();
        assert_eq!(fired.get(), 1);
        router.dismiss();
        router.dismiss_all_sheets();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn notifications_fire_after_each_change() {
        let mut router = Router::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let _sub = router.subscribe(move || c.set(c.get() + 1));

        router.move_to(Screen::Home);
        router.present(Screen::Item(1));
        router.dismiss();
        assert_eq!(count.get(), 3);

        // No-ops do not notify.
        router.back(10);
        router.dismiss();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn version_tracks_changes() {
        let mut router = Router::new();
        let v0 = router.version();
        router.move_to(Screen::Home);
        assert_eq!(router.version(), v0 + 1);
        router.back_to_root();
        router.back_to_root(); // already empty, no bump
        assert_eq!(router.version(), v0 + 2);
    }
}
