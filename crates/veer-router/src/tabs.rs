#![forbid(unsafe_code)]

//! Top-level section selection: tab routers and menu routers.

use tracing::warn;
use veer_core::{ChangeNotifier, Identified, Subscription};

/// Selection among a fixed, ordered set of tabs.
///
/// # Invariants
///
/// - The tab list is fixed at construction.
/// - The selection is expected to be a member of the list; a non-member
///   assignment is logged but still applied, keeping the operation total
///   (the caller owns membership, the router only surfaces violations).
#[derive(Debug)]
pub struct TabRouter<T: Identified> {
    selection: T,
    tabs: Vec<T>,
    notifier: ChangeNotifier,
}

impl<T: Identified> TabRouter<T> {
    /// Create a tab router with an initial selection and the fixed tab
    /// list.
    pub fn new(selection: T, tabs: impl IntoIterator<Item = T>) -> Self {
        let tabs: Vec<T> = tabs.into_iter().collect();
        if !tabs.iter().any(|t| t.matches(&selection)) {
            warn!(id = ?selection.identity(), "initial tab selection is not in the tab list");
        }
        Self {
            selection,
            tabs,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Overwrite the current selection.
    pub fn change_tab(&mut self, tab: T) {
        if !self.tabs.iter().any(|t| t.matches(&tab)) {
            warn!(id = ?tab.identity(), "selected tab is not in the tab list");
        }
        self.selection = tab;
        self.notifier.notify();
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &T {
        &self.selection
    }

    /// The fixed, ordered tab list.
    #[must_use]
    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    /// Register a callback fired after every selection change.
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

/// Sidebar/menu selection with a main and a sub-menu slot.
#[derive(Debug)]
pub struct MenuRouter<M: Identified> {
    menu: Option<M>,
    sub_menu: Option<M>,
    notifier: ChangeNotifier,
}

impl<M: Identified> MenuRouter<M> {
    /// Create a menu router with an initial main selection.
    pub fn new(menu: M) -> Self {
        Self {
            menu: Some(menu),
            sub_menu: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Overwrite the main menu selection.
    pub fn change_menu(&mut self, menu: M) {
        self.menu = Some(menu);
        self.notifier.notify();
    }

    /// Overwrite the menu selection from a sub-menu interaction.
    ///
    /// Writes the same slot as [`change_menu`](Self::change_menu): callers
    /// have always observed both operations driving the main selection.
    // TODO: decide with product whether this should target `sub_menu`
    // instead; `set_sub_menu` exists so renderers can migrate without an
    // API break.
    pub fn change_sub_menu(&mut self, menu: M) {
        self.menu = Some(menu);
        self.notifier.notify();
    }

    /// Overwrite the sub-menu slot directly.
    pub fn set_sub_menu(&mut self, menu: M) {
        self.sub_menu = Some(menu);
        self.notifier.notify();
    }

    /// The main menu selection.
    #[must_use]
    pub fn menu(&self) -> Option<&M> {
        self.menu.as_ref()
    }

    /// The sub-menu selection.
    #[must_use]
    pub fn sub_menu(&self) -> Option<&M> {
        self.sub_menu.as_ref()
    }

    /// Register a callback fired after every selection change.
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
