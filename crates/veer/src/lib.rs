#![forbid(unsafe_code)]

//! veer — navigation-state controller for declarative UI shells.
//!
//! veer tracks where the user is (a push/pop stack of screens), what is
//! floating above that (stacked sheets and full-screen covers), which
//! top-level section is active (tab/menu selection), and what transient
//! messages are pending (alerts, HUD text). It renders nothing: a
//! rendering collaborator observes the state and produces pixels.
//!
//! ```
//! use veer::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum Screen {
//!     Home,
//!     Item(u64),
//! }
//!
//! impl Identified for Screen {
//!     type Id = Screen;
//!
//!     fn identity(&self) -> Screen {
//!         self.clone()
//!     }
//! }
//!
//! let mut router: Router<Screen> = Router::new();
//! router.move_to(Screen::Home);
//! router.present(Screen::Item(7));
//! assert_eq!(router.sheet_depth(), 1);
//!
//! router.back_or_dismiss();
//! assert_eq!(router.sheet_depth(), 0);
//! assert_eq!(router.stack().len(), 1);
//! ```

pub use veer_core::{
    ChangeNotifier, DEFAULT_SHEET_HEIGHT, Detent, Identified, NavStack, PlatformCaps,
    PresentationOptions, Subscription,
};
pub use veer_router::{
    AlertRouter, CoverEntry, DeeplinkError, DeeplinkOutcome, DeeplinkResolver, DismissCallback,
    HudRouter, HudStyle, LoaderOutcome, LoaderState, MenuRouter, NavigationAction, Router,
    SheetEntry, SheetId, SheetStack, TabRouter, UnhandledDeeplink,
};

/// Convenience re-exports for the common surface.
pub mod prelude {
    pub use veer_core::{
        Detent, Identified, NavStack, PlatformCaps, PresentationOptions, Subscription,
    };
    pub use veer_router::{
        AlertRouter, DeeplinkOutcome, DeeplinkResolver, HudRouter, HudStyle, MenuRouter,
        NavigationAction, Router, TabRouter, UnhandledDeeplink,
    };
}
