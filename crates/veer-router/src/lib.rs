#![forbid(unsafe_code)]

//! Router state machines for veer.
//!
//! The [`Router`] tracks where the user is (a push/pop stack of screens),
//! what floats above that (an ordered stack of sheets plus an optional
//! full-screen cover), and dispatches deep links. [`TabRouter`] and
//! [`MenuRouter`] track top-level section selection; [`AlertRouter`] and
//! [`HudRouter`] hold transient out-of-band messages. None of them render
//! anything: the rendering layer observes state through each router's
//! `subscribe`/`version` surface and produces pixels elsewhere.
//!
//! All state is single-threaded and mutated synchronously; see
//! `veer-core` for the primitive types.

pub mod alert;
pub mod deeplink;
pub mod hud;
pub mod router;
pub mod sheet;
pub mod tabs;

pub use alert::AlertRouter;
pub use deeplink::{
    DeeplinkError, DeeplinkOutcome, DeeplinkResolver, NavigationAction, UnhandledDeeplink,
};
pub use hud::{HudRouter, HudStyle, LoaderOutcome, LoaderState};
pub use router::{CoverEntry, Router};
pub use sheet::{DismissCallback, SheetEntry, SheetId, SheetStack};
pub use tabs::{MenuRouter, TabRouter};
