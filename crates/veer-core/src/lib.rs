#![forbid(unsafe_code)]

//! Core primitives for the veer navigation controller.
//!
//! This crate holds the leaf value types the router state machines in
//! `veer-router` are built from:
//!
//! - [`Identified`]: identity-based equality for navigable destinations,
//!   tabs, menus, and alert values.
//! - [`NavStack`]: an ordered push/pop stack of destinations (forward
//!   history for one navigation context).
//! - [`PresentationOptions`] / [`Detent`]: per-presentation sheet options.
//! - [`PlatformCaps`]: tagged platform-capability configuration.
//! - [`ChangeNotifier`] / [`Subscription`]: the change-notification
//!   contract between state and the rendering layer.
//!
//! Nothing here renders, blocks, or spawns. All types are single-threaded
//! by design; hosts that dispatch from multiple threads must marshal calls
//! onto one owning context themselves.

pub mod caps;
pub mod identified;
pub mod notify;
pub mod options;
pub mod stack;

pub use caps::PlatformCaps;
pub use identified::Identified;
pub use notify::{ChangeNotifier, Subscription};
pub use options::{DEFAULT_SHEET_HEIGHT, Detent, PresentationOptions};
pub use stack::NavStack;
