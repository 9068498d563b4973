#![forbid(unsafe_code)]

//! Deep-link resolution: external URIs mapped to navigation actions.
//!
//! A [`DeeplinkResolver`] is a pure external collaborator: it turns a URI
//! string into a destination plus a [`NavigationAction`], or `None` when
//! the URI is unrecognized. The router dispatches the action; what happens
//! to unrecognized links is a configuration choice ([`UnhandledDeeplink`]),
//! not a hard-coded fault.

use thiserror::Error;
use veer_core::PresentationOptions;

/// How the router should reach a deep-linked destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Push onto the root navigation stack.
    Move,
    /// Present as a sheet with the given options.
    Present(PresentationOptions),
    /// Present as a full-screen cover (degrades to a sheet on platforms
    /// without full-screen support).
    PresentFullScreen,
}

/// Resolves external URIs into navigation actions.
///
/// Implemented for closures, so a match block is usually enough:
///
/// ```
/// use veer_router::{DeeplinkResolver, NavigationAction};
///
/// let resolver = |url: &str| match url.strip_prefix("app://item/") {
///     Some(raw) => raw
///         .parse::<u64>()
///         .ok()
///         .map(|id| (id, NavigationAction::Move)),
///     None => None,
/// };
/// assert!(resolver.resolve("app://item/42").is_some());
/// assert!(resolver.resolve("app://unknown").is_none());
/// ```
pub trait DeeplinkResolver<D> {
    /// Resolve a URI, or `None` when unrecognized.
    fn resolve(&self, url: &str) -> Option<(D, NavigationAction)>;
}

impl<D, F> DeeplinkResolver<D> for F
where
    F: Fn(&str) -> Option<(D, NavigationAction)>,
{
    fn resolve(&self, url: &str) -> Option<(D, NavigationAction)> {
        self(url)
    }
}

/// Policy for deep links no resolver claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnhandledDeeplink {
    /// Silently ignore (logged); the router performs no navigation.
    #[default]
    Ignore,
    /// Surface a [`DeeplinkError`]; useful to fail fast during
    /// integration.
    Fail,
}

/// What a `handle_deeplink` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeeplinkOutcome {
    /// The destination was pushed onto the root stack.
    Moved,
    /// The destination was presented (sheet or cover).
    Presented,
    /// The link was not recognized and ignored per policy.
    Unhandled,
}

/// Deep-link failures, produced only under [`UnhandledDeeplink::Fail`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeeplinkError {
    /// No resolver was configured on the router.
    #[error("no deep-link resolver configured")]
    NoResolver,
    /// The resolver did not recognize the URI.
    #[error("unresolved deep link: {0}")]
    Unresolved(String),
}
