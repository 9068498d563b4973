#![forbid(unsafe_code)]

//! Identity-based equality for navigable values.
//!
//! Every screen, tab, menu entry, and alert value the router touches must
//! supply a stable identity. Two values with equal identities are the same
//! navigation node for deduplication and back-navigation purposes, even if
//! their payloads differ.

use std::fmt;
use std::hash::Hash;

/// A value with a stable, hashable identity.
///
/// Implementors decide what the identity is. For enums without payloads the
/// value itself is usually its own identity:
///
/// ```
/// use veer_core::Identified;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Screen {
///     Home,
///     Detail(u64),
/// }
///
/// impl Identified for Screen {
///     type Id = Screen;
///
///     fn identity(&self) -> Screen {
///         self.clone()
///     }
/// }
///
/// assert!(Screen::Detail(1).matches(&Screen::Detail(1)));
/// assert!(!Screen::Detail(1).matches(&Screen::Detail(2)));
/// ```
///
/// Values carrying non-identity payload (callbacks, prefetched models)
/// project only the identifying part:
///
/// ```
/// use veer_core::Identified;
///
/// #[derive(Clone)]
/// struct ItemScreen {
///     item_id: u64,
///     prefetched_title: String,
/// }
///
/// impl Identified for ItemScreen {
///     type Id = u64;
///
///     fn identity(&self) -> u64 {
///         self.item_id
///     }
/// }
/// ```
pub trait Identified {
    /// The identity type. Cheap to clone and compare.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// The value's stable identity.
    fn identity(&self) -> Self::Id;

    /// Whether two values denote the same navigation node.
    fn matches(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
