#![forbid(unsafe_code)]

//! Navigation stack: ordered forward history for one navigation context.
//!
//! Index 0 is the root; the last entry is the visible screen. Every
//! navigation context owns exactly one stack — the root scope has one, and
//! each presented sheet or cover carries its own.
//!
//! # Invariants
//!
//! - `push` always succeeds; no deduplication (pushing the same identity
//!   twice creates two distinct entries).
//! - `back(count)` with `count` greater than the current length removes
//!   nothing; `back_saturating(count)` removes `min(count, len)` entries.
//!   Both are total.
//! - `back_to_root` empties the stack.
//!
//! # Failure Modes
//!
//! None. Every operation is defined for every state; over-popping is a
//! no-op, never a panic.

use crate::identified::Identified;

/// An ordered, mutable sequence of destinations (insertion order =
/// navigation order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack<D> {
    entries: Vec<D>,
}

impl<D> Default for NavStack<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> NavStack<D> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a destination. Always succeeds.
    pub fn push(&mut self, destination: D) {
        self.entries.push(destination);
    }

    /// Remove the trailing `count` entries.
    ///
    /// If `count` exceeds the current length, nothing is removed. `back(0)`
    /// is a no-op. Returns the number of entries removed.
    pub fn back(&mut self, count: usize) -> usize {
        if count == 0 || count > self.entries.len() {
            return 0;
        }
        self.entries.truncate(self.entries.len() - count);
        count
    }

    /// Remove up to `count` trailing entries, clamping at empty.
    ///
    /// Unlike [`back`](Self::back), over-popping empties the stack instead
    /// of doing nothing. Returns the number of entries removed.
    pub fn back_saturating(&mut self, count: usize) -> usize {
        let removed = count.min(self.entries.len());
        self.entries.truncate(self.entries.len() - removed);
        removed
    }

    /// Remove all entries.
    pub fn back_to_root(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is at its root (no entries).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The topmost (visible) destination, if any.
    #[must_use]
    pub fn top(&self) -> Option<&D> {
        self.entries.last()
    }

    /// Iterate entries from root to top.
    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.entries.iter()
    }

    /// All entries from root to top.
    #[must_use]
    pub fn entries(&self) -> &[D] {
        &self.entries
    }
}

impl<D: Identified> NavStack<D> {
    /// Whether any entry has the given identity.
    pub fn contains_id(&self, id: &D::Id) -> bool {
        self.entries.iter().any(|d| d.identity() == *id)
    }
}

impl<'a, D> IntoIterator for &'a NavStack<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
