#![forbid(unsafe_code)]

//! Ordered sheet stack: modal presentations with z-ordering.
//!
//! The `SheetStack` generalizes the primary/secondary two-slot model to an
//! ordered list of sheet entries. Presenting pushes (or, at a platform
//! limit, replaces the top), dismissing pops the tail. Each entry carries
//! its own navigation stack, presentation options, and an optional
//! on-dismiss callback.
//!
//! # Invariants
//!
//! - Z-order is strictly the vec order; the last entry is topmost.
//! - Only the topmost entry is "active": dismiss-disabled and universal
//!   back target it.
//! - An entry's on-dismiss callback fires exactly once, on whichever
//!   removal path ends its presentation (pop, replacement, or clear), and
//!   never on plain drop of the stack.
//!
//! # Failure Modes
//!
//! - `pop()` on an empty stack returns `None` (no panic).
//! - `replace_top()` on an empty stack behaves like `push()`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use veer_core::{Identified, NavStack, PresentationOptions};

/// Global counter for unique sheet IDs.
static SHEET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for a presented sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(u64);

impl SheetId {
    fn next() -> Self {
        Self(SHEET_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw ID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Callback invoked when a sheet's presentation ends.
pub type DismissCallback = Box<dyn FnOnce()>;

/// One presented sheet: destination, nested navigation stack, options, and
/// an optional dismissal callback.
pub struct SheetEntry<D> {
    id: SheetId,
    /// The presented destination.
    pub destination: D,
    /// Forward history inside this sheet.
    pub path: NavStack<D>,
    /// Presentation options; always starts from defaults.
    pub options: PresentationOptions,
    on_dismiss: Option<DismissCallback>,
}

impl<D> SheetEntry<D> {
    /// Create an entry with default options and no callback.
    pub fn new(destination: D) -> Self {
        Self {
            id: SheetId::next(),
            destination,
            path: NavStack::new(),
            options: PresentationOptions::default(),
            on_dismiss: None,
        }
    }

    /// Apply presentation options.
    #[must_use]
    pub fn with_options(mut self, options: PresentationOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a dismissal callback, invoked exactly once when this
    /// presentation ends.
    #[must_use]
    pub fn with_on_dismiss(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// This sheet's process-unique ID.
    #[must_use]
    pub fn id(&self) -> SheetId {
        self.id
    }

    /// Whether a dismissal callback is attached.
    #[must_use]
    pub fn has_on_dismiss(&self) -> bool {
        self.on_dismiss.is_some()
    }

    fn end_presentation(mut self) -> SheetId {
        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
        self.id
    }
}

impl<D: Identified> fmt::Debug for SheetEntry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetEntry")
            .field("id", &self.id)
            .field("destination", &self.destination.identity())
            .field("path_len", &self.path.len())
            .field("options", &self.options)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// Stack of presented sheets, bottom to top.
pub struct SheetStack<D> {
    entries: Vec<SheetEntry<D>>,
}

impl<D> Default for SheetStack<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SheetStack<D> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Push a new topmost sheet. Returns its ID.
    pub fn push(&mut self, entry: SheetEntry<D>) -> SheetId {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Replace the topmost sheet, ending its presentation. On an empty
    /// stack this is a plain push. Returns the new entry's ID.
    pub fn replace_top(&mut self, entry: SheetEntry<D>) -> SheetId {
        if let Some(old) = self.entries.pop() {
            old.end_presentation();
        }
        self.push(entry)
    }

    /// Pop the topmost sheet, ending its presentation. Returns its ID, or
    /// `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<SheetId> {
        self.entries.pop().map(SheetEntry::end_presentation)
    }

    /// End every presentation, top first. Returns the number dismissed.
    pub fn clear(&mut self) -> usize {
        let mut dismissed = 0;
        while self.pop().is_some() {
            dismissed += 1;
        }
        dismissed
    }

    /// Number of presented sheets.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sheet is presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The topmost sheet, if any.
    #[must_use]
    pub fn top(&self) -> Option<&SheetEntry<D>> {
        self.entries.last()
    }

    /// Mutable access to the topmost sheet, if any.
    pub fn top_mut(&mut self) -> Option<&mut SheetEntry<D>> {
        self.entries.last_mut()
    }

    /// Iterate sheets from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, SheetEntry<D>> {
        self.entries.iter()
    }
}

impl<D: Identified> fmt::Debug for SheetStack<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
