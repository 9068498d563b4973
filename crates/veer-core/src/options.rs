#![forbid(unsafe_code)]

//! Per-presentation sheet options: detents, drag indicator, interactive
//! dismissal, and fixed-window sizing.
//!
//! `PresentationOptions::default()` is the reset state. Presenting always
//! starts from defaults and applies caller overrides on top, so options
//! from a previous presentation can never leak into the next one.

/// Default sheet height (logical units) on fixed-window platforms.
pub const DEFAULT_SHEET_HEIGHT: u32 = 500;

/// An allowed resting size for a presented sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detent {
    /// About half the available height.
    Medium,
    /// Full available height.
    Large,
    /// An explicit height in logical units.
    Height(u32),
}

/// Options applied to a single presentation.
///
/// Renderers on platforms without fixed window sizing ignore
/// [`height`](Self::height) and [`width`](Self::width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Allowed resting sizes. Never empty; defaults to `[Large]`.
    pub detents: Vec<Detent>,
    /// Whether the drag indicator is shown. Default hidden.
    pub drag_indicator: bool,
    /// Whether interactive (gesture/escape) dismissal is disabled.
    pub dismiss_disabled: bool,
    /// Sheet height on fixed-window platforms.
    pub height: u32,
    /// Sheet width on fixed-window platforms; unset lets the renderer pick.
    pub width: Option<u32>,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            detents: vec![Detent::Large],
            drag_indicator: false,
            dismiss_disabled: false,
            height: DEFAULT_SHEET_HEIGHT,
            width: None,
        }
    }
}

impl PresentationOptions {
    /// The reset state (same as `Default`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed detents.
    #[must_use]
    pub fn detents(mut self, detents: impl IntoIterator<Item = Detent>) -> Self {
        self.detents = detents.into_iter().collect();
        if self.detents.is_empty() {
            self.detents.push(Detent::Large);
        }
        self
    }

    /// Show or hide the drag indicator.
    #[must_use]
    pub fn drag_indicator(mut self, visible: bool) -> Self {
        self.drag_indicator = visible;
        self
    }

    /// Enable or disable interactive dismissal.
    #[must_use]
    pub fn dismiss_disabled(mut self, disabled: bool) -> Self {
        self.dismiss_disabled = disabled;
        self
    }

    /// Set the fixed-window sheet height.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the fixed-window sheet width.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}
