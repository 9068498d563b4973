#![forbid(unsafe_code)]

//! Platform-capability configuration.
//!
//! Rather than duplicating the router state machine per platform, one
//! router implementation takes its platform differences as data: whether
//! full-screen covers exist, whether sheets have fixed window sizes, and
//! how many sheets may be stacked at once.

/// Capabilities of the hosting platform, injected into a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCaps {
    /// Whether full-screen covers are available. When `false`, full-screen
    /// presentation requests degrade to sheet presentation.
    pub full_screen: bool,
    /// Whether sheets use explicit width/height options (desktop windows)
    /// rather than detents.
    pub fixed_sheet_size: bool,
    /// Maximum simultaneously stacked sheets. Presenting at the limit
    /// replaces the top sheet. `None` means unbounded stacking. A limit of
    /// zero behaves like one (the first present still succeeds).
    pub sheet_limit: Option<usize>,
}

impl PlatformCaps {
    /// Touch platform: full-screen covers, detent-sized sheets, one sheet
    /// plus one overlay sheet.
    #[must_use]
    pub const fn mobile() -> Self {
        Self {
            full_screen: true,
            fixed_sheet_size: false,
            sheet_limit: Some(2),
        }
    }

    /// Desktop platform: no full-screen covers, fixed sheet sizing, one
    /// sheet plus one overlay sheet.
    #[must_use]
    pub const fn desktop() -> Self {
        Self {
            full_screen: false,
            fixed_sheet_size: true,
            sheet_limit: Some(2),
        }
    }

    /// Unbounded sheet stacking, full-screen available. Useful for hosts
    /// that render arbitrary-depth sheet stacks.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            full_screen: true,
            fixed_sheet_size: false,
            sheet_limit: None,
        }
    }

    /// Override full-screen availability.
    #[must_use]
    pub const fn with_full_screen(mut self, available: bool) -> Self {
        self.full_screen = available;
        self
    }

    /// Override fixed sheet sizing.
    #[must_use]
    pub const fn with_fixed_sheet_size(mut self, fixed: bool) -> Self {
        self.fixed_sheet_size = fixed;
        self
    }

    /// Override the sheet limit.
    #[must_use]
    pub const fn with_sheet_limit(mut self, limit: Option<usize>) -> Self {
        self.sheet_limit = limit;
        self
    }
}

impl Default for PlatformCaps {
    fn default() -> Self {
        Self::mobile()
    }
}
