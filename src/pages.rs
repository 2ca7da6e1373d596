//! Page navigation between the animation and the debug view.
//!
//! Press `D` to toggle between pages.
//!
//! # Pages
//!
//! - [`Page::Screensaver`]: the particle animation itself
//! - [`Page::Debug`]: profiling metrics, pool/cycle counters, debug log

/// Available pages in the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The idle-screen particle animation.
    #[default]
    Screensaver,

    /// Debug/profiling page with frame timing, pool statistics, and the
    /// debug log terminal.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Screensaver => Self::Debug,
            Self::Debug => Self::Screensaver,
        }
    }
}
