//! Overlay widgets drawn on top of the animation.
//!
//! - [`overlay`]: FPS counter in the top-right corner
//! - [`popups`]: toggle confirmation popups (trails, FPS display)
//!
//! All widgets use the pre-computed styles from [`crate::styles`] and
//! `heapless::String` for text formatting, so drawing an overlay never
//! allocates. Popup geometry is `const`, computed at compile time from
//! the screen dimensions.

mod overlay;
mod popups;

pub use overlay::draw_fps_overlay;
pub use popups::{draw_fps_toggle_popup, draw_trails_popup};
