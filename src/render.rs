//! Render adapter: owned framebuffer with alpha compositing, plus popup
//! overlay state.
//!
//! The core hands this module per-particle draw commands (center, radius,
//! ARGB color); everything display-specific stays here. Particles are
//! composited source-over into an owned RGB framebuffer, which is then
//! blitted to the simulator display in one `fill_contiguous` call.
//!
//! # Why an Owned Framebuffer
//!
//! `SimulatorDisplay` is write-only, but both alpha blending and the
//! optional trail mode need to read back the previous pixel value:
//!
//! - **Alpha blending**: each circle pixel is `src*a + dst*(1-a)`.
//! - **Trail mode**: instead of a hard clear, the previous frame is
//!   dimmed by a constant subtractive fade, leaving motion trails.
//!
//! # Draw Boundary
//!
//! Display writes are infallible in the simulator; results are discarded
//! with `.ok()` at the boundary rather than propagated.

use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{Argb, BLACK};
use crate::config::{POPUP_DURATION, SCREEN_HEIGHT, SCREEN_WIDTH};

// =============================================================================
// Frame Canvas
// =============================================================================

/// Owned RGB framebuffer used as the compositing surface.
pub struct FrameCanvas {
    /// Row-major pixel storage, `SCREEN_WIDTH * SCREEN_HEIGHT` entries.
    pixels: Vec<Rgb888>,
}

impl FrameCanvas {
    /// Create a canvas cleared to black.
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    /// Hard clear to black (trail mode off).
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    /// Subtractively fade the previous frame (trail mode on): every
    /// channel of every pixel is reduced by `amount`, saturating at zero.
    pub fn fade(&mut self, amount: u8) {
        for px in &mut self.pixels {
            *px = Rgb888::new(
                px.r().saturating_sub(amount),
                px.g().saturating_sub(amount),
                px.b().saturating_sub(amount),
            );
        }
    }

    /// Composite one alpha-blended filled circle, source-over.
    ///
    /// Pixels outside the canvas are clipped; fully transparent colors
    /// are skipped outright.
    pub fn blend_circle(&mut self, cx: f32, cy: f32, radius: u32, color: Argb) {
        if color.a == 0 {
            return;
        }

        let cx = cx as i32;
        let cy = cy as i32;
        let r = radius as i32;
        let r_sq = r * r;

        for dy in -r..=r {
            let y = cy + dy;
            if y < 0 || y >= SCREEN_HEIGHT as i32 {
                continue;
            }
            for dx in -r..=r {
                let x = cx + dx;
                if x < 0 || x >= SCREEN_WIDTH as i32 {
                    continue;
                }
                if dx * dx + dy * dy > r_sq {
                    continue;
                }
                let idx = (y as u32 * SCREEN_WIDTH + x as u32) as usize;
                self.pixels[idx] = blend_over(self.pixels[idx], color);
            }
        }
    }

    /// Read one pixel. Used by the compositing tests.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb888 {
        self.pixels[(y * SCREEN_WIDTH + x) as usize]
    }

    /// Blit the framebuffer to the simulator display in one call.
    pub fn present(&self, display: &mut SimulatorDisplay<Rgb888>) {
        let area = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.fill_contiguous(&area, self.pixels.iter().copied()).ok();
    }
}

impl Default for FrameCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Source-over blend of an ARGB color onto an opaque background pixel.
#[inline]
fn blend_over(dst: Rgb888, src: Argb) -> Rgb888 {
    let a = u16::from(src.a);
    let inv = 255 - a;
    let ch = |s: u8, d: u8| ((u16::from(s) * a + u16::from(d) * inv) / 255) as u8;
    Rgb888::new(ch(src.r, dst.r()), ch(src.g, dst.g()), ch(src.b, dst.b()))
}

// =============================================================================
// Popup Overlay State
// =============================================================================

/// Active toggle popup with its start time. Only one popup shows at a
/// time; the most recent toggle wins.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "TRAILS ON/OFF" popup.
    Trails(Instant),
    /// "FPS ON/OFF" popup.
    Fps(Instant),
}

impl Popup {
    /// Start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Trails(t) | Self::Fps(t) => *t,
        }
    }

    /// Check if this popup has outlived [`POPUP_DURATION`].
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.start_time().elapsed() >= POPUP_DURATION
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
