//! Application configuration and protocol constants.
//!
//! The timing constants (`PERIOD`, `PHASE_MAX`, `POOL_SIZE`) come straight
//! from the reverse-engineered LCM firmware and must not be "rounded off":
//! the animation's look depends on the exact fixed-point phase range and
//! the 2500-tick particle timing domain derived from it.
//!
//! Everything derived from the screen dimensions (`CENTER_X`, `CENTER_Y`)
//! is computed at compile time as `const`, avoiding per-frame arithmetic.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (UniFi LCM panel is 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Canvas center X coordinate. Spawn geometry orbits this point.
pub const CENTER_X: f32 = (SCREEN_WIDTH / 2) as f32;

/// Canvas center Y coordinate.
pub const CENTER_Y: f32 = (SCREEN_HEIGHT / 2) as f32;

// =============================================================================
// Reverse-Engineered Protocol Constants
// =============================================================================

/// Particle timing domain: checkpoints and ticks live in `[0, PERIOD]`.
/// One nominal animation cycle is `PERIOD` ticks long.
pub const PERIOD: i32 = 2500;

/// Maximum raw phase value. The firmware advances a 15-bit fixed-point
/// sawtooth counter in `[0, 0x7FFF]` and rescales it onto the tick domain.
pub const PHASE_MAX: i32 = 0x7FFF;

/// Fixed particle pool capacity. The pool is topped back up to exactly
/// this size every frame.
pub const POOL_SIZE: usize = 250;

// =============================================================================
// Spawn Tuning
// =============================================================================

/// Minimum spawn orbit radius around the canvas center, in pixels.
pub const SPAWN_RADIUS_MIN: i32 = 70;

/// Maximum spawn orbit radius around the canvas center, in pixels.
pub const SPAWN_RADIUS_MAX: i32 = 90;

/// Maximum per-axis drift between a particle's origin and destination.
/// The destination is sampled within `origin +/- DRIFT_RANGE` per axis.
pub const DRIFT_RANGE: i32 = 70;

/// Divisor mapping spawn radius to maximum draw size:
/// `size in [1, max(1, radius / SIZE_DIVISOR)]`.
pub const SIZE_DIVISOR: i32 = 20;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Wall-clock duration of one full sawtooth sweep (phase 0 -> PHASE_MAX).
/// Tune this to match the on-device animation speed.
pub const CYCLE_LENGTH: Duration = Duration::from_secs(1);

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes
/// early.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Duration that toggle popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

// =============================================================================
// Trail Mode
// =============================================================================

/// Per-channel subtractive fade applied to the previous frame when trail
/// mode is enabled. Higher values = shorter trails.
pub const TRAIL_FADE: u8 = 24;
