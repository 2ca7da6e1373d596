//! Structured ARGB color, the firmware palette, and channel-wise blending.
//!
//! The original firmware passes colors around as packed ARGB32 integers
//! (byte 3 = alpha, byte 2 = red, byte 1 = green, byte 0 = blue). That
//! packing is a serialization detail, so this module keeps colors as an
//! explicit 4-channel [`Argb`] struct and converts to/from the packed form
//! only where a raw 32-bit value is meaningful (palette constants, tests).
//!
//! # The Invisible Sentinel
//!
//! The firmware marks a particle as "not drawn" by assigning it fully
//! opaque black (`0xFF000000`), not a transparent color. [`INVISIBLE`] is
//! that sentinel; the render pass skips any particle whose color equals it.
//! Fade-in and fade-out blend between the sentinel and the particle's
//! palette color, which is why faded particles darken toward black rather
//! than thinning out via alpha.
//!
//! # Blending
//!
//! [`blend`] linearly interpolates each of the four channels independently
//! with truncation toward zero, matching the firmware's integer conversion.
//! It is exact at `t = 0` and `t = 1` (bit-identical to the inputs).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// ARGB Color Value
// =============================================================================

/// A 4-channel ARGB color, each channel in `[0, 255]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Argb {
    /// Alpha channel (255 = opaque).
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Argb {
    /// Unpack from ARGB32 byte layout: `0xAARRGGBB`.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            a: ((packed >> 24) & 0xFF) as u8,
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into ARGB32 byte layout: `0xAARRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Drop the alpha channel for the display boundary.
    ///
    /// Alpha is applied during compositing (see
    /// [`FrameCanvas::blend_circle`](crate::render::FrameCanvas::blend_circle)),
    /// so the framebuffer itself stores plain RGB.
    pub const fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

// =============================================================================
// Firmware Palette
// =============================================================================

/// Opaque black: the "do not draw this particle" sentinel.
pub const INVISIBLE: Argb = Argb::from_u32(0xFF00_0000);

/// The three highlight colors observed in the firmware's color table
/// (signed constants `-16744705`, `-16776961`, `-10615924` masked to u32).
/// Every particle picks one at spawn and keeps it for life.
pub const PALETTE: [Argb; 3] = [
    Argb::from_u32(0xFF00_7EFF), // azure
    Argb::from_u32(0xFF00_00FF), // blue
    Argb::from_u32(0xFF5E_038C), // violet
];

// =============================================================================
// Overlay Colors (debug page and popups, Rgb888 display domain)
// =============================================================================

/// Pure black. Canvas clear color and popup text.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Overlay text on dark backgrounds.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red. Popup backgrounds.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green. Debug page headers and log prompt.
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Yellow. Debug page highlight values.
pub const YELLOW: Rgb888 = Rgb888::YELLOW;

/// Orange. Debug log text.
pub const ORANGE: Rgb888 = Rgb888::new(255, 140, 0);

/// Dark gray. Debug page section headers and divider lines.
pub const GRAY: Rgb888 = Rgb888::new(64, 64, 64);

// =============================================================================
// Color Blend
// =============================================================================

/// Linearly interpolate two ARGB colors channel by channel.
///
/// `t` is clamped to `[0, 1]`. Each channel is computed as
/// `c0 + (c1 - c0) * t` and truncated toward zero, mirroring the
/// firmware's integer conversion. `t = 0` returns `c0` exactly and
/// `t = 1` returns `c1` exactly.
pub fn blend(c0: Argb, c1: Argb, t: f32) -> Argb {
    let t = t.clamp(0.0, 1.0);
    Argb {
        a: lerp_channel(c0.a, c1.a, t),
        r: lerp_channel(c0.r, c1.r, t),
        g: lerp_channel(c0.g, c1.g, t),
        b: lerp_channel(c0.b, c1.b, t),
    }
}

/// Interpolate a single 8-bit channel with truncation toward zero.
#[inline]
fn lerp_channel(c0: u8, c1: u8, t: f32) -> u8 {
    let v = f32::from(c0) + (f32::from(c1) - f32::from(c0)) * t;
    v as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Packing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_argb_pack_round_trip() {
        for &c in &PALETTE {
            assert_eq!(
                Argb::from_u32(c.to_u32()),
                c,
                "Palette color should survive pack/unpack round trip"
            );
        }
        assert_eq!(INVISIBLE.to_u32(), 0xFF00_0000, "Sentinel packs to opaque black");
    }

    #[test]
    fn test_argb_byte_layout() {
        let c = Argb::from_u32(0x1122_3344);
        assert_eq!(c.a, 0x11, "Byte 3 is alpha");
        assert_eq!(c.r, 0x22, "Byte 2 is red");
        assert_eq!(c.g, 0x33, "Byte 1 is green");
        assert_eq!(c.b, 0x44, "Byte 0 is blue");
    }

    #[test]
    fn test_palette_matches_firmware_constants() {
        // Signed firmware constants masked to u32, as observed in the color table
        assert_eq!(PALETTE[0].to_u32(), (-16_744_705_i64 & 0xFFFF_FFFF) as u32);
        assert_eq!(PALETTE[1].to_u32(), (-16_776_961_i64 & 0xFFFF_FFFF) as u32);
        assert_eq!(PALETTE[2].to_u32(), (-10_615_924_i64 & 0xFFFF_FFFF) as u32);
    }

    // -------------------------------------------------------------------------
    // Blend Endpoint Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_blend_t_zero_exact() {
        for &c in &PALETTE {
            assert_eq!(blend(c, INVISIBLE, 0.0), c, "t=0 must return c0 bit-identically");
        }
    }

    #[test]
    fn test_blend_t_one_exact() {
        for &c in &PALETTE {
            assert_eq!(blend(INVISIBLE, c, 1.0), c, "t=1 must return c1 bit-identically");
        }
    }

    #[test]
    fn test_blend_same_color_identity() {
        let c = PALETTE[2];
        for t in [0.0, 0.25, 0.5, 0.99, 1.0] {
            assert_eq!(blend(c, c, t), c, "Blending a color with itself is the identity");
        }
    }

    #[test]
    fn test_blend_clamps_t() {
        let c0 = PALETTE[0];
        let c1 = PALETTE[1];
        assert_eq!(blend(c0, c1, -3.0), blend(c0, c1, 0.0), "t below 0 clamps to 0");
        assert_eq!(blend(c0, c1, 7.5), blend(c0, c1, 1.0), "t above 1 clamps to 1");
    }

    #[test]
    fn test_blend_midpoint_truncates() {
        let c0 = Argb::from_u32(0x0000_0000);
        let c1 = Argb::from_u32(0xFFFF_FFFF);
        let mid = blend(c0, c1, 0.5);
        // 0 + 255 * 0.5 = 127.5, truncated toward zero
        assert_eq!(mid, Argb::from_u32(0x7F7F_7F7F), "Midpoint truncates 127.5 to 127");
    }

    // -------------------------------------------------------------------------
    // Blend Monotonicity
    // -------------------------------------------------------------------------

    #[test]
    fn test_blend_monotonic_per_channel() {
        // When every c0 channel <= c1 channel, each channel must be
        // non-decreasing in t.
        let c0 = Argb::from_u32(0x1010_1010);
        let c1 = Argb::from_u32(0xF0F0_F0F0);
        let mut prev = blend(c0, c1, 0.0);
        for step in 1..=100 {
            let t = step as f32 / 100.0;
            let cur = blend(c0, c1, t);
            assert!(cur.a >= prev.a, "Alpha must be monotonic at t={t}");
            assert!(cur.r >= prev.r, "Red must be monotonic at t={t}");
            assert!(cur.g >= prev.g, "Green must be monotonic at t={t}");
            assert!(cur.b >= prev.b, "Blue must be monotonic at t={t}");
            prev = cur;
        }
    }

    // -------------------------------------------------------------------------
    // Display Boundary
    // -------------------------------------------------------------------------

    #[test]
    fn test_to_rgb888_drops_alpha() {
        let c = Argb::from_u32(0x80AA_BBCC);
        assert_eq!(c.to_rgb888(), Rgb888::new(0xAA, 0xBB, 0xCC));
    }
}
