//! Pre-computed static text styles for the overlay surfaces.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn in
//! embedded-graphics 0.8, so every style used by the FPS overlay, the
//! popups, and the debug page is computed at compile time and stored in
//! the binary's read-only section. Overlays that need a dynamic color
//! build a style from [`LABEL_FONT`] instead.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb888,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{GREEN, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Right-aligned text. Used for the FPS overlay.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color
/// styles: `MonoTextStyle::new(LABEL_FONT, color)`.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small green text for the FPS overlay on the animation page.
pub const LABEL_STYLE_GREEN: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, GREEN);

/// Large white text for popup messages (`ProFont` 18pt).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
