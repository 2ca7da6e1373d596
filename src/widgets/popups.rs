//! Non-modal popup overlays for toggle confirmations.
//!
//! Popups appear centered on screen with a white border and red
//! background. Only one popup displays at a time (most recent wins) and
//! input keeps working while one is visible. Expiration is handled by
//! the main loop via [`crate::render::Popup::is_expired`].
//!
//! All geometry is `const`, computed from the screen dimensions at
//! compile time, and the fill styles use the const `PrimitiveStyle`
//! constructors of embedded-graphics 0.8.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{RED, WHITE};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

// =============================================================================
// Popup Layout Constants
// =============================================================================

/// Popup width (both popups share one size on the square canvas).
const POPUP_WIDTH: u32 = 170;
/// Popup height.
const POPUP_HEIGHT: u32 = 50;
/// X position (centered on screen).
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
/// Y position (centered on screen).
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Popup text position (single line, vertically centered).
const POPUP_TEXT_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, (SCREEN_HEIGHT / 2) as i32 + 6);

// =============================================================================
// Pre-computed Styles and Geometry
// =============================================================================

/// White fill style for the popup border.
const WHITE_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(WHITE);

/// Red fill style for the popup background.
const RED_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(RED);

/// Border rectangle (3px larger on each side than the background).
const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);

/// Background rectangle.
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the bordered popup frame shared by all popups.
fn draw_popup_frame(display: &mut SimulatorDisplay<Rgb888>) {
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(BG_POS, BG_SIZE).into_styled(RED_FILL).draw(display).ok();
}

/// Draw the "TRAILS ON/OFF" popup (T key toggle).
pub fn draw_trails_popup(display: &mut SimulatorDisplay<Rgb888>, trails_on: bool) {
    draw_popup_frame(display);
    let text = if trails_on { "TRAILS ON" } else { "TRAILS OFF" };
    Text::with_text_style(text, POPUP_TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "FPS ON/OFF" popup (F key toggle).
pub fn draw_fps_toggle_popup(display: &mut SimulatorDisplay<Rgb888>, show_fps: bool) {
    draw_popup_frame(display);
    let text = if show_fps { "FPS ON" } else { "FPS OFF" };
    Text::with_text_style(text, POPUP_TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
