//! FPS counter overlay.
//!
//! A small right-aligned readout in the top-right corner of the canvas,
//! toggled with the `F` key. Drawn after the frame is presented so it
//! sits on top of the particles.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::config::SCREEN_WIDTH;
use crate::styles::{LABEL_STYLE_GREEN, RIGHT_ALIGNED};

/// Position of the FPS counter (right-aligned, 4px from the edge).
const FPS_POS: Point = Point::new((SCREEN_WIDTH - 4) as i32, 12);

/// Draw the FPS counter overlay.
pub fn draw_fps_overlay(display: &mut SimulatorDisplay<Rgb888>, fps: f32) {
    let mut fps_str: String<16> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::with_text_style(&fps_str, FPS_POS, LABEL_STYLE_GREEN, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
