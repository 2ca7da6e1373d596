//! Debug/profiling page rendering.
//!
//! Displays frame timing statistics, pool/cycle counters, and a debug
//! log terminal. Accessible by pressing `D` to toggle from the
//! animation page.
//!
//! # Layout (240x240 canvas)
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ DEBUG VIEW      UP 00:12:34   60 FPS │
//! ├──────────────────────────────────────┤
//! │ TIMING            │ POOL             │
//! │ Frame: 16.7ms     │ Frames: 12847    │
//! │ Render: 1.2ms     │ Wraps:  213      │
//! │ Sleep: 15.4ms     │ Retired:48211    │
//! │ Min:   16.1ms     │ Spawned:48211    │
//! │ Max:   18.9ms     │ Carry:  24       │
//! │ Avg:   16.7ms     │ Drawn:  187      │
//! │                                      │
//! │ Pool: 250 ptcls ~14KB  Log: 288B     │
//! ├──────────────────────────────────────┤
//! │ > System started                     │
//! │ > Trails: ON                         │
//! └──────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use crate::config::{POOL_SIZE, SCREEN_WIDTH};
use crate::particle::Particle;
use crate::profiling::{DebugLog, LOG_BUFFER_SIZE, LOG_LINE_LENGTH, ProfilingMetrics};
use crate::styles::LABEL_FONT;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position of stats section headers
const SECTION_HEADER_Y: i32 = 30;

/// Y position where stats values start
const STATS_Y: i32 = 44;

/// X position for left column (frame timing)
const COL1_X: i32 = 4;

/// X position for right column (pool/cycle counters)
const COL2_X: i32 = 124;

/// Line height for stats (compact)
const STAT_LINE_HEIGHT: i32 = 13;

/// Y position of the memory summary line
const MEMORY_Y: i32 = 138;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 148;

/// Y position where log terminal starts
const LOG_Y: i32 = 160;

/// Height of each log line (compact)
const LOG_LINE_HEIGHT: i32 = 12;

// =============================================================================
// Colors
// =============================================================================

/// Background color for debug page
const DEBUG_BG: Rgb888 = BLACK;

/// Header text color
const HEADER_COLOR: Rgb888 = GREEN;

/// Section header color (dimmer)
const SECTION_COLOR: Rgb888 = GRAY;

/// Value color (bright)
const VALUE_COLOR: Rgb888 = WHITE;

/// Highlight color for min/max/avg
const HIGHLIGHT_COLOR: Rgb888 = YELLOW;

/// Log prompt color
const LOG_PROMPT_COLOR: Rgb888 = GREEN;

/// Log text color
const LOG_TEXT_COLOR: Rgb888 = ORANGE;

/// Divider line color
const DIVIDER_COLOR: Rgb888 = GRAY;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page.
///
/// Clears the display and renders:
/// - Header with "DEBUG VIEW", uptime, and FPS
/// - Two columns: frame timing and pool/cycle counters
/// - Memory summary line
/// - Debug log terminal (bottom section)
pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb888>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    fps: f32,
) {
    display.clear(DEBUG_BG).ok();

    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_pool_column(display, metrics);

    draw_memory_line(display);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

/// Draw the header with title, uptime, and FPS.
fn draw_header(display: &mut SimulatorDisplay<Rgb888>, metrics: &ProfilingMetrics, fps: f32) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(100, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(196, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

/// Draw section headers for the stat columns.
fn draw_section_headers(display: &mut SimulatorDisplay<Rgb888>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("POOL", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

/// Draw frame timing statistics (left column).
fn draw_timing_column(display: &mut SimulatorDisplay<Rgb888>, metrics: &ProfilingMetrics) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let x = COL1_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frame: {:.1}ms", metrics.frame_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Render:{:.1}ms", metrics.render_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Sleep: {:.1}ms", metrics.sleep_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let min_ms = if metrics.frame_time_min_us == u32::MAX {
        0.0
    } else {
        metrics.frame_time_min_us as f32 / 1000.0
    };
    let mut s: String<20> = String::new();
    let _ = write!(s, "Min:   {min_ms:.1}ms");
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Max:   {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Avg:   {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
}

/// Draw pool and cycle counters (right column).
fn draw_pool_column(display: &mut SimulatorDisplay<Rgb888>, metrics: &ProfilingMetrics) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let x = COL2_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frames: {}", metrics.total_frames);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Wraps:  {}", metrics.cycle_wraps);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Retired:{}", metrics.particles_retired);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Spawned:{}", metrics.particles_spawned);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    // Survivors carried across the last wrap with shifted checkpoints
    let mut s: String<20> = String::new();
    let _ = write!(s, "Carry:  {}", metrics.carryover_last);
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Drawn:  {}", metrics.particles_drawn);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

/// Draw the one-line memory summary.
///
/// The pool is the only sizable allocation; the log ring buffer is a
/// fixed-size heapless structure.
fn draw_memory_line(display: &mut SimulatorDisplay<Rgb888>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    let pool_kb = (POOL_SIZE * size_of::<Particle>()) as u32 / 1024;
    let log_bytes = (LOG_BUFFER_SIZE * LOG_LINE_LENGTH) as u32;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Pool: {POOL_SIZE} ptcls ~{pool_kb}KB  Log: {log_bytes}B");
    Text::new(&s, Point::new(COL1_X, MEMORY_Y), style).draw(display).ok();
}

/// Draw the debug log terminal (bottom section).
fn draw_log_terminal(display: &mut SimulatorDisplay<Rgb888>, log: &DebugLog) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 12, y), text_style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }
}

/// Draw a full-width horizontal divider line.
fn draw_horizontal_line(display: &mut SimulatorDisplay<Rgb888>, y: i32) {
    Line::new(Point::new(0, y), Point::new((SCREEN_WIDTH - 1) as i32, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
