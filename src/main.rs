// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, f64->i32 casts for pixel/tick math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Idle-screen animation replica of the UniFi LCM panel.
//!
//! A pool of 250 soft circular particles orbits the canvas center: each
//! fades in from black, drifts toward a nearby point, plateaus at one of
//! three firmware palette colors, fades back out, and respawns. All
//! timing is driven by a 15-bit sawtooth phase counter rescaled onto a
//! 2500-tick cycle, reproducing the reverse-engineered firmware
//! behavior (see [`clock`], [`particle`], [`pool`]).
//!
//! # Frame Model
//!
//! Single-threaded, frame-stepped: read clock -> detect wraparound ->
//! retire/replenish pool -> update every particle -> composite into the
//! framebuffer -> present -> sleep to the 60 FPS budget. The only
//! blocking point is the end-of-frame pacing sleep, and the only
//! cancellation point is the per-frame event pump.
//!
//! # Controls (Simulator Mode)
//!
//! | Key   | Action                                      |
//! |-------|---------------------------------------------|
//! | `T`   | Toggle trail mode (subtractive frame fade)  |
//! | `F`   | Toggle FPS overlay on/off                   |
//! | `D`   | Switch between animation and debug page     |
//! | `Esc` | Quit                                        |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod clock;
mod colors;
mod config;
mod pages;
mod particle;
mod pool;
mod profiling;
mod render;
mod screens;
mod styles;
mod widgets;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rand::SeedableRng;
use rand::rngs::StdRng;

use clock::CycleClock;
use colors::{BLACK, INVISIBLE};
use config::{CYCLE_LENGTH, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TRAIL_FADE};
use pages::Page;
use pool::ParticlePool;
use profiling::{DebugLog, ProfilingMetrics};
use render::{FrameCanvas, Popup};
use screens::draw_debug_page;
use widgets::{draw_fps_overlay, draw_fps_toggle_popup, draw_trails_popup};

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("UniFi LCM Screensaver", &output_settings);

    // Initial clear so the event pump has a frame to show
    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut rng = StdRng::from_os_rng();
    let mut pool = ParticlePool::new(&mut rng);
    let mut cycle_clock = CycleClock::new(CYCLE_LENGTH);
    let mut canvas = FrameCanvas::new();

    // Trail mode: subtractive fade instead of a hard clear (T key toggles)
    let mut trails = false;

    // FPS counter state (F key toggles the overlay)
    let mut show_fps = false;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Active popup (only one at a time, encapsulates kind + start time)
    let mut active_popup: Option<Popup> = None;

    // Page navigation state (animation is default, D key toggles to Debug)
    let mut current_page = Page::default();

    // Profiling metrics and debug log
    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("Screensaver started");

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        // T: toggle trail mode (only visible on the animation page)
                        Keycode::T => {
                            trails = !trails;
                            active_popup = Some(Popup::Trails(Instant::now()));
                            debug_log.push(if trails { "Trails: ON" } else { "Trails: OFF" });
                        }
                        // F: toggle FPS overlay
                        Keycode::F => {
                            show_fps = !show_fps;
                            active_popup = Some(Popup::Fps(Instant::now()));
                            debug_log.push(if show_fps { "FPS: ON" } else { "FPS: OFF" });
                        }
                        // D: switch page (animation <-> debug)
                        Keycode::D => {
                            current_page = current_page.toggle();
                            active_popup = None; // Cancel popup when switching pages
                            debug_log.push(match current_page {
                                Page::Screensaver => "Page: Screensaver",
                                Page::Debug => "Page: Debug",
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Expire the active popup before drawing this frame
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        // ======================================================================
        // Advance the Cycle Clock and Maintain the Pool
        // ======================================================================

        let sample = cycle_clock.sample();

        // Wraparound: retirement pass runs exactly once per phase decrease
        if sample.wrapped {
            let stats = pool.retire_expired();
            metrics.record_wrap(stats.retired, stats.carryover);
            let mut msg: heapless::String<48> = heapless::String::new();
            let _ = write!(msg, "Wrap: -{} +{} carried", stats.retired, stats.carryover);
            debug_log.push(&msg);
        }

        // Top the pool back up to capacity (every frame, not just on wrap)
        metrics.particles_spawned += pool.replenish(&mut rng) as u64;

        // Derive every particle's color and position from this frame's tick
        pool.update(sample.tick);
        metrics.particles_drawn = pool.visible_count() as u32;

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        match current_page {
            Page::Screensaver => {
                if trails {
                    canvas.fade(TRAIL_FADE);
                } else {
                    canvas.clear();
                }

                // Composite every visible particle; invisible-sentinel
                // particles are simply not drawn.
                for p in pool.iter() {
                    if p.color != INVISIBLE {
                        canvas.blend_circle(p.x, p.y, p.size.max(1), p.color);
                    }
                }

                canvas.present(&mut display);

                if show_fps {
                    draw_fps_overlay(&mut display, current_fps);
                }

                // Popup drawn last so it sits on top of the particles
                if let Some(ref popup) = active_popup {
                    match popup {
                        Popup::Trails(_) => draw_trails_popup(&mut display, trails),
                        Popup::Fps(_) => draw_fps_toggle_popup(&mut display, show_fps),
                    }
                }
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &debug_log, current_fps);
            }
        }

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let render_time = frame_start.elapsed();

        window.update(&display);

        // Sleep to maintain the target frame rate (~60 FPS)
        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME - pre_sleep);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
