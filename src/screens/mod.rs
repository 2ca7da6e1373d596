//! Full-screen pages outside the animation itself.
//!
//! - **Debug Page** ([`debug`]): profiling metrics, pool/cycle counters,
//!   and the debug log terminal (toggled with `D` at runtime)

mod debug;

pub use debug::draw_debug_page;
