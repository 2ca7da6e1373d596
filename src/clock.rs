//! Sawtooth cycle clock driving the particle timing domain.
//!
//! The firmware advances a 15-bit phase counter from 0 to [`PHASE_MAX`]
//! over one cycle, then wraps back to 0. Every particle checkpoint is
//! expressed in ticks (`[0, PERIOD]`), so the raw phase is rescaled onto
//! the tick domain each frame.
//!
//! # Wraparound
//!
//! A wrap is detected purely by comparing consecutive phase samples: if
//! the new phase is below the previous one, the sawtooth has restarted.
//! There is no separate reset timer. The pool's retirement pass keys off
//! the `wrapped` flag and therefore runs at most once per wrap event.
//!
//! # Testability
//!
//! The phase/tick math is kept in pure functions of elapsed time so the
//! core can be exercised without a live display or real clock;
//! [`CycleClock`] only adds the `Instant` anchor and the previous-phase
//! memory needed for wrap detection.

use std::time::{Duration, Instant};

use crate::config::{PERIOD, PHASE_MAX};

// =============================================================================
// Pure Phase Math
// =============================================================================

/// Map elapsed wall-clock time onto the sawtooth phase `[0, PHASE_MAX]`.
///
/// `phase = floor((elapsed mod cycle_length) / cycle_length * PHASE_MAX)`.
pub fn phase_from_elapsed(elapsed: Duration, cycle_length: Duration) -> i32 {
    let cycle = cycle_length.as_secs_f64();
    let frac = (elapsed.as_secs_f64() % cycle) / cycle;
    (frac * f64::from(PHASE_MAX)) as i32
}

/// Rescale a raw phase value onto the particle tick domain `[0, PERIOD]`.
#[inline]
pub fn phase_to_tick(phase: i32) -> i32 {
    (f64::from(PERIOD) * f64::from(phase) / f64::from(PHASE_MAX)) as i32
}

// =============================================================================
// Cycle Clock
// =============================================================================

/// One clock reading: raw phase, rescaled tick, and the wrap flag.
#[derive(Clone, Copy, Debug)]
pub struct ClockSample {
    /// Raw sawtooth phase in `[0, PHASE_MAX]`.
    pub phase: i32,
    /// Phase rescaled onto the particle timing domain `[0, PERIOD]`.
    pub tick: i32,
    /// True exactly when this sample's phase is below the previous one,
    /// i.e. a new animation cycle has begun since the last sample.
    pub wrapped: bool,
}

/// Process-wide clock state: start anchor plus previous-phase memory.
///
/// Create once at startup and call [`CycleClock::sample`] once per frame.
pub struct CycleClock {
    start: Instant,
    prev_phase: i32,
    cycle_length: Duration,
}

impl CycleClock {
    /// Create a clock starting at phase 0.
    pub fn new(cycle_length: Duration) -> Self {
        Self {
            start: Instant::now(),
            prev_phase: 0,
            cycle_length,
        }
    }

    /// Read the current phase and tick, detecting wraparound against the
    /// previous sample.
    pub fn sample(&mut self) -> ClockSample {
        self.sample_at(self.start.elapsed())
    }

    /// Sample at an explicit elapsed time. Split out from [`Self::sample`]
    /// so wrap detection is testable with synthetic times.
    pub fn sample_at(&mut self, elapsed: Duration) -> ClockSample {
        let phase = phase_from_elapsed(elapsed, self.cycle_length);
        let wrapped = phase < self.prev_phase;
        self.prev_phase = phase;
        ClockSample {
            phase,
            tick: phase_to_tick(phase),
            wrapped,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
