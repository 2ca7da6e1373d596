//! One animated dot: spawn geometry, timing checkpoints, and the pure
//! per-tick color/position functions.
//!
//! # Lifecycle
//!
//! A particle is born at a random point on an orbit around the canvas
//! center and drifts toward a nearby random destination. Four tick
//! checkpoints shape its envelope:
//!
//! ```text
//! t0          t1              t2          t3
//! |-- fade-in --|-- plateau ----|-- fade-out --|
//! invisible -> highlight        highlight -> invisible
//! ```
//!
//! Checkpoints are sampled chained: each is drawn uniformly within one
//! `PERIOD` after the previous one, so a life can stretch up to three
//! periods past `t0`. The firmware does this deliberately; it is what
//! gives the idle screen its mix of quick blips and slow drifters.
//!
//! # Purity
//!
//! [`Particle::envelope_color`] and [`Particle::interp_pos`] are pure
//! functions of the tick; [`Particle::update`] only writes the derived
//! `color`/`x`/`y` and never touches the timing fields. The pool shifts
//! checkpoints at cycle wraparound via [`Particle::shift_one_cycle`].

use std::f32::consts::PI;

use rand::Rng;

use crate::colors::{self, Argb, INVISIBLE, PALETTE};
use crate::config::{
    CENTER_X, CENTER_Y, DRIFT_RANGE, PERIOD, SCREEN_HEIGHT, SCREEN_WIDTH, SIZE_DIVISOR, SPAWN_RADIUS_MAX,
    SPAWN_RADIUS_MIN,
};

// =============================================================================
// Particle Entity
// =============================================================================

/// One animated dot, owned exclusively by the pool.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Current interpolated draw X.
    pub x: f32,
    /// Current interpolated draw Y.
    pub y: f32,
    /// Draw radius in pixels, always >= 1.
    pub size: u32,
    /// Current rendered color. Equals [`INVISIBLE`] outside `[t0, t3]`.
    pub color: Argb,

    /// Spawn-time origin X, fixed for the particle's life.
    pub origin_x: f32,
    /// Spawn-time origin Y.
    pub origin_y: f32,
    /// Drift destination X, fixed for the particle's life.
    pub dest_x: f32,
    /// Drift destination Y.
    pub dest_y: f32,

    /// Birth tick.
    pub t0: i32,
    /// End of fade-in.
    pub t1: i32,
    /// Start of fade-out.
    pub t2: i32,
    /// Death tick.
    pub t3: i32,

    /// Plateau color, one of the three [`PALETTE`] entries.
    pub highlight: Argb,
}

// =============================================================================
// Spawn
// =============================================================================

/// Point on the spawn orbit: `center + radius * (cos, sin)` of the angle.
///
/// Split out of [`spawn`] so the geometry is testable without a random
/// source.
pub fn orbit_origin(radius: i32, angle_deg: i32) -> (f32, f32) {
    let theta = angle_deg as f32 * PI / 180.0;
    (
        CENTER_X + radius as f32 * theta.cos(),
        CENTER_Y + radius as f32 * theta.sin(),
    )
}

/// Clamp a coordinate into the drawable range `[0, limit - 1]`.
#[inline]
fn clamp_to_canvas(v: f32, limit: u32) -> f32 {
    v.clamp(0.0, (limit - 1) as f32)
}

/// Spawn one particle with random geometry and timing.
///
/// Always succeeds; the random source is injected so spawning is
/// deterministic under a seeded [`rand::rngs::StdRng`] in tests.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Particle {
    let radius = rng.random_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX);
    let angle_deg = rng.random_range(1..=360);
    let (x0, y0) = orbit_origin(radius, angle_deg);

    // Destination offset is sampled around the truncated origin, matching
    // the firmware's integer arithmetic.
    let x1 = rng.random_range(x0 as i32 - DRIFT_RANGE..=x0 as i32 + DRIFT_RANGE) as f32;
    let y1 = rng.random_range(y0 as i32 - DRIFT_RANGE..=y0 as i32 + DRIFT_RANGE) as f32;

    let x0 = clamp_to_canvas(x0, SCREEN_WIDTH);
    let y0 = clamp_to_canvas(y0, SCREEN_HEIGHT);
    let x1 = clamp_to_canvas(x1, SCREEN_WIDTH);
    let y1 = clamp_to_canvas(y1, SCREEN_HEIGHT);

    let size = rng.random_range(1..=(radius / SIZE_DIVISOR).max(1)) as u32;

    // Chained checkpoints: each within one PERIOD of the previous.
    let t0 = rng.random_range(1..=PERIOD);
    let t1 = rng.random_range(t0..=t0 + PERIOD);
    let t2 = rng.random_range(t1..=t1 + PERIOD);
    let t3 = rng.random_range(t2..=t2 + PERIOD);

    let highlight = PALETTE[rng.random_range(0..PALETTE.len())];

    Particle {
        x: x0,
        y: y0,
        size,
        color: INVISIBLE,
        origin_x: x0,
        origin_y: y0,
        dest_x: x1,
        dest_y: y1,
        t0,
        t1,
        t2,
        t3,
        highlight,
    }
}

// =============================================================================
// Per-Tick Envelope
// =============================================================================

impl Particle {
    /// Color for the given tick: invisible outside `[t0, t3]`, blending
    /// through fade-in and fade-out, solid highlight on the plateau.
    ///
    /// Degenerate intervals (`t1 == t0`, `t2 == t3`) skip their fade rule
    /// entirely, falling through to the plateau; this is the firmware's
    /// division-by-zero guard, not an approximation.
    pub fn envelope_color(&self, tick: i32) -> Argb {
        if tick < self.t0 || tick > self.t3 {
            return INVISIBLE;
        }

        // Fade-in: invisible -> highlight
        if tick <= self.t1 && self.t1 != self.t0 {
            let t = (tick - self.t0) as f32 / (self.t1 - self.t0) as f32;
            return colors::blend(INVISIBLE, self.highlight, t);
        }

        // Fade-out: highlight -> invisible
        if tick >= self.t2 && self.t3 != self.t2 {
            let t = (tick - self.t2) as f32 / (self.t3 - self.t2) as f32;
            return colors::blend(self.highlight, INVISIBLE, t);
        }

        // Plateau
        self.highlight
    }

    /// Position for the given tick: linear from origin at `t0` to
    /// destination at `t3`, clamped flat outside that span.
    pub fn interp_pos(&self, tick: i32) -> (f32, f32) {
        if tick <= self.t0 {
            return (self.origin_x, self.origin_y);
        }
        if tick >= self.t3 {
            return (self.dest_x, self.dest_y);
        }
        let denom = (self.t3 - self.t0).max(1) as f32;
        let t = (tick - self.t0) as f32 / denom;
        (
            self.origin_x + (self.dest_x - self.origin_x) * t,
            self.origin_y + (self.dest_y - self.origin_y) * t,
        )
    }

    /// Recompute the derived color and position for this frame's tick.
    pub fn update(&mut self, tick: i32) {
        self.color = self.envelope_color(tick);
        let (x, y) = self.interp_pos(tick);
        self.x = x;
        self.y = y;
    }

    /// True when this particle's life completed within the current cycle
    /// and it can be retired at wraparound without shifting.
    #[inline]
    pub const fn is_expired(&self) -> bool {
        self.t3 <= PERIOD
    }

    /// Shift all four checkpoints back by one period at cycle wraparound,
    /// moving the particle into the previous cycle's frame of reference.
    ///
    /// Survivors can accumulate deeply negative checkpoints over several
    /// wraps; the firmware behaves the same way and the pool only counts
    /// it (see `RetireStats::carryover`), it does not "fix" it.
    pub const fn shift_one_cycle(&mut self) {
        self.t0 -= PERIOD;
        self.t1 -= PERIOD;
        self.t2 -= PERIOD;
        self.t3 -= PERIOD;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Hand-built particle with explicit checkpoints for envelope tests.
    fn particle_with_times(t0: i32, t1: i32, t2: i32, t3: i32) -> Particle {
        Particle {
            x: 0.0,
            y: 0.0,
            size: 2,
            color: INVISIBLE,
            origin_x: 10.0,
            origin_y: 20.0,
            dest_x: 110.0,
            dest_y: 220.0,
            t0,
            t1,
            t2,
            t3,
            highlight: PALETTE[0],
        }
    }

    // -------------------------------------------------------------------------
    // Spawn Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_orbit_origin_at_90_degrees() {
        // radius=80, angle=90 degrees: straight down from center
        let (x, y) = orbit_origin(80, 90);
        assert!((x - CENTER_X).abs() < 1e-3, "X should be at center, got {x}");
        assert!((y - (CENTER_Y + 80.0)).abs() < 1e-3, "Y should be center+80, got {y}");
    }

    #[test]
    fn test_orbit_origin_at_180_degrees() {
        let (x, y) = orbit_origin(70, 180);
        assert!((x - (CENTER_X - 70.0)).abs() < 1e-3, "X should be center-70, got {x}");
        assert!((y - CENTER_Y).abs() < 1e-2, "Y should be at center, got {y}");
    }

    #[test]
    fn test_spawn_invariants_hold() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = spawn(&mut rng);

            assert!(p.size >= 1, "Size must be at least 1");
            assert!(
                p.size <= (SPAWN_RADIUS_MAX / SIZE_DIVISOR) as u32,
                "Size bounded by radius / divisor"
            );

            for (v, limit) in [
                (p.origin_x, SCREEN_WIDTH),
                (p.dest_x, SCREEN_WIDTH),
                (p.origin_y, SCREEN_HEIGHT),
                (p.dest_y, SCREEN_HEIGHT),
            ] {
                assert!(
                    (0.0..=(limit - 1) as f32).contains(&v),
                    "Endpoint {v} outside canvas bounds"
                );
            }

            assert!(p.t0 >= 1 && p.t0 <= PERIOD, "t0 in [1, PERIOD]");
            assert!(p.t0 <= p.t1 && p.t1 <= p.t2 && p.t2 <= p.t3, "Checkpoints non-decreasing");
            assert!(p.t3 <= p.t0 + 3 * PERIOD, "Checkpoints span at most 3 periods past t0");

            assert_eq!(p.color, INVISIBLE, "Initial color is the invisible sentinel");
            assert_eq!((p.x, p.y), (p.origin_x, p.origin_y), "Initial position is the origin");
            assert!(PALETTE.contains(&p.highlight), "Highlight drawn from the fixed palette");
        }
    }

    #[test]
    fn test_spawn_deterministic_under_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let pa = spawn(&mut a);
        let pb = spawn(&mut b);
        assert_eq!((pa.t0, pa.t1, pa.t2, pa.t3), (pb.t0, pb.t1, pb.t2, pb.t3));
        assert_eq!((pa.origin_x, pa.origin_y), (pb.origin_x, pb.origin_y));
        assert_eq!(pa.highlight, pb.highlight);
    }

    // -------------------------------------------------------------------------
    // Envelope Color Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_envelope_invisible_outside_life() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.envelope_color(0), INVISIBLE, "Before t0: invisible");
        assert_eq!(p.envelope_color(99), INVISIBLE, "Just before t0: invisible");
        assert_eq!(p.envelope_color(401), INVISIBLE, "Just after t3: invisible");
        assert_eq!(p.envelope_color(5000), INVISIBLE, "Far after t3: invisible");
    }

    #[test]
    fn test_envelope_fade_in_completes_at_t1() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.envelope_color(200), p.highlight, "Fade-in reaches the highlight at t1");
    }

    #[test]
    fn test_envelope_fade_in_starts_dark() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.envelope_color(100), INVISIBLE, "Fade-in at t0 is still the sentinel");
    }

    #[test]
    fn test_envelope_plateau_is_highlight() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.envelope_color(250), p.highlight, "Between t1 and t2: solid highlight");
    }

    #[test]
    fn test_envelope_fade_out_ends_dark() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.envelope_color(400), INVISIBLE, "Fade-out at t3 reaches the sentinel");
    }

    #[test]
    fn test_envelope_degenerate_fade_in_skipped() {
        // t0 == t1: fade-in rule must be skipped (no division by zero),
        // falling through to the plateau.
        let p = particle_with_times(10, 10, 50, 60);
        assert_eq!(p.envelope_color(30), p.highlight, "Degenerate fade-in yields plateau color");
        assert_eq!(p.envelope_color(10), p.highlight, "Even at t0==t1 itself");
    }

    #[test]
    fn test_envelope_degenerate_fade_out_skipped() {
        // t2 == t3: fade-out rule must be skipped.
        let p = particle_with_times(10, 20, 60, 60);
        assert_eq!(p.envelope_color(60), p.highlight, "Degenerate fade-out yields plateau color");
    }

    #[test]
    fn test_envelope_negative_checkpoints_after_wrap() {
        // A survivor shifted below zero keeps fading out into the new cycle.
        let mut p = particle_with_times(1000, 1500, 2000, 4000);
        p.shift_one_cycle();
        assert_eq!((p.t0, p.t3), (-1500, 1500), "Checkpoints shift by -PERIOD");
        // tick 1000 is inside the shifted fade-out window [t2=-500, t3=1500]
        let c = p.envelope_color(1000);
        assert_ne!(c, INVISIBLE, "Survivor is still visible in the new cycle");
        assert_ne!(c, p.highlight, "Survivor is mid fade-out, not on plateau");
    }

    // -------------------------------------------------------------------------
    // Position Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_interp_pos_endpoints_exact() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.interp_pos(100), (p.origin_x, p.origin_y), "At t0: exactly the origin");
        assert_eq!(p.interp_pos(400), (p.dest_x, p.dest_y), "At t3: exactly the destination");
    }

    #[test]
    fn test_interp_pos_clamped_outside_life() {
        let p = particle_with_times(100, 200, 300, 400);
        assert_eq!(p.interp_pos(-50), (p.origin_x, p.origin_y), "Before t0: held at origin");
        assert_eq!(p.interp_pos(9999), (p.dest_x, p.dest_y), "After t3: held at destination");
    }

    #[test]
    fn test_interp_pos_midpoint() {
        let p = particle_with_times(0, 100, 200, 300);
        let (x, y) = p.interp_pos(150);
        assert!((x - 60.0).abs() < 1e-3, "X at half-life should be the midpoint, got {x}");
        assert!((y - 120.0).abs() < 1e-3, "Y at half-life should be the midpoint, got {y}");
    }

    #[test]
    fn test_interp_pos_zero_length_life() {
        // t0 == t3: denominator guard, position snaps to origin (tick <= t0
        // branch wins at the single life tick).
        let p = particle_with_times(100, 100, 100, 100);
        assert_eq!(p.interp_pos(100), (p.origin_x, p.origin_y));
    }

    // -------------------------------------------------------------------------
    // Update Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_writes_derived_state_only() {
        let mut p = particle_with_times(100, 200, 300, 400);
        let times = (p.t0, p.t1, p.t2, p.t3);
        p.update(250);
        assert_eq!(p.color, p.highlight, "Update derives the plateau color");
        assert_eq!((p.t0, p.t1, p.t2, p.t3), times, "Update must not touch timing fields");
        let expected = p.interp_pos(250);
        assert_eq!((p.x, p.y), expected, "Update derives the interpolated position");
    }

    #[test]
    fn test_is_expired_boundary() {
        assert!(particle_with_times(1, 2, 3, PERIOD).is_expired(), "t3 == PERIOD is expired");
        assert!(!particle_with_times(1, 2, 3, PERIOD + 1).is_expired(), "t3 > PERIOD survives");
    }
}
