//! Fixed-capacity particle pool: retirement at cycle wraparound and
//! per-frame replenishment.
//!
//! The pool owns all particles by value. Ordering only affects draw call
//! sequencing, never correctness, so retirement uses a simple `retain`
//! pass.
//!
//! # Wraparound Retirement
//!
//! When the caller observes a phase wrap (see [`crate::clock`]), it runs
//! [`ParticlePool::retire_expired`] exactly once. Particles whose `t3`
//! falls within the completed cycle are dropped; every survivor has its
//! checkpoints shifted back one period so it keeps fading out into the
//! new cycle. Because spawn timing can span up to three periods, a
//! particle may survive several wraps before expiring. The firmware does
//! this too; [`RetireStats`] surfaces how often it happens without
//! changing the policy.
//!
//! # Replenishment
//!
//! [`ParticlePool::replenish`] runs every frame and tops the pool back up
//! to exactly [`POOL_SIZE`], so fresh particles trickle in as retired
//! ones leave.

use rand::Rng;

use crate::colors::INVISIBLE;
use crate::config::POOL_SIZE;
use crate::particle::{self, Particle};

// =============================================================================
// Retirement Bookkeeping
// =============================================================================

/// Outcome of one wraparound retirement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetireStats {
    /// Particles dropped because their life completed within the cycle.
    pub retired: usize,
    /// Survivors shifted into the new cycle's frame of reference.
    pub carryover: usize,
}

// =============================================================================
// Particle Pool
// =============================================================================

/// Fixed-capacity collection of particles, created full at startup.
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Create a pool filled to [`POOL_SIZE`] with freshly spawned particles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = Self {
            particles: Vec::with_capacity(POOL_SIZE),
        };
        pool.replenish(rng);
        pool
    }

    /// Wraparound retirement pass. Call at most once per detected phase
    /// wrap: drops expired particles and shifts every survivor's
    /// checkpoints back one period.
    pub fn retire_expired(&mut self) -> RetireStats {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            if p.is_expired() {
                false
            } else {
                p.shift_one_cycle();
                true
            }
        });
        RetireStats {
            retired: before - self.particles.len(),
            carryover: self.particles.len(),
        }
    }

    /// Top the pool back up to exactly [`POOL_SIZE`]. Runs every frame;
    /// returns the number of particles spawned.
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let missing = POOL_SIZE - self.particles.len();
        for _ in 0..missing {
            self.particles.push(particle::spawn(rng));
        }
        missing
    }

    /// Recompute every particle's color and position for this frame's tick.
    pub fn update(&mut self, tick: i32) {
        for p in &mut self.particles {
            p.update(tick);
        }
    }

    /// Iterate particles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Particles whose current color is not the invisible sentinel.
    pub fn visible_count(&self) -> usize {
        self.particles.iter().filter(|p| p.color != INVISIBLE).count()
    }

    /// Current pool population.
    #[allow(dead_code)]
    #[inline]
    pub const fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the pool holds no particles (only possible mid-frame,
    /// between retirement and replenish).
    #[allow(dead_code)]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.particles.is_empty()
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

    use crate::config::PERIOD;

    #[test]
    fn test_pool_starts_at_capacity() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = ParticlePool::new(&mut rng);
        assert_eq!(pool.len(), POOL_SIZE, "Pool must be created full");
    }

    #[test]
    fn test_replenish_restores_capacity() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = ParticlePool::new(&mut rng);
        pool.retire_expired();
        let deficit = POOL_SIZE - pool.len();
        let spawned = pool.replenish(&mut rng);
        assert_eq!(pool.len(), POOL_SIZE, "Replenish must restore exact capacity");
        assert_eq!(spawned, deficit, "Spawn count matches the deficit");
    }

    #[test]
    fn test_replenish_is_noop_at_capacity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = ParticlePool::new(&mut rng);
        assert_eq!(pool.replenish(&mut rng), 0, "Full pool spawns nothing");
        assert_eq!(pool.len(), POOL_SIZE);
    }

    #[test]
    fn test_retire_drops_expired_and_shifts_survivors() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = ParticlePool::new(&mut rng);

        let expired_before = pool.iter().filter(|p| p.is_expired()).count();
        let survivor_t3: Vec<i32> = pool.iter().filter(|p| !p.is_expired()).map(|p| p.t3).collect();

        let stats = pool.retire_expired();

        assert_eq!(stats.retired, expired_before, "Every expired particle is dropped");
        assert_eq!(stats.carryover, survivor_t3.len(), "Every survivor is carried over");
        assert_eq!(pool.len(), stats.carryover);

        for (p, old_t3) in pool.iter().zip(survivor_t3) {
            assert_eq!(p.t3, old_t3 - PERIOD, "Survivor checkpoints shift by -PERIOD");
        }
    }

    #[test]
    fn test_retire_twice_drains_long_lives() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = ParticlePool::new(&mut rng);

        // Two consecutive retirement passes shift survivors twice; anything
        // spawned with t3 <= 3 * PERIOD is gone after at most three passes.
        for _ in 0..4 {
            pool.retire_expired();
        }
        // t0 <= PERIOD and t3 <= t0 + 3 * PERIOD, so after four shifts
        // every original particle has expired.
        assert_eq!(pool.len(), 0, "All spawn-time lives fit within four cycles");
    }

    #[test]
    fn test_update_sets_visible_particles() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut pool = ParticlePool::new(&mut rng);

        // Mid-cycle tick: with 250 particles and t0 uniform in [1, PERIOD],
        // a fair share must be alive and past the sentinel.
        pool.update(PERIOD / 2);
        assert!(pool.visible_count() > 0, "Mid-cycle update should light up some particles");

        // All positions must remain on canvas (endpoints are clamped and
        // interpolation is convex).
        for p in pool.iter() {
            assert!(p.x >= 0.0 && p.y >= 0.0, "Interpolated position stays on canvas");
        }
    }

    #[test]
    fn test_frame_cycle_preserves_capacity() {
        // One simulated wrap frame: retire, replenish, update.
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = ParticlePool::new(&mut rng);

        pool.retire_expired();
        pool.replenish(&mut rng);
        pool.update(0);

        assert_eq!(pool.len(), POOL_SIZE, "Pool is back at capacity after the wrap frame");
    }
}
