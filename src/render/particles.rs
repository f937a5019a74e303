use crate::foundation::core::{Point, Vec2};
use crate::foundation::rng::SeededRng;
use smallvec::SmallVec;

/// Particles spawned at the pen tip every frame.
pub(crate) const SPAWN_PER_FRAME: usize = 5;
/// Spawn jitter around the pen tip, inclusive, in integer pixels.
pub(crate) const JITTER_PX: i32 = 5;
/// Inclusive lifetime range in frames.
pub(crate) const LIFE_MIN: i32 = 10;
pub(crate) const LIFE_MAX: i32 = 20;

/// Steady-state population ceiling: `SPAWN_PER_FRAME * LIFE_MAX`.
pub const MAX_POPULATION: usize = SPAWN_PER_FRAME * LIFE_MAX as usize;

#[derive(Clone, Copy, Debug)]
struct Particle {
    pos: Point,
    vel: Vec2,
    life: i32,
}

/// Deterministic ink particle simulation.
///
/// Per frame: spawn a fixed burst at the pen tip, report the draw position of
/// every live particle (spawns included), then advance positions by velocity,
/// decrement lifetimes, and prune the expired. A particle whose lifetime hits
/// zero on frame `i` is drawn on frame `i` and gone from frame `i+1`.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: SeededRng,
    spawned_total: u64,
}

impl ParticleSystem {
    /// Create a simulation seeded for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_POPULATION),
            rng: SeededRng::new(seed),
            spawned_total: 0,
        }
    }

    /// Number of currently live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Return `true` when no particles are live.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total particles spawned since construction.
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Run one frame of the simulation: spawn at `pen`, collect draw
    /// positions, advance, prune.
    pub fn emit_and_step(&mut self, pen: Point) -> Vec<Point> {
        let mut burst = SmallVec::<[Particle; SPAWN_PER_FRAME]>::new();
        for _ in 0..SPAWN_PER_FRAME {
            // Draw order matters for determinism: jitter x, jitter y,
            // velocity x, velocity y, lifetime.
            let jx = f64::from(self.rng.uniform_i32(-JITTER_PX, JITTER_PX));
            let jy = f64::from(self.rng.uniform_i32(-JITTER_PX, JITTER_PX));
            let vx = self.rng.uniform_f64(-1.0, 1.0);
            let vy = self.rng.uniform_f64(-2.0, -0.5);
            let life = self.rng.uniform_i32(LIFE_MIN, LIFE_MAX);
            burst.push(Particle {
                pos: Point::new(pen.x + jx, pen.y + jy),
                vel: Vec2::new(vx, vy),
                life,
            });
        }
        self.spawned_total += burst.len() as u64;
        self.particles.extend(burst);

        let dots: Vec<Point> = self.particles.iter().map(|p| p.pos).collect();

        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= 1;
        }
        self.particles.retain(|p| p.life > 0);

        dots
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/particles.rs"]
mod tests;
