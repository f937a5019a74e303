use super::*;

const PEN: Point = Point::new(100.0, 200.0);

#[test]
fn first_frame_draws_exactly_one_burst() {
    let mut sim = ParticleSystem::with_seed(1);
    let dots = sim.emit_and_step(PEN);
    assert_eq!(dots.len(), SPAWN_PER_FRAME);
    assert_eq!(sim.spawned_total(), SPAWN_PER_FRAME as u64);
}

#[test]
fn spawns_are_jittered_around_the_pen() {
    let mut sim = ParticleSystem::with_seed(2);
    let dots = sim.emit_and_step(PEN);
    for dot in dots {
        assert!((dot.x - PEN.x).abs() <= f64::from(JITTER_PX));
        assert!((dot.y - PEN.y).abs() <= f64::from(JITTER_PX));
    }
}

#[test]
fn population_grows_then_saturates_below_cap() {
    let mut sim = ParticleSystem::with_seed(3);
    let mut peak = 0;
    for frame in 0..200 {
        let dots = sim.emit_and_step(PEN);
        peak = peak.max(dots.len());
        assert!(
            dots.len() <= MAX_POPULATION,
            "frame {frame}: {} live particles",
            dots.len()
        );
    }
    // After warmup the population holds between 5*10 and 5*20 live particles.
    assert!(peak >= SPAWN_PER_FRAME * LIFE_MIN as usize);
    assert_eq!(sim.spawned_total(), 200 * SPAWN_PER_FRAME as u64);
}

#[test]
fn lifetimes_prune_after_pen_stops() {
    let mut sim = ParticleSystem::with_seed(4);
    sim.emit_and_step(PEN);
    // Live particles decay only via their lifetime; stepping with further
    // spawns keeps the count bounded by lifetime, so after the longest
    // possible lifetime the first burst is gone.
    for _ in 0..LIFE_MAX {
        sim.emit_and_step(PEN);
    }
    assert!(sim.len() < MAX_POPULATION);
    assert!(!sim.is_empty());
}

#[test]
fn same_seed_reproduces_dots_exactly() {
    let mut a = ParticleSystem::with_seed(42);
    let mut b = ParticleSystem::with_seed(42);
    for _ in 0..50 {
        assert_eq!(a.emit_and_step(PEN), b.emit_and_step(PEN));
    }
}

#[test]
fn different_seeds_give_different_dots() {
    let mut a = ParticleSystem::with_seed(1);
    let mut b = ParticleSystem::with_seed(2);
    assert_ne!(a.emit_and_step(PEN), b.emit_and_step(PEN));
}

#[test]
fn particles_are_drawn_for_exactly_their_lifetime() {
    let seed = 9;

    // Mirror the simulation's draw order to recover the first burst's
    // lifetimes: jitter x, jitter y, velocity x, velocity y, lifetime.
    let mut rng = SeededRng::new(seed);
    let mut lives = Vec::new();
    for _ in 0..SPAWN_PER_FRAME {
        rng.uniform_i32(-JITTER_PX, JITTER_PX);
        rng.uniform_i32(-JITTER_PX, JITTER_PX);
        rng.uniform_f64(-1.0, 1.0);
        rng.uniform_f64(-2.0, -0.5);
        lives.push(rng.uniform_i32(LIFE_MIN, LIFE_MAX));
    }
    assert!(lives.iter().all(|&l| (LIFE_MIN..=LIFE_MAX).contains(&l)));

    // Spawn the tracked burst at the pen, then move the pen far away so
    // later bursts are separable by position. Drift over LIFE_MAX frames is
    // under 20 px, far less than the separation.
    let mut sim = ParticleSystem::with_seed(seed);
    let far = Point::new(PEN.x + 10_000.0, PEN.y);
    let mut near_counts = Vec::new();
    for frame in 0..=LIFE_MAX as usize {
        let pen = if frame == 0 { PEN } else { far };
        let dots = sim.emit_and_step(pen);
        let near = dots.iter().filter(|p| p.x < PEN.x + 500.0).count();
        // A particle with lifetime L born at frame 0 is drawn in frames
        // 0..=L-1 and absent from frame L onward.
        let expected = lives.iter().filter(|&&l| l > frame as i32).count();
        assert_eq!(near, expected, "frame {frame}");
        near_counts.push(near);
    }

    // Lifetime bounds: the full burst is visible through frame LIFE_MIN - 1
    // and gone by frame LIFE_MAX.
    assert!(near_counts[..LIFE_MIN as usize]
        .iter()
        .all(|&n| n == SPAWN_PER_FRAME));
    assert_eq!(near_counts[LIFE_MAX as usize], 0);
}

#[test]
fn particles_drift_up_between_frames() {
    let mut sim = ParticleSystem::with_seed(5);
    let first = sim.emit_and_step(PEN);
    // Second frame: same five particles (moved) plus a fresh burst. Velocity
    // y is always negative, so the survivors sit above their spawn points.
    let second = sim.emit_and_step(Point::new(PEN.x + 1000.0, PEN.y));
    let survivors: Vec<Point> = second
        .iter()
        .copied()
        .filter(|p| p.x < PEN.x + 500.0)
        .collect();
    assert_eq!(survivors.len(), first.len());
    for (before, after) in first.iter().zip(survivors.iter()) {
        assert!(after.y < before.y);
        assert!((after.x - before.x).abs() <= 1.0);
    }
}
