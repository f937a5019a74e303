use super::*;

#[test]
fn same_seed_same_stream() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(42);
    for _ in 0..100 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let a_draws: Vec<u64> = (0..8).map(|_| a.next_f64().to_bits()).collect();
    let b_draws: Vec<u64> = (0..8).map(|_| b.next_f64().to_bits()).collect();
    assert_ne!(a_draws, b_draws);
}

#[test]
fn zero_seed_is_usable() {
    let mut rng = SeededRng::new(0);
    let draws: Vec<f64> = (0..8).map(|_| rng.next_f64()).collect();
    assert!(draws.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn next_f64_stays_in_unit_interval() {
    let mut rng = SeededRng::new(7);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn uniform_f64_respects_bounds() {
    let mut rng = SeededRng::new(3);
    for _ in 0..10_000 {
        let v = rng.uniform_f64(-2.0, -0.5);
        assert!((-2.0..-0.5).contains(&v));
    }
}

#[test]
fn uniform_i32_is_inclusive_and_covers_range() {
    let mut rng = SeededRng::new(11);
    let mut seen = [false; 11];
    for _ in 0..10_000 {
        let v = rng.uniform_i32(-5, 5);
        assert!((-5..=5).contains(&v));
        seen[(v + 5) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "every value in [-5, 5] should occur");
}

#[test]
fn name_seed_is_stable_and_name_sensitive() {
    assert_eq!(seed_from_name("Amy"), seed_from_name("Amy"));
    assert_ne!(seed_from_name("Amy"), seed_from_name("amy"));
    assert_ne!(seed_from_name("Amy"), seed_from_name("Bob"));
}
