use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn next_f64_stays_in_unit_interval() {
    let mut rng = Rng64::new(7);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn uniform_in_respects_bounds() {
    let mut rng = Rng64::new(99);
    for _ in 0..10_000 {
        let v = rng.uniform_in(-350.0, 350.0);
        assert!((-350.0..350.0).contains(&v));
    }
}

#[test]
fn int_inclusive_hits_both_ends() {
    let mut rng = Rng64::new(5);
    let mut saw_lo = false;
    let mut saw_hi = false;
    for _ in 0..10_000 {
        let v = rng.int_inclusive(-2, 2);
        assert!((-2..=2).contains(&v));
        saw_lo |= v == -2;
        saw_hi |= v == 2;
    }
    assert!(saw_lo && saw_hi);
}

#[test]
fn pick_only_returns_given_options() {
    let mut rng = Rng64::new(11);
    let options = [-80.0, -60.0, 60.0, 80.0];
    for _ in 0..1000 {
        let v = rng.pick(&options);
        assert!(options.contains(&v));
    }
}
