use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn forked_streams_differ() {
    let mut a = Rng64::fork(7, 1);
    let mut b = Rng64::fork(7, 2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn range_stays_in_bounds() {
    let mut rng = Rng64::new(99);
    for _ in 0..1000 {
        let v = rng.range_f64(1200.0, 1800.0);
        assert!((1200.0..1800.0).contains(&v));
    }
    assert_eq!(rng.range_f64(5.0, 5.0), 5.0);
}

#[test]
fn index_is_bounded() {
    let mut rng = Rng64::new(1);
    for _ in 0..100 {
        assert!(rng.index(7) < 7);
    }
    assert_eq!(rng.index(0), 0);
}
