use seeker_core::{DeterministicRng, SplitMix64};

#[test]
fn same_seed_same_sequence() {
    let mut a = SplitMix64::new(42);
    let mut b = SplitMix64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = SplitMix64::new(7);
    for bound in [1u32, 2, 3, 10, 200] {
        for _ in 0..200 {
            assert!(rng.next_below(bound) < bound);
        }
    }
    assert_eq!(rng.next_below(0), 0);
}

#[test]
fn pick_handles_empty_slices() {
    let mut rng = SplitMix64::new(1);
    let empty: [u8; 0] = [];
    assert_eq!(rng.pick(&empty), None);
    assert!(rng.pick(&[1, 2, 3]).is_some());
}
