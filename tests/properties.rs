use std::collections::HashSet;

use pairbonk::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -100.0f32..100.0
}

fn particles(max: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>, Vec<f32>)> {
    (0..max).prop_flat_map(|n| {
        (
            prop::collection::vec(coord(), n),
            prop::collection::vec(coord(), n),
            prop::collection::vec(0.0f32..20.0, n),
        )
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        x1 in coord(), y1 in coord(), r1 in 0.0f32..50.0,
        x2 in coord(), y2 in coord(), r2 in 0.0f32..50.0
    ) {
        prop_assert_eq!(
            pairwise_overlap(x1, y1, r1, x2, y2, r2),
            pairwise_overlap(x2, y2, r2, x1, y1, r1)
        );
    }

    #[test]
    fn pairs_are_in_range_unique_and_ordered((x, y, r) in particles(48)) {
        let n = x.len();
        let pairs = detect_collisions(n, &x, &y, &r).unwrap();
        let mut seen = HashSet::new();
        for p in &pairs {
            prop_assert!(p.i < p.j);
            prop_assert!((p.j as usize) < n);
            prop_assert!(seen.insert((p.i, p.j)));
        }
        prop_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pairs_match_exhaustive_check((x, y, r) in particles(32)) {
        let n = x.len();
        let pairs = detect_collisions(n, &x, &y, &r).unwrap();
        let mut expected = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if pairwise_overlap(x[i], y[i], r[i], x[j], y[j], r[j]) {
                    expected.push(CollisionPair { i: i as u32, j: j as u32 });
                }
            }
        }
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn pair_tests_are_quadratic_regardless_of_hits((x, y, r) in particles(64)) {
        let n = x.len();
        let mut d = CollisionDetector::default();
        d.detect(ParticleSet::from_slices(&x, &y, &r).unwrap()).unwrap();
        prop_assert_eq!(d.stats().pair_tests, n * n.saturating_sub(1) / 2);
        prop_assert_eq!(d.stats().pair_tests, max_pair_count(n));
    }
}
