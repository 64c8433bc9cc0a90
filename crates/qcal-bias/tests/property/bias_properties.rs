use qcal_bias::compute_collapse_bias;
use qcal_bias::distribution::{normalize, unnormalized_weights};
use qcal_bias::transform::collapse_bias;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ── Theoretical bias bounded 0.0–2.0 ────────────────────────────────────

proptest! {
    #[test]
    fn theoretical_bias_bounded(
        q in 0.0f64..=1.0,
        k in 0.0f64..=20.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = compute_collapse_bias(q, k, 16, &mut rng).unwrap();
        prop_assert!(
            (0.0..=2.0).contains(&result.theoretical_bias),
            "Out of bounds: {}",
            result.theoretical_bias
        );
    }
}

// ── Probabilities form a distribution ───────────────────────────────────

proptest! {
    #[test]
    fn probabilities_sum_to_one(bias in 0.0f64..=2.0) {
        let weights = unnormalized_weights(bias);
        let p = normalize(&weights).unwrap();
        let sum: f64 = p.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum {} for bias {}", sum, bias);
        prop_assert!(p.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

// ── Clamped bias never exceeds the range for any finite k ───────────────

proptest! {
    #[test]
    fn clamped_bias_bounded_for_any_k(q in 0.0f64..=1.0, k in -50.0f64..50.0) {
        let b = collapse_bias(q, k);
        prop_assert!((0.0..=2.0).contains(&b), "bias {} for q={} k={}", b, q, k);
    }
}

// ── Sampled statistics within face range ────────────────────────────────

proptest! {
    #[test]
    fn sampled_statistics_bounded(
        q in 0.0f64..=1.0,
        n in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = compute_collapse_bias(q, 2.8, n, &mut rng).unwrap();
        prop_assert!((1.0..=6.0).contains(&result.mean_dice));
        prop_assert!((0.0..=1.0).contains(&result.favorable_rate));
    }
}
