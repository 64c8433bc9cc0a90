use qcal_core::models::{ManualInput, QState};
use qcal_score::{classify, compute_score};
use proptest::prelude::*;

// ── Q score bounded for in-domain inputs ────────────────────────────────

proptest! {
    #[test]
    fn q_score_bounded_in_domain(
        mood in 0.0f64..=10.0,
        stress in 0.0f64..=10.0,
        baseline in 0.0f64..=1.0,
    ) {
        let result = compute_score(&ManualInput::new(mood, stress), baseline);
        prop_assert!(
            (0.0..=1.0).contains(&result.q_score),
            "Out of bounds: {}",
            result.q_score
        );
        prop_assert!((0.0..=1.0).contains(&result.sync_eeg));
        prop_assert!((0.0..=1.0).contains(&result.sync_hrv));
    }
}

// ── Q score bounded for any finite input ────────────────────────────────

proptest! {
    #[test]
    fn q_score_bounded_for_any_finite_input(
        mood in -1.0e6f64..1.0e6,
        stress in -1.0e6f64..1.0e6,
        baseline in -1.0e3f64..1.0e3,
    ) {
        let result = compute_score(&ManualInput::new(mood, stress), baseline);
        prop_assert!((0.0..=1.0).contains(&result.q_score), "Out of bounds: {}", result.q_score);
    }
}

// ── Fear density bounded when baseline in domain ────────────────────────

proptest! {
    #[test]
    fn fear_density_in_unit_interval_for_in_domain_baseline(
        mood in -50.0f64..50.0,
        stress in -50.0f64..50.0,
        baseline in 0.0f64..=1.0,
    ) {
        let result = compute_score(&ManualInput::new(mood, stress), baseline);
        prop_assert!(
            (0.0..=1.0).contains(&result.fear_density),
            "fear density {} for baseline {}",
            result.fear_density,
            baseline
        );
    }
}

// ── Pure: identical inputs, identical outputs ───────────────────────────

proptest! {
    #[test]
    fn compute_score_is_idempotent(
        mood in 0.0f64..=10.0,
        stress in 0.0f64..=10.0,
        baseline in 0.0f64..=1.0,
    ) {
        let input = ManualInput::new(mood, stress);
        prop_assert_eq!(compute_score(&input, baseline), compute_score(&input, baseline));
    }
}

// ── Classification is monotone in the score ─────────────────────────────

fn rank(state: QState) -> u8 {
    match state {
        QState::Tank => 0,
        QState::Neutral => 1,
        QState::Ocean => 2,
    }
}

proptest! {
    #[test]
    fn classify_is_monotone(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        tank in 0.0f64..=0.5,
        ocean in 0.5f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(lo, tank, ocean)) <= rank(classify(hi, tank, ocean)));
    }
}
