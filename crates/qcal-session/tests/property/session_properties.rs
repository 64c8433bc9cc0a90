use qcal_core::config::QcalConfig;
use qcal_core::models::ManualInput;
use qcal_session::CalibrationSession;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn arb_input() -> impl Strategy<Value = ManualInput> {
    (0.0f64..=10.0, 0.0f64..=10.0).prop_map(|(mood, stress)| ManualInput::new(mood, stress))
}

// ── Every recorded interval stays within engine bounds ──────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn full_session_measurements_bounded(
        baseline in 0.0f64..=1.0,
        inputs in prop::collection::vec(arb_input(), 10),
        seed in any::<u64>(),
    ) {
        let mut config = QcalConfig::default();
        config.engine.n_trials = 50;
        let mut session = CalibrationSession::start("prop", baseline, &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut summary = None;
        for input in inputs {
            let outcome = session.record_interval(input, &mut rng).unwrap();
            let m = &outcome.measurement;
            prop_assert!((0.0..=1.0).contains(&m.q_score));
            prop_assert!((0.0..=2.0).contains(&m.collapse_bias));
            prop_assert!((1.0..=6.0).contains(&m.mean_dice));
            summary = outcome.summary;
        }

        let summary = summary.expect("ten intervals complete a default session");
        prop_assert!((0.0..=2.0).contains(&summary.avg_collapse_bias));
        prop_assert!((summary.q_improvement - (summary.final_q - baseline)).abs() < 1e-12);
    }
}
