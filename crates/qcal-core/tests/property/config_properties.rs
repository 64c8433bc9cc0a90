use proptest::prelude::*;
use qcal_core::config::{QcalConfig, SessionConfig, ThresholdConfig};

// ── Thresholds accept exactly the ordered pairs in [0, 1] ───────────────

proptest! {
    #[test]
    fn thresholds_valid_iff_ordered_in_unit_interval(
        tank in -0.5f64..=1.5,
        ocean in -0.5f64..=1.5,
    ) {
        let thresholds = ThresholdConfig {
            ocean_threshold: ocean,
            tank_threshold: tank,
        };
        let expected = (0.0..=1.0).contains(&tank)
            && (0.0..=1.0).contains(&ocean)
            && tank <= ocean;
        prop_assert_eq!(thresholds.validate().is_ok(), expected);
    }
}

// ── Valid configs survive a TOML round trip ─────────────────────────────

proptest! {
    #[test]
    fn valid_config_roundtrips_through_toml(
        k in -10.0f64..=10.0,
        n_trials in 1usize..=1_000_000,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        duration_minutes in 1u32..=600,
        interval_seconds in 1u32..=60,
    ) {
        let mut config = QcalConfig::default();
        config.engine.k_symbiosis = k;
        config.engine.n_trials = n_trials;
        config.thresholds.tank_threshold = a.min(b);
        config.thresholds.ocean_threshold = a.max(b);
        config.session.duration_minutes = duration_minutes;
        config.session.interval_seconds = interval_seconds;

        let text = toml::to_string(&config).unwrap();
        let back = QcalConfig::from_toml(&text).unwrap();
        prop_assert_eq!(back.engine.k_symbiosis, k);
        prop_assert_eq!(back.engine.n_trials, n_trials);
        prop_assert_eq!(back.thresholds, config.thresholds);
        prop_assert_eq!(back.session.duration_minutes, duration_minutes);
        prop_assert_eq!(back.session.interval_seconds, interval_seconds);
    }
}

// ── Interval count is total over every timing ───────────────────────────

proptest! {
    #[test]
    fn total_intervals_never_exceeds_duration_seconds(
        duration_minutes in any::<u32>(),
        interval_seconds in any::<u32>(),
    ) {
        let session = SessionConfig { duration_minutes, interval_seconds };
        let total = u64::from(session.total_intervals());
        prop_assert!(total <= u64::from(duration_minutes) * 60);
        prop_assert_eq!(session.validate().is_ok(), total > 0);
    }
}
