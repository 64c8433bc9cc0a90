use qcal_core::config::defaults::{DEFAULT_K_SYMBIOSIS, DEFAULT_N_TRIALS};
use qcal_core::config::EngineConfig;
use qcal_core::errors::{QcalError, QcalResult};
use qcal_core::models::BiasResult;
use qcal_core::traits::IBiasEngine;
use qcal_observability::bias_span;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::distribution;
use crate::sampling;
use crate::transform;

/// Collapse bias for `q_current` under `k_symbiosis`, sampled `n_trials` times.
///
/// 1. `psi = q × (1 + k × ln(q + 1e-6))`, clamped to `[0, 2]`.
/// 2. Per-face weights from the clamped bias, normalized to sum to 1.
/// 3. `n_trials` inverse-CDF rolls give the sampled mean and favorable rate.
///
/// Fails with `InvalidArgument` for `n_trials == 0` or a non-finite `q`/`k`,
/// and with `InvalidDistribution` when the weights cannot be normalized.
pub fn compute_collapse_bias<R: Rng + ?Sized>(
    q_current: f64,
    k_symbiosis: f64,
    n_trials: usize,
    rng: &mut R,
) -> QcalResult<BiasResult> {
    let span = bias_span!(q_current, n_trials);
    let _guard = span.enter();
    if n_trials == 0 {
        return Err(QcalError::InvalidArgument {
            reason: "n_trials must be at least 1".into(),
        });
    }
    if !q_current.is_finite() || !k_symbiosis.is_finite() {
        return Err(QcalError::InvalidArgument {
            reason: format!("q_current {q_current} and k_symbiosis {k_symbiosis} must be finite"),
        });
    }

    let psi = transform::raw_bias(q_current, k_symbiosis);
    let collapse_bias = transform::clamp_bias(psi);
    if collapse_bias.is_nan() {
        return Err(QcalError::InvalidDistribution {
            reason: format!("collapse bias is undefined for q_current {q_current}"),
        });
    }

    let weights = distribution::unnormalized_weights(collapse_bias);
    let probabilities = distribution::normalize(&weights)?;
    let stats = sampling::simulate(&probabilities, n_trials, rng)?;
    let interpretation = transform::interpret(collapse_bias);

    debug!(
        q_current,
        k_symbiosis,
        psi,
        collapse_bias,
        mean_dice = stats.mean,
        favorable_rate = stats.favorable_rate,
        %interpretation,
        "computed collapse bias"
    );

    Ok(BiasResult {
        theoretical_bias: collapse_bias,
        mean_dice: stats.mean,
        favorable_rate: stats.favorable_rate,
        probabilities,
        q_factor: q_current,
        interpretation,
    })
}

/// Bias engine bound to one symbiosis constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapseBiasEngine {
    k_symbiosis: f64,
    n_trials: usize,
}

impl CollapseBiasEngine {
    /// Engine with the given symbiosis constant and 1000 trials per call.
    pub fn new(k_symbiosis: f64) -> Self {
        Self {
            k_symbiosis,
            n_trials: DEFAULT_N_TRIALS,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            k_symbiosis: config.k_symbiosis,
            n_trials: config.n_trials,
        }
    }

    /// Override the default trial count.
    pub fn with_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    pub fn k_symbiosis(&self) -> f64 {
        self.k_symbiosis
    }

    /// Trials used by [`evaluate`](Self::evaluate) and the convenience wrappers.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Evaluate with the engine's trial count and the caller's generator.
    pub fn evaluate<R: Rng + ?Sized>(&self, q_current: f64, rng: &mut R) -> QcalResult<BiasResult> {
        compute_collapse_bias(q_current, self.k_symbiosis, self.n_trials, rng)
    }

    /// Reproducible evaluation from a fixed seed.
    pub fn evaluate_seeded(&self, q_current: f64, seed: u64) -> QcalResult<BiasResult> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.evaluate(q_current, &mut rng)
    }

    /// Evaluation against the calling thread's generator.
    pub fn evaluate_with_thread_rng(&self, q_current: f64) -> QcalResult<BiasResult> {
        self.evaluate(q_current, &mut rand::thread_rng())
    }
}

impl Default for CollapseBiasEngine {
    fn default() -> Self {
        Self::new(DEFAULT_K_SYMBIOSIS)
    }
}

impl IBiasEngine for CollapseBiasEngine {
    fn compute_collapse_bias(
        &self,
        q_current: f64,
        n_trials: usize,
        rng: &mut dyn RngCore,
    ) -> QcalResult<BiasResult> {
        compute_collapse_bias(q_current, self.k_symbiosis, n_trials, rng)
    }

    fn k_symbiosis(&self) -> f64 {
        self.k_symbiosis
    }
}
