use rand::RngCore;

use crate::errors::QcalResult;
use crate::models::BiasResult;

/// Q score → biased die distribution with Monte-Carlo statistics.
pub trait IBiasEngine: Send + Sync {
    /// Evaluate the collapse bias for `q_current`, drawing `n_trials` samples from `rng`.
    fn compute_collapse_bias(
        &self,
        q_current: f64,
        n_trials: usize,
        rng: &mut dyn RngCore,
    ) -> QcalResult<BiasResult>;

    /// Symbiosis constant bound into this engine.
    fn k_symbiosis(&self) -> f64;
}
