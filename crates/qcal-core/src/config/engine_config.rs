use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, QcalResult};

/// Score and bias engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Symbiosis constant scaling the logarithmic bias transform.
    pub k_symbiosis: f64,
    /// Monte-Carlo trials per collapse-bias evaluation.
    pub n_trials: usize,
}

impl EngineConfig {
    pub fn validate(&self) -> QcalResult<()> {
        if !self.k_symbiosis.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "engine.k_symbiosis".into(),
                value: self.k_symbiosis,
            }
            .into());
        }
        if self.n_trials == 0 {
            return Err(ConfigError::OutOfRange {
                field: "engine.n_trials".into(),
                value: 0.0,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            k_symbiosis: defaults::DEFAULT_K_SYMBIOSIS,
            n_trials: defaults::DEFAULT_N_TRIALS,
        }
    }
}
