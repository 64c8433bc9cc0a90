use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, QcalResult};

/// Per-user Q-state thresholds.
///
/// Invariant after [`validate`](Self::validate):
/// `0 <= tank_threshold <= ocean_threshold <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Q scores at or above this are Ocean.
    pub ocean_threshold: f64,
    /// Q scores below this are Tank.
    pub tank_threshold: f64,
}

impl ThresholdConfig {
    pub fn validate(&self) -> QcalResult<()> {
        for (field, value) in [
            ("thresholds.ocean_threshold", self.ocean_threshold),
            ("thresholds.tank_threshold", self.tank_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field: field.into(),
                    value,
                }
                .into());
            }
        }
        if self.tank_threshold > self.ocean_threshold {
            return Err(ConfigError::ThresholdOrder {
                tank: self.tank_threshold,
                ocean: self.ocean_threshold,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            ocean_threshold: defaults::DEFAULT_OCEAN_THRESHOLD,
            tank_threshold: defaults::DEFAULT_TANK_THRESHOLD,
        }
    }
}
