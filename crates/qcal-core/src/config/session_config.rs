use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, QcalResult};

/// Calibration session timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Total session length in minutes.
    pub duration_minutes: u32,
    /// Seconds between interval prompts.
    pub interval_seconds: u32,
}

impl SessionConfig {
    /// Number of intervals in a full session. Zero when the interval is zero
    /// or the duration does not fit in `u32` seconds.
    pub fn total_intervals(&self) -> u32 {
        self.checked_total_intervals().unwrap_or(0)
    }

    fn checked_total_intervals(&self) -> Option<u32> {
        self.duration_minutes
            .checked_mul(60)?
            .checked_div(self.interval_seconds)
    }

    pub fn validate(&self) -> QcalResult<()> {
        if self.interval_seconds == 0 {
            return Err(ConfigError::ZeroInterval.into());
        }
        if self.total_intervals() == 0 {
            return Err(ConfigError::OutOfRange {
                field: "session.duration_minutes".into(),
                value: self.duration_minutes as f64,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: defaults::DEFAULT_DURATION_MINUTES,
            interval_seconds: defaults::DEFAULT_INTERVAL_SECONDS,
        }
    }
}
