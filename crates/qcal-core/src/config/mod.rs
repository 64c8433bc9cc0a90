pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod session_config;
pub mod threshold_config;

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use threshold_config::ThresholdConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, QcalResult};

/// Top-level configuration, loaded from TOML.
///
/// Every section is optional; missing sections and fields fall back to
/// the values in [`defaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QcalConfig {
    pub engine: EngineConfig,
    pub thresholds: ThresholdConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl QcalConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(input: &str) -> QcalResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> QcalResult<()> {
        self.engine.validate()?;
        self.thresholds.validate()?;
        self.session.validate()?;
        Ok(())
    }
}
