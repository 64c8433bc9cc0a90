use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Self-reported mood and stress, each nominally on `[0, 10]`.
///
/// Values outside that range are accepted; the score engine saturates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ManualInput {
    pub mood: f64,
    pub stress: f64,
}

impl ManualInput {
    pub fn new(mood: f64, stress: f64) -> Self {
        Self { mood, stress }
    }
}

impl Default for ManualInput {
    /// Mid-scale input, matching the prompt's starting slider position.
    fn default() -> Self {
        Self {
            mood: 5.0,
            stress: 5.0,
        }
    }
}
