use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of the score engine for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Observer quality, always in `[0, 1]`.
    pub q_score: f64,
    /// Divergence from ideal synchronization. Not bounded.
    pub fear_density: f64,
    /// Mood proxy in `[0, 1]`.
    pub sync_eeg: f64,
    /// Inverted stress proxy in `[0, 1]`.
    pub sync_hrv: f64,
}
