use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::FACE_COUNT;

/// Direction of the die tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Interpretation {
    /// Collapse bias above neutral.
    #[serde(rename = "Ocean Tilt (+)")]
    OceanTilt,
    /// Collapse bias at or below neutral.
    #[serde(rename = "Tank Drag (-)")]
    TankDrag,
}

impl Interpretation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OceanTilt => "Ocean Tilt (+)",
            Self::TankDrag => "Tank Drag (-)",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biased die distribution and its Monte-Carlo summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiasResult {
    /// Clamped collapse bias in `[0, 2]`.
    pub theoretical_bias: f64,
    /// Sampled mean face value.
    pub mean_dice: f64,
    /// Sampled fraction of faces >= 4.
    pub favorable_rate: f64,
    /// Normalized probability per face, faces 1..=6 in order.
    pub probabilities: [f64; FACE_COUNT],
    /// The Q score the bias was derived from.
    pub q_factor: f64,
    pub interpretation: Interpretation,
}
