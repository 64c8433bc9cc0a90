use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Three-way qualitative band of a Q score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QState {
    Tank,
    Neutral,
    Ocean,
}

impl QState {
    /// Short status line shown next to the live score.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Ocean => "OCEAN: High Q Achieved",
            Self::Neutral => "NEUTRAL: Building Poise",
            Self::Tank => "TANK: High Fear Density",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::Neutral => "neutral",
            Self::Ocean => "ocean",
        }
    }
}

impl fmt::Display for QState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
