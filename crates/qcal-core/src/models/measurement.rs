use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::QcalResult;

/// One evaluated interval, shaped for the `measurements` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub session_id: String,
    /// 1-based interval index within the session.
    pub interval_number: u32,
    pub q_score: f64,
    pub fear_density: f64,
    pub mood_input: f64,
    pub stress_input: f64,
    pub collapse_bias: f64,
    pub mean_dice: f64,
    pub recommendation: String,
    pub measured_at: DateTime<Utc>,
}

impl Measurement {
    /// JSON row for the storage collaborator.
    pub fn to_json(&self) -> QcalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
