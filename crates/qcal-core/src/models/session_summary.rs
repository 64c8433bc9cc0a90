use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::QcalResult;

/// Closing figures of a calibration session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub session_id: String,
    pub user_id: String,
    pub baseline_q: f64,
    pub final_q: f64,
    /// `final_q - baseline_q`; negative when the session ended lower.
    pub q_improvement: f64,
    pub avg_collapse_bias: f64,
    pub interval_count: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn to_json(&self) -> QcalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
