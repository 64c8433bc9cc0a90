//! Aggregates over a user's completed sessions.

use serde::{Deserialize, Serialize};

use qcal_core::models::SessionSummary;

/// Completed sessions for one user, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    /// Reported by the aggregates while no session has completed.
    pub baseline_q: f64,
    pub sessions: Vec<SessionSummary>,
}

impl SessionHistory {
    pub fn new(baseline_q: f64) -> Self {
        Self {
            baseline_q,
            sessions: Vec::new(),
        }
    }

    pub fn from_summaries(baseline_q: f64, sessions: Vec<SessionSummary>) -> Self {
        Self {
            baseline_q,
            sessions,
        }
    }

    pub fn record(&mut self, summary: SessionSummary) {
        self.sessions.push(summary);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Mean final Q across sessions.
    pub fn average_q(&self) -> f64 {
        if self.sessions.is_empty() {
            return self.baseline_q;
        }
        let sum: f64 = self.sessions.iter().map(|s| s.final_q).sum();
        sum / self.sessions.len() as f64
    }

    /// Highest final Q across sessions.
    pub fn best_q(&self) -> f64 {
        self.sessions
            .iter()
            .map(|s| s.final_q)
            .reduce(f64::max)
            .unwrap_or(self.baseline_q)
    }

    /// Per-session improvement over baseline, in session order.
    pub fn q_trend(&self) -> Vec<f64> {
        self.sessions.iter().map(|s| s.q_improvement).collect()
    }

    pub fn latest(&self) -> Option<&SessionSummary> {
        self.sessions.last()
    }
}
