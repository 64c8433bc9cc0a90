use qcal_core::models::{ManualInput, ScoreResult};
use qcal_core::traits::IScoreEngine;
use qcal_observability::score_span;
use tracing::debug;

use crate::formula;

/// Stateless score engine. Exists so callers can hold an `IScoreEngine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score with a full breakdown of each term.
    pub fn calculate_breakdown(
        &self,
        input: &ManualInput,
        baseline_q: f64,
    ) -> formula::ScoreBreakdown {
        formula::compute_breakdown(input, baseline_q)
    }
}

impl IScoreEngine for ScoreEngine {
    fn compute_score(&self, input: &ManualInput, baseline_q: f64) -> ScoreResult {
        let span = score_span!(baseline_q);
        let _guard = span.enter();
        let breakdown = formula::compute_breakdown(input, baseline_q);
        debug!(
            mood = input.mood,
            stress = input.stress,
            baseline_q,
            fear_density = breakdown.fear_density,
            q_score = breakdown.q_score,
            "computed q score"
        );
        breakdown.into()
    }
}
