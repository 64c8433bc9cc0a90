use crate::models::{ManualInput, ScoreResult};

/// Manual input → Q score.
pub trait IScoreEngine: Send + Sync {
    /// Score one interval against the user's baseline. Total over all finite
    /// inputs. A NaN `baseline_q` propagates to a NaN `q_score`, and so does
    /// an infinite one whenever it meets a zero term (mood 10, stress 0).
    fn compute_score(&self, input: &ManualInput, baseline_q: f64) -> ScoreResult;
}
