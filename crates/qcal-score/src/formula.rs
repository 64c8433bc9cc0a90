use qcal_core::constants::MANUAL_SCALE_MAX;
use qcal_core::models::{ManualInput, ScoreResult};

/// Q score from manual input and the user's baseline.
///
/// ```text
/// syncEeg     = clamp(mood / 10, 0, 1)
/// syncHrv     = clamp(1 - stress / 10, 0, 1)
/// fearDensity = (1 - (syncEeg + syncHrv) / 2) × (1 - baselineQ)
/// qScore      = clamp(syncEeg × syncHrv × (1 - fearDensity), 0, 1)
/// ```
///
/// Out-of-range mood and stress saturate. `baseline_q` is used as given,
/// so `fear_density` is only bounded when the baseline lies in `[0, 1]`.
pub fn compute_score(input: &ManualInput, baseline_q: f64) -> ScoreResult {
    compute_breakdown(input, baseline_q).into()
}

/// Every intermediate of [`compute_score`], for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub sync_eeg: f64,
    pub sync_hrv: f64,
    pub fear_base: f64,
    pub fear_density: f64,
    pub q_score: f64,
}

/// Compute the score with a full breakdown of each term.
pub fn compute_breakdown(input: &ManualInput, baseline_q: f64) -> ScoreBreakdown {
    let sync_eeg = (input.mood / MANUAL_SCALE_MAX).clamp(0.0, 1.0);
    let sync_hrv = (1.0 - input.stress / MANUAL_SCALE_MAX).clamp(0.0, 1.0);

    let fear_base = 1.0 - (sync_eeg + sync_hrv) / 2.0;
    let fear_density = fear_base * (1.0 - baseline_q);

    let q_score = (sync_eeg * sync_hrv * (1.0 - fear_density)).clamp(0.0, 1.0);

    ScoreBreakdown {
        sync_eeg,
        sync_hrv,
        fear_base,
        fear_density,
        q_score,
    }
}

impl From<ScoreBreakdown> for ScoreResult {
    fn from(b: ScoreBreakdown) -> Self {
        ScoreResult {
            q_score: b.q_score,
            fear_density: b.fear_density,
            sync_eeg: b.sync_eeg,
            sync_hrv: b.sync_hrv,
        }
    }
}
