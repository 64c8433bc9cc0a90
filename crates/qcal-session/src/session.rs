use chrono::{DateTime, Utc};
use qcal_bias::CollapseBiasEngine;
use qcal_core::config::{QcalConfig, ThresholdConfig};
use qcal_core::errors::{QcalError, QcalResult};
use qcal_core::models::{
    BiasResult, ManualInput, Measurement, QState, ScoreResult, SessionSummary,
};
use qcal_core::traits::IScoreEngine;
use qcal_observability::session_span;
use qcal_score::{classifier, ScoreEngine};
use rand::Rng;
use tracing::{info, warn};

/// Everything produced by one recorded interval.
#[derive(Debug, Clone)]
pub struct IntervalOutcome {
    pub measurement: Measurement,
    pub score: ScoreResult,
    pub bias: BiasResult,
    pub state: QState,
    /// Present when this interval completed the session.
    pub summary: Option<SessionSummary>,
}

/// One user's calibration session.
///
/// Intervals are 1-based. After `total_intervals` recordings (or an early
/// [`complete`](Self::complete)) the session is closed and rejects further
/// input.
#[derive(Debug, Clone)]
pub struct CalibrationSession {
    id: String,
    user_id: String,
    baseline_q: f64,
    thresholds: ThresholdConfig,
    total_intervals: u32,
    score_engine: ScoreEngine,
    bias_engine: CollapseBiasEngine,
    measurements: Vec<Measurement>,
    started_at: DateTime<Utc>,
    summary: Option<SessionSummary>,
}

impl CalibrationSession {
    /// Open a session with a fresh id. The config is validated first.
    pub fn start(
        user_id: impl Into<String>,
        baseline_q: f64,
        config: &QcalConfig,
    ) -> QcalResult<Self> {
        config.validate()?;
        let session = Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            baseline_q,
            thresholds: config.thresholds,
            total_intervals: config.session.total_intervals(),
            score_engine: ScoreEngine::new(),
            bias_engine: CollapseBiasEngine::from_config(&config.engine),
            measurements: Vec::new(),
            started_at: Utc::now(),
            summary: None,
        };
        info!(
            session_id = %session.id,
            user_id = %session.user_id,
            baseline_q,
            total_intervals = session.total_intervals,
            "calibration session started"
        );
        Ok(session)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn baseline_q(&self) -> f64 {
        self.baseline_q
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn total_intervals(&self) -> u32 {
        self.total_intervals
    }

    /// Number of the interval the next recording will fill.
    pub fn interval_number(&self) -> u32 {
        self.measurements.len() as u32 + 1
    }

    pub fn remaining_intervals(&self) -> u32 {
        if self.is_completed() {
            return 0;
        }
        self.total_intervals
            .saturating_sub(self.measurements.len() as u32)
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn is_completed(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Latest Q score, or the baseline before the first interval.
    pub fn current_q(&self) -> f64 {
        self.measurements
            .last()
            .map(|m| m.q_score)
            .unwrap_or(self.baseline_q)
    }

    pub fn current_state(&self) -> QState {
        classifier::classify(
            self.current_q(),
            self.thresholds.tank_threshold,
            self.thresholds.ocean_threshold,
        )
    }

    /// Score one interval, append its measurement, and close the session
    /// when this was the last interval.
    pub fn record_interval<R: Rng + ?Sized>(
        &mut self,
        input: ManualInput,
        rng: &mut R,
    ) -> QcalResult<IntervalOutcome> {
        if self.is_completed() {
            warn!(session_id = %self.id, "interval recorded on completed session");
            return Err(QcalError::SessionCompleted {
                session_id: self.id.clone(),
            });
        }

        let interval_number = self.interval_number();
        let span = session_span!(self.id, interval_number);
        let _guard = span.enter();

        let score = self.score_engine.compute_score(&input, self.baseline_q);
        let bias = self.bias_engine.evaluate(score.q_score, rng)?;
        let state = classifier::classify(
            score.q_score,
            self.thresholds.tank_threshold,
            self.thresholds.ocean_threshold,
        );

        let measurement = Measurement {
            session_id: self.id.clone(),
            interval_number,
            q_score: score.q_score,
            fear_density: score.fear_density,
            mood_input: input.mood,
            stress_input: input.stress,
            collapse_bias: bias.theoretical_bias,
            mean_dice: bias.mean_dice,
            recommendation: classifier::recommendation_for(state).to_string(),
            measured_at: Utc::now(),
        };
        self.measurements.push(measurement.clone());

        let summary = if interval_number >= self.total_intervals {
            Some(self.close())
        } else {
            None
        };

        Ok(IntervalOutcome {
            measurement,
            score,
            bias,
            state,
            summary,
        })
    }

    /// End the session early with the intervals recorded so far.
    pub fn complete(&mut self) -> QcalResult<SessionSummary> {
        if self.is_completed() {
            return Err(QcalError::SessionCompleted {
                session_id: self.id.clone(),
            });
        }
        if self.measurements.is_empty() {
            return Err(QcalError::EmptySession {
                session_id: self.id.clone(),
            });
        }
        Ok(self.close())
    }

    // Callers guarantee at least one measurement.
    fn close(&mut self) -> SessionSummary {
        let final_q = self.current_q();
        let avg_collapse_bias = self
            .measurements
            .iter()
            .map(|m| m.collapse_bias)
            .sum::<f64>()
            / self.measurements.len() as f64;

        let summary = SessionSummary {
            session_id: self.id.clone(),
            user_id: self.user_id.clone(),
            baseline_q: self.baseline_q,
            final_q,
            q_improvement: final_q - self.baseline_q,
            avg_collapse_bias,
            interval_count: self.measurements.len() as u32,
            started_at: self.started_at,
            completed_at: Utc::now(),
        };
        info!(
            session_id = %self.id,
            final_q,
            q_improvement = summary.q_improvement,
            avg_collapse_bias,
            "calibration session completed"
        );
        self.summary = Some(summary.clone());
        summary
    }
}
