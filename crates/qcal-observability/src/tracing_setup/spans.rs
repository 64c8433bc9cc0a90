//! Span definitions per operation: score, collapse bias, session interval.

/// Create a score span.
#[macro_export]
macro_rules! score_span {
    ($baseline_q:expr) => {
        tracing::info_span!("qcal.score", baseline_q = $baseline_q)
    };
}

/// Create a collapse-bias span.
#[macro_export]
macro_rules! bias_span {
    ($q_current:expr, $n_trials:expr) => {
        tracing::info_span!("qcal.bias", q_current = $q_current, n_trials = $n_trials)
    };
}

/// Create a session-interval span.
#[macro_export]
macro_rules! session_span {
    ($session_id:expr, $interval:expr) => {
        tracing::info_span!("qcal.session", session_id = %$session_id, interval = $interval)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "qcal.score";
    pub const BIAS: &str = "qcal.bias";
    pub const SESSION: &str = "qcal.session";
}
