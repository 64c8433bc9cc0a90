use qcal_core::constants::{LOG_EPSILON, MAX_COLLAPSE_BIAS, NEUTRAL_COLLAPSE_BIAS};
use qcal_core::models::Interpretation;

/// Unclamped bias: `q × (1 + k × ln(q + ε))`.
///
/// `ε` keeps `q = 0` finite. Negative `q` below `-ε` produces NaN.
pub fn raw_bias(q_current: f64, k_symbiosis: f64) -> f64 {
    q_current * (1.0 + k_symbiosis * (q_current + LOG_EPSILON).ln())
}

/// Clamp a raw bias into `[0, 2]`. NaN passes through.
pub fn clamp_bias(psi: f64) -> f64 {
    psi.clamp(0.0, MAX_COLLAPSE_BIAS)
}

/// Clamped collapse bias for a Q score.
pub fn collapse_bias(q_current: f64, k_symbiosis: f64) -> f64 {
    clamp_bias(raw_bias(q_current, k_symbiosis))
}

/// Ocean tilt strictly above neutral, tank drag otherwise.
pub fn interpret(collapse_bias: f64) -> Interpretation {
    if collapse_bias > NEUTRAL_COLLAPSE_BIAS {
        Interpretation::OceanTilt
    } else {
        Interpretation::TankDrag
    }
}
