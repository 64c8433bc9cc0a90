//! Per-face weights for a collapse bias and their normalization.

use qcal_core::constants::{FACE_COUNT, FAVORABLE_FACE, NEUTRAL_COLLAPSE_BIAS};
use qcal_core::errors::{QcalError, QcalResult};

/// Faces 1–3 occupy indices `0..HALF`, faces 4–6 occupy `HALF..FACE_COUNT`.
const HALF: usize = FACE_COUNT / 2;

/// Unnormalized weights for faces 1..=6.
///
/// Above neutral every face starts at `1 - bias` and faces 4–6 gain
/// `(bias - 1) / 3`. At or below neutral every face starts at
/// `1 + (1 - bias)` and faces 1–3 gain `(1 - bias) / 3`.
///
/// Above neutral all six weights are negative (faces 4–6 end at
/// `2/3 × (1 - bias)`), so the normalized tilt lands on faces 1–3.
pub fn unnormalized_weights(collapse_bias: f64) -> [f64; FACE_COUNT] {
    let mut weights;
    if collapse_bias > NEUTRAL_COLLAPSE_BIAS {
        weights = [1.0 - collapse_bias; FACE_COUNT];
        for w in &mut weights[HALF..] {
            *w += (collapse_bias - 1.0) / 3.0;
        }
    } else {
        weights = [1.0 + (1.0 - collapse_bias); FACE_COUNT];
        for w in &mut weights[..HALF] {
            *w += (1.0 - collapse_bias) / 3.0;
        }
    }
    weights
}

/// Divide every weight by the total.
///
/// Fails with `InvalidDistribution` when the total is zero or not finite,
/// or when mixed-sign weights would leave a negative probability.
pub fn normalize(weights: &[f64; FACE_COUNT]) -> QcalResult<[f64; FACE_COUNT]> {
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum == 0.0 {
        return Err(QcalError::InvalidDistribution {
            reason: format!("weight sum {sum} cannot be normalized"),
        });
    }

    let mut probabilities = [0.0; FACE_COUNT];
    for (p, w) in probabilities.iter_mut().zip(weights) {
        *p = w / sum;
    }

    if let Some((face, p)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(QcalError::InvalidDistribution {
            reason: format!("face {} has probability {p}", face + 1),
        });
    }

    Ok(probabilities)
}

/// Exact expectation `Σ face × p(face)`.
pub fn expected_face(probabilities: &[f64; FACE_COUNT]) -> f64 {
    probabilities
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1) as f64 * p)
        .sum()
}

/// Exact probability of rolling a favorable face (4 or higher).
pub fn theoretical_favorable(probabilities: &[f64; FACE_COUNT]) -> f64 {
    probabilities[(FAVORABLE_FACE as usize - 1)..].iter().sum()
}
