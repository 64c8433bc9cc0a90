//! Inverse-CDF sampling of a six-face distribution.

use qcal_core::constants::{FACE_COUNT, FAVORABLE_FACE};
use qcal_core::errors::{QcalError, QcalResult};
use rand::Rng;

/// Face for a uniform draw `u ∈ [0, 1)`.
///
/// Walks the cumulative distribution in face order and returns the first
/// face whose cumulative mass is `>= u`; ties go to the earlier face. If
/// rounding leaves the total just under `u`, the last face is returned.
pub fn face_for_draw(probabilities: &[f64; FACE_COUNT], u: f64) -> u8 {
    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if u <= cumulative {
            return (i + 1) as u8;
        }
    }
    FACE_COUNT as u8
}

/// Roll the biased die once.
pub fn roll_die<R: Rng + ?Sized>(probabilities: &[f64; FACE_COUNT], rng: &mut R) -> u8 {
    face_for_draw(probabilities, rng.gen::<f64>())
}

/// Summary of `n_trials` sampled rolls.
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloStats {
    pub n_trials: usize,
    /// Rolls per face, faces 1..=6.
    pub counts: [u64; FACE_COUNT],
    pub mean: f64,
    pub favorable_rate: f64,
}

impl MonteCarloStats {
    /// Sampled frequency per face.
    pub fn frequencies(&self) -> [f64; FACE_COUNT] {
        let mut freq = [0.0; FACE_COUNT];
        for (f, c) in freq.iter_mut().zip(&self.counts) {
            *f = *c as f64 / self.n_trials as f64;
        }
        freq
    }
}

/// Draw `n_trials` rolls and summarize them.
pub fn simulate<R: Rng + ?Sized>(
    probabilities: &[f64; FACE_COUNT],
    n_trials: usize,
    rng: &mut R,
) -> QcalResult<MonteCarloStats> {
    if n_trials == 0 {
        return Err(QcalError::InvalidArgument {
            reason: "n_trials must be at least 1".into(),
        });
    }

    let mut counts = [0u64; FACE_COUNT];
    for _ in 0..n_trials {
        let face = roll_die(probabilities, rng);
        counts[face as usize - 1] += 1;
    }

    let total: u64 = counts
        .iter()
        .enumerate()
        .map(|(i, c)| (i as u64 + 1) * c)
        .sum();
    let favorable: u64 = counts[(FAVORABLE_FACE as usize - 1)..].iter().sum();

    Ok(MonteCarloStats {
        n_trials,
        counts,
        mean: total as f64 / n_trials as f64,
        favorable_rate: favorable as f64 / n_trials as f64,
    })
}
