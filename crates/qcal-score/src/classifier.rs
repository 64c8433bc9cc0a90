//! Threshold classification of a Q score and the guidance copy per band.
//!
//! Comparisons are strict `<`, so a score equal to a threshold belongs to
//! the higher band. Threshold ordering is checked when the config loads,
//! not here: with `tank > ocean` the Neutral band is simply empty.

use qcal_core::models::QState;

pub const TANK_RECOMMENDATION: &str =
    "TANK: High fear density. Practice: Deep breathing, release disagreement.";
pub const NEUTRAL_RECOMMENDATION: &str =
    "NEUTRAL: Building poise. Focus: Gratitude, unity consciousness meditation.";
pub const OCEAN_RECOMMENDATION: &str =
    "OCEAN: High Q achieved! Maintain: Loving awareness, symbiotic mindset.";

/// Band a Q score against the tank and ocean thresholds.
pub fn classify(q_score: f64, tank_threshold: f64, ocean_threshold: f64) -> QState {
    if q_score < tank_threshold {
        QState::Tank
    } else if q_score < ocean_threshold {
        QState::Neutral
    } else {
        QState::Ocean
    }
}

/// Guidance text for the band `q_score` falls in.
pub fn recommend(q_score: f64, tank_threshold: f64, ocean_threshold: f64) -> &'static str {
    recommendation_for(classify(q_score, tank_threshold, ocean_threshold))
}

/// Canonical guidance text for a band.
pub fn recommendation_for(state: QState) -> &'static str {
    match state {
        QState::Tank => TANK_RECOMMENDATION,
        QState::Neutral => NEUTRAL_RECOMMENDATION,
        QState::Ocean => OCEAN_RECOMMENDATION,
    }
}
