//! # qcal-score
//!
//! Manual mood/stress input → observer-quality (Q) score, plus the
//! threshold classifier that turns a Q score into a state and guidance.

pub mod classifier;
pub mod engine;
pub mod formula;

pub use classifier::{classify, recommend};
pub use engine::ScoreEngine;
pub use formula::{compute_breakdown, compute_score, ScoreBreakdown};
