//! # qcal-bias
//!
//! Q score → collapse bias → tilted six-face distribution → Monte-Carlo
//! statistics. Randomness is always injected by the caller.

pub mod distribution;
pub mod engine;
pub mod sampling;
pub mod transform;

pub use engine::{compute_collapse_bias, CollapseBiasEngine};
pub use sampling::{roll_die, MonteCarloStats};
