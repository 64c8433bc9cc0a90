//! # qcal-core
//!
//! Foundation crate for the Q-calibration engine.
//! Defines the value types, traits, errors, config, and constants
//! shared by the score, bias, and session crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QcalConfig;
pub use errors::{QcalError, QcalResult};
pub use models::{
    BiasResult, Interpretation, ManualInput, Measurement, QState, ScoreResult, SessionSummary,
};
