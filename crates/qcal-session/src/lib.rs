//! # qcal-session
//!
//! A calibration session prompts for mood and stress once per interval,
//! scores each interval, and closes with a summary. Records are shaped for
//! the external storage layer; nothing here persists them.

pub mod history;
pub mod session;

pub use history::SessionHistory;
pub use session::{CalibrationSession, IntervalOutcome};
